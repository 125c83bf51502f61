//! nsxml Core Writer
//!
//! Incremental XML writer driven by chunks of structural tokens.
//! Never builds a document tree: each chunk is turned into text as it arrives.
//!
//! # Architecture
//!
//! - **token.rs** - `Entry` sum type (element/attribute/comment/namespace tokens and values)
//! - **chunk.rs** - Count-prefixed, reusable entry buffer
//! - **prefix.rs** - Namespace prefix allocation
//! - **writer.rs** - Serializer state machine carried across chunks
//! - **sink.rs** - Glue for `io::Write` destinations

pub mod chunk;
pub mod config;
pub mod error;
pub mod escape;
pub mod namespace;
pub mod prefix;
pub mod sink;
pub mod token;
pub mod value;
pub mod writer;

pub use chunk::Chunk;
pub use config::WriterConfig;
pub use error::{ErrorKind, Result, WriteError};
pub use namespace::{Namespace, NamespaceId, NamespaceList};
pub use prefix::{allocate, PrefixTable};
pub use sink::{chunks_to_string, write_chunks, SinkError, XmlSink};
pub use token::{Entry, Member};
pub use value::Value;
pub use writer::{State, Writer};
