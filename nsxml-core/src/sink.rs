//! Glue between a [`Writer`] and an output destination.
//!
//! The writer itself does no I/O. `XmlSink` pushes each chunk's text into an
//! `io::Write` before accepting the next chunk, which gives the host the
//! ordering and backpressure it needs without an internal queue.

use std::io::{self, Write};

use thiserror::Error;

use crate::chunk::Chunk;
use crate::config::WriterConfig;
use crate::error::WriteError;
use crate::writer::Writer;

/// Errors from a sink: either serialization or the destination failed.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

/// A [`Writer`] bound to an `io::Write` destination.
#[derive(Debug)]
pub struct XmlSink<W: Write> {
    writer: Writer,
    out: W,
    /// Reused text buffer for one chunk
    buf: String,
}

impl<W: Write> XmlSink<W> {
    pub fn new(out: W) -> Self {
        Self::with_config(out, WriterConfig::default())
    }

    pub fn with_config(out: W, config: WriterConfig) -> Self {
        Self {
            writer: Writer::with_config(config),
            out,
            buf: String::new(),
        }
    }

    /// The underlying writer, for inspecting its state.
    pub fn writer(&self) -> &Writer {
        &self.writer
    }

    /// Serialize one chunk and write its text out.
    pub fn write_chunk(&mut self, chunk: &Chunk) -> Result<(), SinkError> {
        self.buf.clear();
        self.writer.feed_into(chunk.entries(), &mut self.buf)?;
        self.out.write_all(self.buf.as_bytes())?;
        Ok(())
    }

    /// Finish the stream, flush, and hand back the destination.
    pub fn finish(mut self) -> Result<W, SinkError> {
        let tail = self.writer.finish()?;
        self.out.write_all(tail.as_bytes())?;
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Serialize every chunk from `chunks` into `out`, then finish the stream.
pub fn write_chunks<I, W>(chunks: I, out: W) -> Result<W, SinkError>
where
    I: IntoIterator<Item = Chunk>,
    W: Write,
{
    let mut sink = XmlSink::new(out);
    for chunk in chunks {
        sink.write_chunk(&chunk)?;
    }
    sink.finish()
}

/// Serialize every chunk from `chunks` into a `String`.
pub fn chunks_to_string<I>(chunks: I) -> Result<String, WriteError>
where
    I: IntoIterator<Item = Chunk>,
{
    let mut writer = Writer::new();
    let mut xml = String::new();
    for chunk in chunks {
        writer.feed_into(chunk.entries(), &mut xml)?;
    }
    xml.push_str(&writer.finish()?);
    Ok(xml)
}
