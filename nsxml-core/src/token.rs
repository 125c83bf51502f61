//! Chunk entries - the input of the writer.
//!
//! Document shape is carried by structural tokens; content is carried by
//! [`Value`] entries placed right after the token they belong to.
//!
//! ## Entry Sequences
//!
//! Element with an attribute and a child `<a x="5"><b/></a>`:
//! ```text
//! Open(ns, "a")
//! Attribute(ns, "x")
//! Value(5)
//! Emitted
//! Open(ns, "b")
//! Close(ns, "b")
//! Close(ns, "a")
//! ```
//!
//! Text content `<a>hi</a>`:
//! ```text
//! Open(ns, "a")
//! Emitted
//! Value("hi")
//! Close(ns, "a")
//! ```
//!
//! Comment `<!--note-->`:
//! ```text
//! Comment
//! Value("note")
//! ```

use std::sync::Arc;

use crate::namespace::{NamespaceId, NamespaceList};
use crate::value::Value;

/// A namespace id paired with a local name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub ns: NamespaceId,
    pub name: Arc<str>,
}

impl Member {
    pub fn new(ns: NamespaceId, name: impl Into<Arc<str>>) -> Self {
        Self { ns, name: name.into() }
    }
}

/// One chunk entry: a structural token or a primitive value.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    // ========== Structure ==========

    /// Element start tag begins.
    Open(Member),

    /// End of start-tag attributes: the element will have content.
    Emitted,

    /// Element end. Collapses to `/>` when no `Emitted` was seen.
    Close(Member),

    // ========== Attributes ==========

    /// Attribute name; the next entry is its value.
    Attribute(Member),

    // ========== Other ==========

    /// Comment; the next entry is its body.
    Comment,

    /// Namespace list. Only the first one in a stream is honored.
    Namespaces(NamespaceList),

    // ========== Content ==========

    /// Attribute value, text content or comment body.
    Value(Value),
}

impl Entry {
    /// Element start for `name` in namespace `ns`.
    pub fn open(ns: NamespaceId, name: &str) -> Self {
        Entry::Open(Member::new(ns, name))
    }

    /// Element end for `name` in namespace `ns`.
    pub fn close(ns: NamespaceId, name: &str) -> Self {
        Entry::Close(Member::new(ns, name))
    }

    /// Attribute name `name` in namespace `ns`.
    pub fn attribute(ns: NamespaceId, name: &str) -> Self {
        Entry::Attribute(Member::new(ns, name))
    }

    /// Primitive value entry.
    pub fn value(value: impl Into<Value>) -> Self {
        Entry::Value(value.into())
    }

    /// Check if this is a primitive value.
    pub fn is_value(&self) -> bool {
        matches!(self, Entry::Value(_))
    }

    /// Short name of the entry kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Entry::Open(_) => "open",
            Entry::Emitted => "emitted",
            Entry::Close(_) => "close",
            Entry::Attribute(_) => "attribute",
            Entry::Comment => "comment",
            Entry::Namespaces(_) => "namespaces",
            Entry::Value(_) => "value",
        }
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        Entry::Value(value)
    }
}
