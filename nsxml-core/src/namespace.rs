//! Namespace descriptors supplied by the namespace registry.
//!
//! Ids are dense and stable for the lifetime of one output stream. The list
//! carried by a namespace declaration is indexed by id; a `None` slot means
//! no namespace is used at that id.

use std::fmt;
use std::sync::Arc;

/// Dense namespace identity.
///
/// Identity, not URI, decides whether two members share a namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamespaceId(pub u32);

impl NamespaceId {
    #[inline]
    pub fn new(index: usize) -> Self {
        NamespaceId(index as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A namespace known to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub id: NamespaceId,
    /// `None` marks the "no namespace" case.
    pub uri: Option<String>,
    /// Preferred prefix, without the trailing `:`.
    pub default_prefix: Option<String>,
}

impl Namespace {
    /// Create a namespace with a URI and no prefix hint.
    pub fn new(id: usize, uri: impl Into<String>) -> Self {
        Self {
            id: NamespaceId::new(id),
            uri: Some(uri.into()),
            default_prefix: None,
        }
    }

    /// Create the "no namespace" marker for `id`.
    pub fn none(id: usize) -> Self {
        Self {
            id: NamespaceId::new(id),
            uri: None,
            default_prefix: None,
        }
    }

    /// Set the preferred prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.default_prefix = Some(prefix.into());
        self
    }

    /// The prefix hint, if present and non-empty.
    #[inline]
    pub fn hint(&self) -> Option<&str> {
        self.default_prefix.as_deref().filter(|p| !p.is_empty())
    }
}

/// Ordered namespace list as carried by a declaration token.
///
/// Shared so the same list can be handed to several chunks cheaply.
pub type NamespaceList = Arc<[Option<Namespace>]>;
