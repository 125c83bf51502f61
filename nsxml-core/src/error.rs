//! Writer errors.
//!
//! Every error is a hard failure for the chunk that raised it. The writer
//! rolls back to its state before that chunk, so the host decides whether to
//! abort the stream or fix the cause and resubmit.

use std::sync::Arc;

use thiserror::Error;

use crate::namespace::NamespaceId;

/// Broad failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Open/close tokens do not balance.
    Structural,
    /// A token arrived in a state where it has no meaning.
    Sequencing,
    /// A configured limit was exceeded.
    Configuration,
}

/// Errors raised while turning entries into XML text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum WriteError {
    /// A close token arrived with no element open.
    #[error("close of </{name}> with no open element")]
    UnbalancedClose { name: Arc<str> },

    /// The stream ended with elements still open.
    #[error("stream ended with {depth} unclosed element(s)")]
    UnclosedElements { depth: usize },

    /// An attribute name outside a start tag.
    #[error("attribute `{name}` outside a start tag")]
    AttributeOutsideStartTag { name: Arc<str> },

    /// End of start-tag attributes outside a start tag.
    #[error("end of start tag outside a start tag")]
    EmittedOutsideStartTag,

    /// A comment inside a start tag.
    #[error("comment inside a start tag")]
    CommentInStartTag,

    /// A comment body was expected but something else arrived.
    #[error("expected a comment body, found {found}")]
    MissingCommentBody { found: &'static str },

    /// A member refers to a namespace id no declaration covers.
    #[error("namespace {id} used before it was declared")]
    UndeclaredNamespace { id: NamespaceId },

    /// Nesting went past the configured maximum depth.
    #[error("nesting depth exceeds configured maximum of {limit}")]
    DepthLimitExceeded { limit: usize },
}

impl WriteError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnbalancedClose { .. } | Self::UnclosedElements { .. } => ErrorKind::Structural,
            Self::AttributeOutsideStartTag { .. }
            | Self::EmittedOutsideStartTag
            | Self::CommentInStartTag
            | Self::MissingCommentBody { .. }
            | Self::UndeclaredNamespace { .. } => ErrorKind::Sequencing,
            Self::DepthLimitExceeded { .. } => ErrorKind::Configuration,
        }
    }
}

pub type Result<T> = std::result::Result<T, WriteError>;
