//! Writer configuration.

use serde::{Deserialize, Serialize};

/// Options for a [`Writer`](crate::Writer).
///
/// Loadable from any serde format; missing fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Deepest allowed nesting. `None` grows indentation on demand without limit.
    pub max_depth: Option<usize>,

    /// Escape markup characters in attribute values and text.
    /// Off by default: values are written verbatim.
    pub escape: bool,
}

impl WriterConfig {
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }
}
