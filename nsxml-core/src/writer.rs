//! Incremental serializer.
//!
//! Turns chunks of [`Entry`] values into XML text without building a tree.
//! The only state carried from one chunk to the next is:
//!
//! - the current [`State`]
//! - nesting depth (and the indentation derived from it)
//! - the namespace of the innermost opened element
//! - the prefix table, allocated once from the first namespace list
//!
//! # State Machine
//!
//! ```text
//!            Open                 Emitted
//!   Text ───────────▶ Element ───────────▶ Text
//!    │ ▲                 │ Close (/>)        │ Value
//!    │ └─────────────────┘                   ▼
//!    │ Comment                           AfterText ──Close (no indent)──▶ Text
//!    ▼
//!  Comment ──Value (<!--body-->)──▶ Text
//! ```
//!
//! # Atomic Chunks
//!
//! A chunk is processed against a copy of the state and committed only when
//! every entry succeeded. On error the writer is left exactly as it was
//! before the chunk and the chunk's output is discarded, so the host can fix
//! the cause (e.g. raise the depth limit) and resubmit the same chunk.

use log::{debug, trace};

use crate::chunk::Chunk;
use crate::config::WriterConfig;
use crate::error::{Result, WriteError};
use crate::escape::{push_escaped_attr, push_escaped_text};
use crate::namespace::NamespaceId;
use crate::prefix::{allocate, PrefixTable};
use crate::token::{Entry, Member};

/// Serializer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Inside a start tag, attributes may follow.
    Element,
    /// Ready for children, text, or the matching close tag.
    Text,
    /// Text was just written; the next close tag is not indented.
    AfterText,
    /// A comment body is expected next.
    Comment,
}

/// Newline followed by tabs, grown on demand.
///
/// `at(depth)` is a prefix of one shared buffer, so there is no fixed
/// ceiling and no per-tag allocation.
#[derive(Debug)]
struct Indent {
    buf: String,
}

impl Indent {
    fn new() -> Self {
        Self { buf: String::from("\n") }
    }

    #[inline]
    fn at(&mut self, depth: usize) -> &str {
        let needed = depth + 1;
        if self.buf.len() < needed {
            let missing = needed - self.buf.len();
            self.buf.extend(std::iter::repeat('\t').take(missing));
        }
        &self.buf[..needed]
    }
}

/// Per-chunk working copy of the carried state.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    state: State,
    depth: usize,
    element_ns: Option<NamespaceId>,
}

/// Prefix for `id`, or an error if no declaration covers it.
#[inline]
fn qualifier(table: Option<&PrefixTable>, id: NamespaceId) -> Result<&str> {
    table
        .and_then(|t| t.qualifier(id))
        .ok_or(WriteError::UndeclaredNamespace { id })
}

/// Incremental XML writer.
///
/// One writer per output stream. Feed chunks in order, then call
/// [`finish`](Writer::finish).
///
/// ```
/// use nsxml_core::{Entry, Namespace, NamespaceId, Writer};
///
/// let ns = NamespaceId(0);
/// let mut writer = Writer::new();
/// let mut xml = writer
///     .feed_entries(&[
///         Entry::Namespaces(vec![Some(Namespace::new(0, "urn:t"))].into()),
///         Entry::open(ns, "root"),
///         Entry::Emitted,
///         Entry::value("hi"),
///         Entry::close(ns, "root"),
///     ])
///     .unwrap();
/// xml.push_str(&writer.finish().unwrap());
///
/// assert_eq!(xml, "\n<p1:root xmlns:p1=\"urn:t\">hi</p1:root>\n");
/// ```
#[derive(Debug)]
pub struct Writer {
    config: WriterConfig,
    state: State,
    depth: usize,
    indent: Indent,
    element_ns: Option<NamespaceId>,
    prefixes: Option<PrefixTable>,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Create a writer with the default configuration.
    pub fn new() -> Self {
        Self::with_config(WriterConfig::default())
    }

    pub fn with_config(config: WriterConfig) -> Self {
        Self {
            config,
            state: State::Text,
            depth: 0,
            indent: Indent::new(),
            element_ns: None,
            prefixes: None,
        }
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    /// Number of currently open elements.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Prefix table, once the first namespace list has been seen.
    pub fn prefixes(&self) -> Option<&PrefixTable> {
        self.prefixes.as_ref()
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Change the depth limit, e.g. after a
    /// [`DepthLimitExceeded`](WriteError::DepthLimitExceeded) error.
    pub fn set_max_depth(&mut self, limit: Option<usize>) {
        self.config.max_depth = limit;
    }

    /// Process one chunk, returning its text.
    pub fn feed(&mut self, chunk: &Chunk) -> Result<String> {
        self.feed_entries(chunk.entries())
    }

    /// Process a slice of entries as one chunk.
    pub fn feed_entries(&mut self, entries: &[Entry]) -> Result<String> {
        let mut out = String::new();
        self.feed_into(entries, &mut out)?;
        Ok(out)
    }

    /// Process a slice of entries as one chunk, appending its text to `out`.
    ///
    /// On error `out` is restored to its length on entry.
    pub fn feed_into(&mut self, entries: &[Entry], out: &mut String) -> Result<()> {
        let start = out.len();
        let mut cursor = Cursor {
            state: self.state,
            depth: self.depth,
            element_ns: self.element_ns,
        };
        let mut fresh: Option<PrefixTable> = None;

        for entry in entries {
            if let Err(err) = self.step(&mut cursor, &mut fresh, entry, out) {
                out.truncate(start);
                debug!("chunk rejected: {}", err);
                return Err(err);
            }
        }

        self.state = cursor.state;
        self.depth = cursor.depth;
        self.element_ns = cursor.element_ns;
        if fresh.is_some() {
            self.prefixes = fresh;
        }

        trace!("chunk: {} entries -> {} bytes", entries.len(), out.len() - start);
        Ok(())
    }

    /// End the stream: checks balance and returns the trailing newline.
    pub fn finish(self) -> Result<String> {
        if self.state == State::Comment {
            return Err(WriteError::MissingCommentBody { found: "end of stream" });
        }
        if self.depth != 0 {
            return Err(WriteError::UnclosedElements { depth: self.depth });
        }
        Ok(String::from("\n"))
    }

    fn step(
        &mut self,
        cursor: &mut Cursor,
        fresh: &mut Option<PrefixTable>,
        entry: &Entry,
        out: &mut String,
    ) -> Result<()> {
        if cursor.state == State::Comment && !entry.is_value() {
            return Err(WriteError::MissingCommentBody { found: entry.kind_name() });
        }

        let table = fresh.as_ref().or(self.prefixes.as_ref());

        match entry {
            Entry::Open(Member { ns, name }) => {
                let depth = cursor.depth + 1;
                if let Some(limit) = self.config.max_depth {
                    if depth > limit {
                        return Err(WriteError::DepthLimitExceeded { limit });
                    }
                }

                let prefix = qualifier(table, *ns)?;
                out.push_str(self.indent.at(cursor.depth));
                out.push('<');
                out.push_str(prefix);
                out.push_str(name);
                if cursor.depth == 0 {
                    if let Some(table) = table {
                        out.push_str(table.declarations());
                    }
                }

                cursor.element_ns = Some(*ns);
                cursor.depth = depth;
                cursor.state = State::Element;
            }

            Entry::Emitted => {
                if cursor.state != State::Element {
                    return Err(WriteError::EmittedOutsideStartTag);
                }
                out.push('>');
                cursor.state = State::Text;
            }

            Entry::Close(Member { ns, name }) => {
                if cursor.depth == 0 {
                    return Err(WriteError::UnbalancedClose { name: name.clone() });
                }
                let prefix = qualifier(table, *ns)?;
                cursor.depth -= 1;

                match cursor.state {
                    State::Element => out.push_str("/>"),
                    state => {
                        if state != State::AfterText {
                            out.push_str(self.indent.at(cursor.depth));
                        }
                        out.push_str("</");
                        out.push_str(prefix);
                        out.push_str(name);
                        out.push('>');
                    }
                }
                cursor.state = State::Text;
            }

            Entry::Attribute(Member { ns, name }) => {
                if cursor.state != State::Element {
                    return Err(WriteError::AttributeOutsideStartTag { name: name.clone() });
                }
                // Attributes in the element's own namespace go unprefixed.
                let prefix = if cursor.element_ns == Some(*ns) {
                    ""
                } else {
                    qualifier(table, *ns)?
                };
                out.push(' ');
                out.push_str(prefix);
                out.push_str(name);
                out.push('=');
            }

            Entry::Comment => {
                if cursor.state == State::Element {
                    return Err(WriteError::CommentInStartTag);
                }
                cursor.state = State::Comment;
            }

            Entry::Namespaces(list) => {
                if table.is_some() {
                    debug!("ignoring repeated namespace list ({} entries)", list.len());
                } else {
                    let allocated = allocate(list);
                    debug!("allocated {} namespace prefixes", allocated.len());
                    *fresh = Some(allocated);
                }
            }

            Entry::Value(value) => match cursor.state {
                State::Element => {
                    out.push('"');
                    match value.as_str() {
                        Some(s) if self.config.escape => push_escaped_attr(out, s),
                        _ => value.write_to(out),
                    }
                    out.push('"');
                }
                State::Text | State::AfterText => {
                    match value.as_str() {
                        Some(s) if self.config.escape => push_escaped_text(out, s),
                        _ => value.write_to(out),
                    }
                    cursor.state = State::AfterText;
                }
                State::Comment => {
                    out.push_str(self.indent.at(cursor.depth));
                    out.push_str("<!--");
                    value.write_to(out);
                    out.push_str("-->");
                    cursor.state = State::Text;
                }
            },
        }

        Ok(())
    }
}
