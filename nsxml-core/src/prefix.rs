//! Namespace prefix allocation.
//!
//! Runs once per stream, when the first namespace list is seen. Produces a
//! collision-free prefix for every namespace id plus the `xmlns:` attribute
//! string written on the root element.
//!
//! Allocation is deterministic:
//!
//! 1. Ids with a prefix hint, in ascending order, claim the hint. A taken hint
//!    gets a numeric suffix starting at 2 (`a`, `a2`, `a3`, ...).
//! 2. Ids without a hint, in ascending order, claim `p1`, `p2`, ... from one
//!    counter shared by all of them. Taken candidates are skipped and the
//!    counter never resets.
//! 3. Every id with a URI contributes ` xmlns:prefix="uri"`, in id order.
//! 4. Every prefix gets a trailing `:` so it can be joined to a local name
//!    directly.

use std::collections::HashMap;

use phf::phf_set;
use unicode_xid::UnicodeXID;

use crate::namespace::{Namespace, NamespaceId};

/// Prefixes bound by the XML namespaces recommendation itself.
static RESERVED_PREFIXES: phf::Set<&'static str> = phf_set! {
    "xml",
    "xmlns",
};

/// Prefix for generated names.
const GENERATED_STEM: &str = "p";

/// Immutable result of [`allocate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixTable {
    /// Prefix per id, with trailing `:`
    prefixes: Vec<String>,
    /// URI per id (`None` for empty slots and the "no namespace" marker)
    uris: Vec<Option<String>>,
    /// Concatenated ` xmlns:prefix="uri"` attributes
    declarations: String,
}

impl PrefixTable {
    /// Prefix for `id` including the trailing `:`.
    #[inline]
    pub fn prefix(&self, id: NamespaceId) -> Option<&str> {
        self.prefixes.get(id.index()).map(String::as_str)
    }

    /// Prefix for `id` without the trailing `:`.
    pub fn bare_prefix(&self, id: NamespaceId) -> Option<&str> {
        self.prefix(id).map(|p| &p[..p.len() - 1])
    }

    /// URI declared for `id`, if any.
    pub fn uri(&self, id: NamespaceId) -> Option<&str> {
        self.uris.get(id.index()).and_then(|u| u.as_deref())
    }

    /// Prefix to put in front of a local name for `id`.
    ///
    /// Namespaces without a URI are never declared, so names in them are
    /// written unprefixed. `None` means the id is not covered by this table.
    #[inline]
    pub fn qualifier(&self, id: NamespaceId) -> Option<&str> {
        let idx = id.index();
        let prefix = self.prefixes.get(idx)?;
        match self.uris.get(idx) {
            Some(Some(_)) => Some(prefix),
            _ => Some(""),
        }
    }

    /// All `xmlns:` declarations, each with a leading space.
    #[inline]
    pub fn declarations(&self) -> &str {
        &self.declarations
    }

    /// Number of ids covered.
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

/// Check whether `s` can be used as a namespace prefix (an NCName).
fn is_ncname(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_xid_start() => {}
        _ => return false,
    }
    chars.all(|c| c == '-' || c == '.' || c.is_xid_continue())
}

/// Check whether a prefix is reserved or already claimed.
#[inline]
fn is_taken(claimed: &HashMap<String, usize>, prefix: &str) -> bool {
    RESERVED_PREFIXES.contains(prefix) || claimed.contains_key(prefix)
}

/// Usable prefix hint for a slot, if any.
fn usable_hint(slot: &Option<Namespace>) -> Option<&str> {
    slot.as_ref().and_then(Namespace::hint).filter(|h| is_ncname(h))
}

/// Allocate prefixes for a namespace list indexed by id.
///
/// Never fails: candidate names are unbounded, so probing always ends.
pub fn allocate(namespaces: &[Option<Namespace>]) -> PrefixTable {
    let mut claimed: HashMap<String, usize> = HashMap::with_capacity(namespaces.len());
    let mut assigned: Vec<Option<String>> = vec![None; namespaces.len()];

    // Named pass
    for (idx, slot) in namespaces.iter().enumerate() {
        let Some(hint) = usable_hint(slot) else { continue };

        let mut prefix = hint.to_string();
        let mut suffix = 1u64;
        while is_taken(&claimed, &prefix) {
            suffix += 1;
            prefix = format!("{}{}", hint, suffix);
        }

        claimed.insert(prefix.clone(), idx);
        assigned[idx] = Some(prefix);
    }

    // Unnamed pass
    let mut counter = 0u64;
    for (idx, slot) in namespaces.iter().enumerate() {
        if usable_hint(slot).is_some() {
            continue;
        }

        let prefix = loop {
            counter += 1;
            let candidate = format!("{}{}", GENERATED_STEM, counter);
            if !is_taken(&claimed, &candidate) {
                break candidate;
            }
        };

        claimed.insert(prefix.clone(), idx);
        assigned[idx] = Some(prefix);
    }

    let uris: Vec<Option<String>> = namespaces
        .iter()
        .map(|slot| slot.as_ref().and_then(|ns| ns.uri.clone()))
        .collect();

    let mut declarations = String::new();
    let mut prefixes = Vec::with_capacity(assigned.len());
    for (prefix, uri) in assigned.into_iter().zip(&uris) {
        // Both passes together cover every slot.
        let mut prefix = prefix.unwrap_or_default();
        if let Some(uri) = uri {
            declarations.push_str(" xmlns:");
            declarations.push_str(&prefix);
            declarations.push_str("=\"");
            declarations.push_str(uri);
            declarations.push('"');
        }
        prefix.push(':');
        prefixes.push(prefix);
    }

    PrefixTable {
        prefixes,
        uris,
        declarations,
    }
}
