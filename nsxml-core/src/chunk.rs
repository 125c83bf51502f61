//! Count-prefixed entry buffers.
//!
//! A tokenizer typically refills the same buffer for every chunk it hands
//! out. The buffer keeps its storage between fills; only the first `count`
//! entries are valid, anything past that is left over from a previous fill
//! and is never read.
//!
//! ```text
//! entries: [ Open | Attribute | Value | Close | (stale) | (stale) ]
//!                                              ^
//!                                            count
//! ```

use crate::token::Entry;

/// One batch of ordered entries.
#[derive(Debug, Clone, Default)]
pub struct Chunk {
    /// Backing storage (may hold stale entries past `count`)
    entries: Vec<Entry>,
    /// Number of valid entries at the front of `entries`
    count: usize,
}

impl Chunk {
    /// Create a new empty chunk.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty chunk with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            count: 0,
        }
    }

    /// Wrap existing storage, treating the first `count` entries as valid.
    /// `count` is clamped to the storage length.
    pub fn with_count(entries: Vec<Entry>, count: usize) -> Self {
        let count = count.min(entries.len());
        Self { entries, count }
    }

    /// Append an entry, overwriting a stale slot when one is available.
    pub fn push(&mut self, entry: Entry) {
        if self.count < self.entries.len() {
            self.entries[self.count] = entry;
        } else {
            self.entries.push(entry);
        }
        self.count += 1;
    }

    /// The valid entries.
    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries[..self.count]
    }

    /// Number of valid entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if the chunk has no valid entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Reset for refilling. Keeps allocated storage.
    pub fn clear(&mut self) {
        self.count = 0;
    }

    /// Drop stale entries and release unused storage.
    pub fn shrink_to_fit(&mut self) {
        self.entries.truncate(self.count);
        self.entries.shrink_to_fit();
    }
}

impl From<Vec<Entry>> for Chunk {
    fn from(entries: Vec<Entry>) -> Self {
        let count = entries.len();
        Self { entries, count }
    }
}

impl FromIterator<Entry> for Chunk {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Chunk::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Extend<Entry> for Chunk {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        for entry in iter {
            self.push(entry);
        }
    }
}
