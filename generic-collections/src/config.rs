//! Behaviour switches for [`List`].
//!
//! The defaults reproduce the historical behaviour of the list: a zero chunk
//! size yields no chunks, and `insert` only accepts indices of existing
//! elements. Both can be tightened or relaxed per list.
//!
//! [`List`]: crate::generic::list::List

use serde::{Deserialize, Serialize};

/// How [`List::chunk`] treats a chunk size of zero.
///
/// [`List::chunk`]: crate::generic::list::List::chunk
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkPolicy {
    /// A zero size returns an empty result without an error.
    #[default]
    Lenient,
    /// A zero size fails with [`ListError::InvalidChunkSize`].
    ///
    /// [`ListError::InvalidChunkSize`]: crate::error::ListError::InvalidChunkSize
    Strict,
}

/// Which positions [`List::insert`] accepts.
///
/// [`List::insert`]: crate::generic::list::List::insert
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertPolicy {
    /// Only `[0, len)`; appending goes through `add`.
    #[default]
    ExistingIndex,
    /// `[0, len]`, so `insert(len, e)` appends.
    AllowAppend,
}

/// Options carried by every [`List`].
///
/// Lists derived from another list (`filter`, `map`, `chunk`) inherit its
/// options.
///
/// # Examples
///
/// ```rust
/// use generic_collections::config::{ChunkPolicy, InsertPolicy, ListOptions};
///
/// let options = ListOptions::default()
///     .with_chunk_policy(ChunkPolicy::Strict)
///     .with_insert_policy(InsertPolicy::AllowAppend);
///
/// assert_eq!(options.chunk, ChunkPolicy::Strict);
/// assert_eq!(options.insert, InsertPolicy::AllowAppend);
/// ```
///
/// [`List`]: crate::generic::list::List
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ListOptions {
    pub chunk: ChunkPolicy,
    pub insert: InsertPolicy,
}

impl ListOptions {
    pub fn with_chunk_policy(mut self, chunk: ChunkPolicy) -> Self {
        self.chunk = chunk;
        self
    }

    pub fn with_insert_policy(mut self, insert: InsertPolicy) -> Self {
        self.insert = insert;
        self
    }
}
