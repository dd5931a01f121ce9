use thiserror::Error;

/// Errors returned by fallible [`List`] operations.
///
/// [`List`]: crate::generic::list::List
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("list is empty")]
    Empty,
    #[error("index {index} out of range for list of length {len}")]
    Index { index: usize, len: usize },
    #[error("element not found")]
    NotFound,
    /// Only produced when the list is configured with [`ChunkPolicy::Strict`].
    ///
    /// [`ChunkPolicy::Strict`]: crate::config::ChunkPolicy::Strict
    #[error("chunk size must be greater than zero")]
    InvalidChunkSize,
}

pub type Result<T, E = ListError> = core::result::Result<T, E>;
