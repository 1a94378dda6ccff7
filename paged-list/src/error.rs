use thiserror::Error;

use crate::provider::PageNumber;

/// Errors surfaced by [`PagedList`](crate::PagedList). Provider failures are
/// passed through untouched; nothing is retried and a failed fetch commits
/// nothing to the page cache.
#[derive(Debug, Error)]
pub enum PagedListError {
    /// The provider reported a page size of zero at construction.
    #[error("provider reported page size 0")]
    InvalidPageSize,

    /// Index outside the last known data set size.
    #[error("index {index} out of bounds (data size {size})")]
    OutOfBounds { index: usize, size: usize },

    /// The provider returned a page too short for the requested offset.
    /// Either the size assumption went stale mid-fetch or the provider cut
    /// its pages wrong.
    #[error("page {page} holds {len} items, offset {offset} requested")]
    ShortPage {
        page: PageNumber,
        len: usize,
        offset: usize,
    },

    /// A `data_size` or `provide` call failed.
    #[error(transparent)]
    Provider(#[from] anyhow::Error),
}
