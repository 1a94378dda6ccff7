use anyhow::Result;

/// Zero-based page number within the logical data set.
pub type PageNumber = usize;

/// Source of paged data for a [`PagedList`](crate::PagedList). Implementations
/// typically wrap a database query, an HTTP endpoint or some other store where
/// fetching the whole data set up front would be wasteful.
///
/// The query value given to the list at construction is passed back unchanged
/// on every call, so that every page is cut from the same logical result set.
/// Implementations that page differently for different query values rely on
/// the caller keeping that value stable for the list's lifetime.
pub trait PagedDataProvider {
    /// Element type of the data set.
    type Item;

    /// Caller-chosen query parameter type. Use `Option<_>` or `()` when there
    /// are no parameters.
    type Query;

    /// Fixed number of elements per page. Must be positive. Read once, when
    /// the list is constructed; never re-queried afterwards.
    fn page_size(&self) -> usize;

    /// Current total number of elements in the full (unpaged) data set.
    /// Called at construction, then as often as the list's
    /// [`DataIntegrityMode`](crate::DataIntegrityMode) dictates.
    fn data_size(&mut self, query: &Self::Query) -> Result<usize>;

    /// Return the elements of page `page`, in order. The last page of the
    /// data set may be shorter than the page size; every other page must be
    /// full. Only called on a cache miss.
    fn provide(&mut self, page: PageNumber, query: &Self::Query) -> Result<Vec<Self::Item>>;
}
