use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    error::PagedListError,
    integrity::DataIntegrityMode,
    provider::{PageNumber, PagedDataProvider},
};

/// A read-only, indexable view over a paged data set, fetching pages from a
/// [`PagedDataProvider`] on first access and caching them in memory.
///
/// The list snapshots the provider's page size and data size once at
/// construction. Depending on the configured [`DataIntegrityMode`], the data
/// size is re-validated later; a detected change discards the entire page
/// cache and adopts the new size. [`size`](Self::size) reads the cached value
/// only and can therefore lag behind the real data set in between checks — a
/// documented trade-off, not a bug.
///
/// Cached pages are retained until invalidation or drop; there is no eviction
/// and no memory bound. Access is single-threaded: `get` takes `&mut self`,
/// so concurrent use requires an external lock around the whole list.
pub struct PagedList<P: PagedDataProvider> {
    provider: P,

    /// Query value handed to every provider call, unchanged, so that all
    /// pages come from the same logical result set.
    query: P::Query,

    /// Pages fetched so far. Cleared wholesale when a size change is
    /// detected; individual pages are never invalidated on their own.
    pages: HashMap<PageNumber, Vec<P::Item>>,

    page_size: usize,
    data_size: usize,
    mode: DataIntegrityMode,
}

impl<P: PagedDataProvider> PagedList<P> {
    /// Construct with the default integrity mode
    /// ([`OnFetchPage`](DataIntegrityMode::OnFetchPage)).
    ///
    /// Queries the provider's page size and data size once each; no pages
    /// are fetched yet.
    pub fn new(provider: P, query: P::Query) -> Result<Self, PagedListError> {
        Self::with_mode(provider, query, DataIntegrityMode::default())
    }

    /// Construct with an explicit integrity mode.
    pub fn with_mode(
        mut provider: P,
        query: P::Query,
        mode: DataIntegrityMode,
    ) -> Result<Self, PagedListError> {
        let page_size = provider.page_size();
        if page_size == 0 {
            return Err(PagedListError::InvalidPageSize);
        }
        let data_size = provider.data_size(&query)?;
        trace!(page_size, data_size, mode = %mode, "paged list constructed");
        Ok(Self {
            provider,
            query,
            pages: HashMap::new(),
            page_size,
            data_size,
            mode,
        })
    }

    /// Element at `index`, fetching its page from the provider if it is not
    /// cached yet.
    ///
    /// Runs at most one integrity check per call, as dictated by the
    /// configured mode. Indices at or beyond the last known data size return
    /// [`PagedListError::OutOfBounds`] without touching the provider's page
    /// fetch; under [`DataIntegrityMode::Off`] that bound may be stale by
    /// design.
    pub fn get(&mut self, index: usize) -> Result<&P::Item, PagedListError> {
        let page_nr = index / self.page_size;

        match self.mode {
            DataIntegrityMode::OnGet => self.verify_integrity()?,
            DataIntegrityMode::OnFetchPage if !self.pages.contains_key(&page_nr) => {
                self.verify_integrity()?;
            }
            _ => {}
        }

        // Bounds are checked against the freshest size the mode allows.
        if index >= self.data_size {
            return Err(PagedListError::OutOfBounds {
                index,
                size: self.data_size,
            });
        }

        if !self.pages.contains_key(&page_nr) {
            let items = self.provider.provide(page_nr, &self.query)?;
            trace!(page = page_nr, items = items.len(), "page fetched");
            self.pages.insert(page_nr, items);
        }

        let offset = index % self.page_size;
        let page = &self.pages[&page_nr];
        page.get(offset).ok_or(PagedListError::ShortPage {
            page: page_nr,
            len: page.len(),
            offset,
        })
    }

    /// Data set size as last observed from the provider. Never triggers a
    /// provider call, so it can be stale in between integrity checks.
    pub fn size(&self) -> usize {
        self.data_size
    }

    pub fn is_empty(&self) -> bool {
        self.data_size == 0
    }

    /// Page size snapshotted at construction.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn integrity_mode(&self) -> DataIntegrityMode {
        self.mode
    }

    /// Number of pages currently held in the cache.
    pub fn cached_page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn query(&self) -> &P::Query {
        &self.query
    }

    /// Ask the provider for the current data size; on drift, drop every
    /// cached page and adopt the new size.
    fn verify_integrity(&mut self) -> Result<(), PagedListError> {
        let actual = self.provider.data_size(&self.query)?;
        if actual != self.data_size {
            debug!(
                cached = self.data_size,
                actual,
                pages_dropped = self.pages.len(),
                "data set size drift, clearing page cache"
            );
            self.pages.clear();
            self.data_size = actual;
        }
        Ok(())
    }
}
