use core::fmt;

/// Policy deciding when a [`PagedList`](crate::PagedList) re-validates its
/// cached data set size against the provider.
///
/// Checking costs a `data_size` round trip (often a `COUNT` query), so how
/// eagerly to pay it is left to the caller. A detected size change always
/// invalidates the whole page cache, never individual pages.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum DataIntegrityMode {
    /// Never re-check. Cached pages and the cached size are trusted for the
    /// lifetime of the list, even if the underlying data set changes.
    Off,
    /// Re-check only when an uncached page is about to be fetched. Catches
    /// drift before it can corrupt a freshly fetched page, at no extra cost
    /// for cache hits.
    #[default]
    OnFetchPage,
    /// Re-check on every element access. Maximum correctness, one extra
    /// provider round trip per `get`.
    OnGet,
}

impl DataIntegrityMode {
    /// Human-readable name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::OnFetchPage => "on-fetch-page",
            Self::OnGet => "on-get",
        }
    }
}

impl fmt::Display for DataIntegrityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
