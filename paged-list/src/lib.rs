//! A lazily loaded, page-cached view over a remote or otherwise expensive
//! ordered data set. Elements are addressed by flat index; data is fetched
//! in fixed-size pages from a [`provider::PagedDataProvider`] on first
//! access and cached for the lifetime of the [`list::PagedList`].

pub mod error;
pub mod integrity;
pub mod list;
pub mod provider;

pub use error::PagedListError;
pub use integrity::DataIntegrityMode;
pub use list::PagedList;
pub use provider::{PageNumber, PagedDataProvider};
