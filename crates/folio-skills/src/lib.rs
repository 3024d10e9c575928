//! Concrete search collaborators behind [`folio_core::SearchBackend`].

pub use folio_core::{SearchBackend, SearchError, SearchHit};

mod algolia;

pub use algolia::AlgoliaSearch;
