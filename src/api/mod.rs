//! Library surface for loading, querying, and mutating the bookmark store.

mod error;
mod store;

pub use error::{OpenError, StoreError};
pub use store::BookmarkStore;

pub use crate::core::storage::Bookmark;
