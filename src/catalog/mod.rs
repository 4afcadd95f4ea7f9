//! In-memory library catalog: the book record and the store that owns
//! the ordered collection.

pub mod book;
pub mod store;

pub use book::{Book, BookId};
pub use store::CatalogStore;
