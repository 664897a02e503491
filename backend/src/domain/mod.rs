//! Transport-agnostic domain types and ports.

pub mod category;
pub mod collection;
pub mod error;
pub mod ports;

pub use category::{Category, CategoryIn};
pub use collection::{CategoryRef, Collection, CollectionIn};
pub use error::{Error, ErrorCode, Errors};
pub use ports::{CategoryPersister, CollectionPersister, PersistenceError};
