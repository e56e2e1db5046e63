//! The keyed contact collection.
//!
//! [`AddressBook`] maps name values to [`Record`](crate::Record)s while
//! preserving insertion order, and folds in paged listing and file
//! persistence.

pub mod address_book;
pub mod persistence;

pub use address_book::{AddressBook, Pages};
