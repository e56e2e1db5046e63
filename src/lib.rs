//! addressbook - An in-memory contact directory with validated records and
//! binary persistence.
//!
//! This library stores named contact records (name, optional birthday, a
//! deduplicated list of phone numbers), supports validated mutation,
//! paginated listing, and bulk save/load of the whole collection to a
//! binary file. Interactive concerns (prompting, command parsing, printing)
//! belong to the embedding application.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (names, birthdays, phone numbers)
//! - **models**: the contact [`Record`]
//! - **directory**: the keyed [`AddressBook`] collection, paging, persistence
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables
//! - **logging**: tracing subscriber setup for embedding applications
//!
//! # Example
//!
//! ```
//! use addressbook::{AddressBook, Record};
//!
//! let mut record = Record::new("Ada", Some("1990.01.15")).unwrap();
//! record.add_phone("5551234567").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(record);
//!
//! for page in book.pages(10) {
//!     print!("{}", page);
//! }
//! ```

// Re-export commonly used types
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod logging;
pub mod models;

pub use config::Config;
pub use directory::{AddressBook, Pages};
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{ConfigError, RecordError, StorageError};
pub use models::Record;
