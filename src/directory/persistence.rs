//! Binary file persistence for [`AddressBook`].
//!
//! The on-disk payload is the insertion-ordered list of records encoded
//! with `bincode`; keys are rebuilt from record names on load, so a
//! save/load round trip reproduces keys, field values, and entry order.

use super::AddressBook;
use crate::error::StorageResult;
use crate::models::Record;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

impl AddressBook {
    /// Serialize the entire book to `path`, overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` when the file cannot be created or
    /// written, and `StorageError::Serialization` when encoding fails.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        let records: Vec<&Record> = self.iter().map(|(_, record)| record).collect();
        bincode::serialize_into(&mut writer, &records)?;
        writer.flush()?;

        tracing::debug!(path = %path.display(), count = records.len(), "saved address book");
        Ok(())
    }

    /// Replace the book's contents with the collection stored at `path`.
    ///
    /// Load failures are non-fatal: a missing file, an unreadable file, and
    /// a corrupt payload each emit a warning and leave the current contents
    /// untouched.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();

        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "address book file not found");
                return;
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to open address book file"
                );
                return;
            }
        };

        match bincode::deserialize_from::<_, Vec<Record>>(BufReader::new(file)) {
            Ok(records) => {
                let count = records.len();
                self.replace_all(records);
                tracing::debug!(path = %path.display(), count, "loaded address book");
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to decode address book file"
                );
            }
        }
    }
}
