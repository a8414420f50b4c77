//! File-backed storage for category records
//!
//! Each category is backed by one plain-text file inside a flat data
//! directory. Records carry no internal schema and no cross-file
//! relationship.
//!
//! Both public operations are total over their inputs: they always return
//! a descriptive string and never fail the surrounding call. The calling
//! agent consumes these strings as protocol results, so absence and I/O
//! failure are reported through sentinel text rather than an error
//! channel. All error handling lives here, keeping the dispatch layer
//! free of it.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::warn;

/// Store for the plain-text files backing each category.
///
/// Constructed with an explicit data directory so tests can inject a
/// temporary root. The directory is created lazily on the first write;
/// reads against a missing directory report the per-unit sentinel.
#[derive(Debug, Clone)]
pub struct ContextStore {
    data_dir: PathBuf,
}

impl ContextStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The directory holding the storage units.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Read the full content of a storage unit, trimmed of leading and
    /// trailing whitespace.
    ///
    /// A missing unit yields the sentinel `"<unit> not found"`; any other
    /// I/O failure yields `"Error reading <unit>: <cause>"`. Callers
    /// distinguish absence only by this text, never by an error value.
    pub fn read(&self, unit: &str) -> String {
        match self.read_inner(unit) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => format!("{unit} not found"),
            Err(e) => {
                warn!(unit, error = %e, "read failed");
                format!("Error reading {unit}: {e}")
            }
        }
    }

    /// Replace the entire content of a storage unit with `content`,
    /// verbatim.
    ///
    /// Creates the data directory if absent. Returns
    /// `"Successfully updated <unit>"` on success or
    /// `"Error writing <unit>: <cause>"` on failure.
    pub fn write(&self, unit: &str, content: &str) -> String {
        match self.write_inner(unit, content) {
            Ok(()) => format!("Successfully updated {unit}"),
            Err(e) => {
                warn!(unit, error = %e, "write failed");
                format!("Error writing {unit}: {e}")
            }
        }
    }

    fn read_inner(&self, unit: &str) -> io::Result<String> {
        let text = fs::read_to_string(self.data_dir.join(unit))?;
        Ok(text.trim().to_string())
    }

    /// Write via temp-then-rename so a single write call is whole-value
    /// atomic: a concurrent reader sees either the old or the new
    /// content, never interleaved bytes.
    fn write_inner(&self, unit: &str, content: &str) -> io::Result<()> {
        fs::create_dir_all(&self.data_dir)?;

        // Temp file in the same directory, so the rename stays on one
        // filesystem.
        let temp_name = format!(".{}.{}.tmp", unit, std::process::id());
        let temp_path = self.data_dir.join(temp_name);

        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;

        temp_file.lock_exclusive()?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.sync_all()?;
        fs2::FileExt::unlock(&temp_file)?;

        fs::rename(&temp_path, self.data_dir.join(unit))?;
        Ok(())
    }
}
