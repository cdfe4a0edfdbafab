//! Reading and writing the config file on disk.
//!
//! Saves are whole-file and atomic: text is written to a temp path in the
//! same directory, then renamed over the target. A failed save leaves the
//! on-disk file exactly as it was. The pristine file is backed up to `.bak`
//! once per session before the first save.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::document::Document;

/// A file operation that failed, carrying the path and the OS reason.
///
/// Surfaced to the user verbatim; never corrupts previously-persisted state.
#[derive(Debug)]
pub struct IoFailure {
    /// Path the operation targeted.
    pub path: PathBuf,
    /// Underlying OS error.
    pub source: std::io::Error,
}

impl fmt::Display for IoFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for IoFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Handle to the config file for one editing session.
///
/// Owns the path and the once-per-session backup latch.
#[derive(Debug)]
pub struct ConfigFile {
    /// Absolute path of the config file being edited.
    pub path: PathBuf,
    backed_up: bool,
}

impl ConfigFile {
    /// Create a handle; the file does not need to exist yet.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            backed_up: false,
        }
    }

    /// What: Read and parse the config file in full.
    ///
    /// Inputs:
    /// - `capture_trailing`: Trailing-comment predicate forwarded to
    ///   [`Document::parse_with`].
    ///
    /// Output:
    /// - The parsed [`Document`]; a missing file yields an empty document.
    ///
    /// Details:
    /// - Any other read error is an [`IoFailure`] for the caller to surface.
    pub fn load(&self, capture_trailing: impl Fn(&str) -> bool) -> Result<Document, IoFailure> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Document::parse_with(&text, capture_trailing)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Document::default()),
            Err(e) => Err(IoFailure {
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    /// What: Persist the document atomically, backing up the pristine file first.
    ///
    /// Inputs:
    /// - `doc`: Document to serialize and write.
    ///
    /// Output:
    /// - `Ok(())` once the rename lands; `Err(IoFailure)` with the file on
    ///   disk untouched otherwise.
    ///
    /// Details:
    /// - The `.bak` copy is made only once per session and only if the file
    ///   already existed; a backup failure is logged but does not block the
    ///   save (the atomic write still protects against corruption).
    pub fn save(&mut self, doc: &Document) -> Result<(), IoFailure> {
        if !self.backed_up && self.path.exists() {
            let bak = self.path.with_extension("bak");
            match fs::copy(&self.path, &bak) {
                Ok(_) => {
                    self.backed_up = true;
                    tracing::info!(path = %bak.display(), "backed up config");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "config backup failed; continuing");
                }
            }
        }
        write_atomic(&self.path, &doc.serialize())
    }
}

/// Write `text` to `path` via a temp file in the same directory plus rename,
/// creating parent directories as needed.
pub fn write_atomic(path: &Path, text: &str) -> Result<(), IoFailure> {
    let fail = |source: std::io::Error| IoFailure {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(fail)?;
    }
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, text).map_err(fail)?;
    fs::rename(&tmp, path).map_err(fail)
}
