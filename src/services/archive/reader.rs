use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::types::errors::{ScanError, ScanResult};

/// An opened mod container. Owned exclusively by one analysis pass.
///
/// Directory-traversal entry names and zero-byte entries are harmless here:
/// entries are only ever read into memory by name, never written anywhere.
#[derive(Debug)]
pub struct ModArchive {
    path: PathBuf,
    zip: ZipArchive<File>,
}

impl ModArchive {
    /// Open a container for introspection.
    ///
    /// A truncated or corrupt central directory surfaces as
    /// [`ScanError::CorruptArchive`]; the orchestrator turns that into an
    /// `unknown` verdict and moves on.
    pub fn open(path: &Path) -> ScanResult<Self> {
        let file = File::open(path)?;
        let zip = ZipArchive::new(file).map_err(|e| ScanError::CorruptArchive(e.to_string()))?;
        Ok(Self {
            path: path.to_path_buf(),
            zip,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entry names, lazily iterated. Restartable; order is whatever the
    /// container's central directory yields.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.zip.file_names()
    }

    pub fn has_entry(&self, name: &str) -> bool {
        self.zip.file_names().any(|n| n == name)
    }

    /// Read one entry, capped at `limit` bytes.
    ///
    /// The cap bounds memory against adversarially large embedded entries;
    /// callers that only probe headers and descriptors never need more.
    pub fn read_entry(&mut self, name: &str, limit: u64) -> ScanResult<Vec<u8>> {
        let entry = self.zip.by_name(name).map_err(|e| ScanError::EntryRead {
            entry: name.to_string(),
            reason: e.to_string(),
        })?;

        let mut buf = Vec::new();
        entry
            .take(limit)
            .read_to_end(&mut buf)
            .map_err(|e| ScanError::EntryRead {
                entry: name.to_string(),
                reason: e.to_string(),
            })?;
        Ok(buf)
    }

    /// Read one entry as text, replacing invalid UTF-8 instead of failing.
    pub fn read_entry_string(&mut self, name: &str, limit: u64) -> ScanResult<String> {
        let bytes = self.read_entry(name, limit)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
