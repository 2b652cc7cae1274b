//! Directory scan orchestrator.
//!
//! Enumerates archives under a root, fans the per-archive pipeline out over
//! the rayon worker pool, and aggregates an immutable [`ScanRecord`]. A
//! single archive's failure never aborts the walk.

mod analyze;
pub mod walker;

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use rayon::prelude::*;

use crate::types::errors::ScanResult;
use crate::types::record::{ModReport, ScanRecord, ScanStatus};

pub const DEFAULT_MAX_ENTRY_SIZE: u64 = 4 * 1024 * 1024;

/// Knobs exposed to callers of [`scan_directory`].
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    /// Follow symlinks while walking the root. Off by default.
    pub follow_symlinks: bool,
    /// Per-entry read cap in bytes, bounding memory against adversarially
    /// large embedded entries.
    pub max_entry_size: u64,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            max_entry_size: DEFAULT_MAX_ENTRY_SIZE,
        }
    }
}

/// Scan a mods directory and classify every archive in it.
///
/// Fails only when the root itself is unusable; per-archive failures degrade
/// to `unknown` verdicts inside the record.
pub fn scan_directory(root: &Path, options: &ScanOptions) -> ScanResult<ScanRecord> {
    scan_directory_with_cancel(root, options, Arc::new(AtomicBool::new(false)))
}

/// [`scan_directory`] with a cooperative stop flag.
///
/// The flag is checked once per archive before its analysis starts; archives
/// already in flight finish normally and a cancelled run returns whatever
/// completed, marked [`ScanStatus::Cancelled`].
pub fn scan_directory_with_cancel(
    root: &Path,
    options: &ScanOptions,
    cancel_flag: Arc<AtomicBool>,
) -> ScanResult<ScanRecord> {
    let paths = walker::collect_archive_paths(root, options.follow_symlinks)?;
    log::info!(
        "scanning {} archive(s) under '{}'",
        paths.len(),
        root.display()
    );

    // Embarrassingly parallel: each worker owns its archive handle for the
    // duration of one analysis; rayon's indexed collect serializes results
    // back in input (path-sorted) order.
    let reports: Vec<ModReport> = paths
        .par_iter()
        .filter_map(|path| {
            if cancel_flag.load(Ordering::SeqCst) {
                return None;
            }
            Some(analyze::analyze_archive(path, options))
        })
        .collect();

    let status = if cancel_flag.load(Ordering::SeqCst) {
        ScanStatus::Cancelled
    } else {
        ScanStatus::Completed
    };
    let error_count = reports.iter().filter(|report| report.failed).count();

    Ok(ScanRecord {
        scanned_at: Utc::now(),
        root_path: root.display().to_string(),
        status,
        reports,
        error_count,
    })
}

#[cfg(test)]
#[path = "tests/scan_tests.rs"]
mod tests;
