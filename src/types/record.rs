//! Scan report contracts.
//!
//! A `ScanRecord` is the sole artifact a scan hands outward. It is immutable
//! once built and round-trips through JSON losslessly, so history viewers and
//! exporters can reproduce verdicts and evidence without re-scanning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::verdict::SideVerdict;

/// Mod loader ecosystems we can recognize from a descriptor.
///
/// Closed set: adding a loader means adding a variant here plus its probe in
/// the loader service, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoaderFamily {
    Fabric,
    Quilt,
    Forge,
    #[serde(rename = "neoforge")]
    NeoForge,
    LegacyForge,
    Rift,
    Unknown,
}

/// Filesystem identity of one scanned archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModIdentity {
    pub path: String,
    pub file_name: String,
    pub size_bytes: u64,
    pub modified: Option<DateTime<Utc>>,
}

/// One classified archive: identity, descriptor fields, and the verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModReport {
    pub identity: ModIdentity,
    pub loader: LoaderFamily,
    pub mod_id: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub verdict: SideVerdict,
    /// True when the container itself could not be analyzed (counted in
    /// [`ScanRecord::error_count`]).
    pub failed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    Completed,
    Cancelled,
}

/// Result of one directory scan. Created once per orchestrator run; no
/// process-wide scan state exists outside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRecord {
    pub scanned_at: DateTime<Utc>,
    pub root_path: String,
    pub status: ScanStatus,
    pub reports: Vec<ModReport>,
    /// Per-file failures encountered without aborting the walk.
    pub error_count: usize,
}

#[cfg(test)]
#[path = "tests/record_tests.rs"]
mod tests;
