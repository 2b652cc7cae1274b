//! Side classifier for Minecraft mod archives.
//!
//! Walks a mods directory, inspects each `.jar`/`.zip`/`.litemod` container
//! without extracting it, and decides whether the mod can run on a dedicated
//! server, needs a graphical client, works on both sides, or cannot be told
//! apart (`unknown`/`risky`). Every verdict carries the evidence that produced
//! it so downstream tooling can show *why* a mod was flagged.

pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

pub use services::scanner::{scan_directory, scan_directory_with_cancel, ScanOptions};
pub use types::errors::{ScanError, ScanResult};
pub use types::record::{LoaderFamily, ModIdentity, ModReport, ScanRecord, ScanStatus};
pub use types::verdict::{Confidence, Side, SideVerdict};
