//! Per-archive analysis pipeline: open, parse metadata, collect heuristics,
//! classify. Infallible by design — any container failure degrades this one
//! archive's verdict instead of propagating.

use std::path::Path;

use chrono::{DateTime, Utc};

use super::ScanOptions;
use crate::services::archive::ModArchive;
use crate::services::{classifier, heuristics, loader};
use crate::types::record::{LoaderFamily, ModIdentity, ModReport};
use crate::types::verdict::{Confidence, Side, SideVerdict};

pub(super) fn analyze_archive(path: &Path, options: &ScanOptions) -> ModReport {
    let identity = identity_for(path);

    let mut archive = match ModArchive::open(path) {
        Ok(archive) => archive,
        Err(error) => {
            log::warn!("failed to open '{}': {error}", path.display());
            return failed_report(identity, &error.to_string());
        }
    };

    let family = loader::detect(&archive);
    let metadata = loader::parse(&mut archive, family, options.max_entry_size);
    let heuristic = heuristics::scan(&mut archive, options.max_entry_size);
    let verdict = classifier::classify(family, metadata.as_ref(), &heuristic);

    let descriptor = metadata.map(|m| m.descriptor).unwrap_or_default();
    ModReport {
        identity,
        loader: family,
        mod_id: descriptor.id,
        name: descriptor.name,
        version: descriptor.version,
        verdict,
        failed: false,
    }
}

fn identity_for(path: &Path) -> ModIdentity {
    let metadata = std::fs::metadata(path).ok();
    ModIdentity {
        path: path.display().to_string(),
        file_name: path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default(),
        size_bytes: metadata.as_ref().map(|m| m.len()).unwrap_or(0),
        modified: metadata
            .and_then(|m| m.modified().ok())
            .map(DateTime::<Utc>::from),
    }
}

fn failed_report(identity: ModIdentity, reason: &str) -> ModReport {
    ModReport {
        identity,
        loader: LoaderFamily::Unknown,
        mod_id: None,
        name: None,
        version: None,
        verdict: SideVerdict::new(
            Side::Unknown,
            Confidence::Low,
            vec![format!("archive could not be analyzed: {reason}")],
        ),
        failed: true,
    }
}
