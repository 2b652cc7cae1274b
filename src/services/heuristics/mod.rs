//! Client-evidence heuristics.
//!
//! Two independent passes over the archive, both always run — precedence
//! against declared metadata is decided later by the classifier:
//! 1. mixin descriptors with a non-empty `client` section,
//! 2. class-file constant pools referencing client namespaces or client-only
//!    libraries.

mod constant_pool;
mod markers;
mod mixin;

pub use markers::MarkerKind;

use crate::services::archive::ModArchive;

/// One piece of client evidence: where it was found, what kind of marker,
/// and the matched text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeuristicHit {
    pub entry: String,
    pub kind: MarkerKind,
    pub matched: String,
}

impl HeuristicHit {
    /// Human-readable justification line for the verdict's evidence list.
    pub fn describe(&self) -> String {
        match self.kind {
            MarkerKind::ClientNamespace => {
                format!("class '{}' references client namespace '{}'", self.entry, self.matched)
            }
            MarkerKind::ClientLibrary => format!(
                "class '{}' references client-only library '{}'",
                self.entry, self.matched
            ),
            MarkerKind::ClientMixinSection => format!(
                "mixin config '{}' contains a non-empty 'client' section ({})",
                self.entry, self.matched
            ),
        }
    }
}

/// Accumulated client evidence for one archive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeuristicSignal {
    pub hits: Vec<HeuristicHit>,
}

impl HeuristicSignal {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Run both heuristic passes over the archive.
///
/// Entry-local failures (unreadable or malformed content) are skipped with a
/// logged warning; the scan itself never fails.
pub fn scan(archive: &mut ModArchive, limit: u64) -> HeuristicSignal {
    let mut hits = mixin::scan_mixin_configs(archive, limit);
    hits.extend(scan_class_constants(archive, limit));
    HeuristicSignal { hits }
}

/// Constant-pool pass: every `.class` entry is scanned so evidence is
/// complete; one hit per (entry, marker).
fn scan_class_constants(archive: &mut ModArchive, limit: u64) -> Vec<HeuristicHit> {
    let mut class_entries: Vec<String> = archive
        .entry_names()
        .filter(|name| name.ends_with(".class"))
        .map(str::to_string)
        .collect();
    // Stable evidence order regardless of central-directory layout.
    class_entries.sort();

    let mut hits = Vec::new();
    for entry in class_entries {
        let bytes = match archive.read_entry(&entry, limit) {
            Ok(bytes) => bytes,
            Err(error) => {
                log::warn!("skipping unreadable class '{entry}': {error}");
                continue;
            }
        };

        let constants = constant_pool::utf8_constants(&bytes);
        for (marker, kind) in markers::CLIENT_MARKERS {
            if constants.iter().any(|constant| constant.contains(marker)) {
                hits.push(HeuristicHit {
                    entry: entry.clone(),
                    kind: *kind,
                    matched: (*marker).to_string(),
                });
            }
        }
    }
    hits
}

#[cfg(test)]
#[path = "tests/heuristics_tests.rs"]
mod tests;
