//! Loader descriptor probing and parsing.
//!
//! Each loader family declares its metadata in one well-known entry. The
//! probe order below is a fixed contract: the first descriptor found wins and
//! the archive is never treated as multi-loader.

mod fabric;
mod forge;
mod json;
mod legacy;
mod quilt;
mod types;

pub use types::{DeclaredEnv, EntrypointSet, MetadataSignal, ModDescriptor};

pub(crate) use json::parse_json_lenient;

use crate::services::archive::ModArchive;
use crate::types::errors::ScanError;
use crate::types::record::LoaderFamily;

/// Fixed probe priority. Fabric and Quilt carry a usable environment field;
/// the rest only identify the family.
pub const PROBE_ORDER: [LoaderFamily; 6] = [
    LoaderFamily::Fabric,
    LoaderFamily::Quilt,
    LoaderFamily::Forge,
    LoaderFamily::NeoForge,
    LoaderFamily::LegacyForge,
    LoaderFamily::Rift,
];

impl LoaderFamily {
    /// Well-known descriptor entry for this family, if it has one.
    pub fn descriptor_path(self) -> Option<&'static str> {
        match self {
            LoaderFamily::Fabric => Some("fabric.mod.json"),
            LoaderFamily::Quilt => Some("quilt.mod.json"),
            LoaderFamily::Forge => Some("META-INF/mods.toml"),
            LoaderFamily::NeoForge => Some("META-INF/neoforge.mods.toml"),
            LoaderFamily::LegacyForge => Some("mcmod.info"),
            LoaderFamily::Rift => Some("riftmod.json"),
            LoaderFamily::Unknown => None,
        }
    }
}

/// Identify the loader family from descriptor presence alone.
pub fn detect(archive: &ModArchive) -> LoaderFamily {
    PROBE_ORDER
        .into_iter()
        .find(|family| {
            family
                .descriptor_path()
                .is_some_and(|path| archive.has_entry(path))
        })
        .unwrap_or(LoaderFamily::Unknown)
}

/// Parse the recognized descriptor into a metadata signal.
///
/// Malformed descriptor content is recovered locally: the signal degrades to
/// `None` (family tagging from [`detect`] is unaffected) and classification
/// proceeds on heuristics alone.
pub fn parse(archive: &mut ModArchive, family: LoaderFamily, limit: u64) -> Option<MetadataSignal> {
    let parsed = match family {
        LoaderFamily::Fabric => fabric::parse(archive, limit),
        LoaderFamily::Quilt => quilt::parse(archive, limit),
        LoaderFamily::Forge | LoaderFamily::NeoForge => forge::parse(archive, family, limit),
        LoaderFamily::LegacyForge => legacy::parse_mcmod_info(archive, limit),
        LoaderFamily::Rift => legacy::parse_riftmod(archive, limit),
        LoaderFamily::Unknown => Err(ScanError::UnsupportedLoader),
    };

    match parsed {
        Ok(signal) => Some(signal),
        Err(ScanError::UnsupportedLoader) => None,
        Err(error) => {
            log::warn!(
                "ignoring unusable {family:?} descriptor in '{}': {error}",
                archive.path().display()
            );
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
