//! Forge-family TOML manifests (`mods.toml`, `neoforge.mods.toml`).
//!
//! Neither manifest carries a reliable environment field, so the signal's
//! environment stays unset: manifest presence tags the loader family and
//! supplies identity fields, nothing more.

use toml::Value;

use super::types::{EntrypointSet, MetadataSignal, ModDescriptor};
use crate::services::archive::ModArchive;
use crate::types::errors::{ScanError, ScanResult};
use crate::types::record::LoaderFamily;

const MANIFEST: &str = "META-INF/MANIFEST.MF";
const JAR_VERSION_PLACEHOLDER: &str = "${file.jarVersion}";

pub(super) fn parse(
    archive: &mut ModArchive,
    family: LoaderFamily,
    limit: u64,
) -> ScanResult<MetadataSignal> {
    let Some(path) = family.descriptor_path() else {
        return Err(ScanError::UnsupportedLoader);
    };

    let text = archive.read_entry_string(path, limit)?;
    let root: Value = toml::from_str(&text).map_err(|e| ScanError::MalformedDescriptor {
        entry: path.to_string(),
        reason: e.to_string(),
    })?;

    let mut descriptor = ModDescriptor::default();
    if let Some(entry) = root
        .get("mods")
        .and_then(Value::as_array)
        .and_then(|mods| mods.first())
        .and_then(Value::as_table)
    {
        descriptor.id = entry
            .get("modId")
            .and_then(Value::as_str)
            .map(str::to_string);
        descriptor.name = entry
            .get("displayName")
            .and_then(Value::as_str)
            .map(str::to_string);
        descriptor.version = entry
            .get("version")
            .and_then(Value::as_str)
            .map(str::to_string);
    }

    // Gradle leaves a substitution placeholder here; the real version lives
    // in the jar manifest.
    if descriptor.version.as_deref() == Some(JAR_VERSION_PLACEHOLDER) {
        descriptor.version = manifest_implementation_version(archive, limit);
    }

    Ok(MetadataSignal {
        family,
        environment: None,
        entrypoints: EntrypointSet::default(),
        descriptor,
    })
}

fn manifest_implementation_version(archive: &mut ModArchive, limit: u64) -> Option<String> {
    let text = archive.read_entry_string(MANIFEST, limit).ok()?;
    text.lines().find_map(|line| {
        line.strip_prefix("Implementation-Version:")
            .map(|v| v.trim().to_string())
    })
}
