//! Loaders with no sided metadata at all: legacy Forge (`mcmod.info`) and
//! Rift (`riftmod.json`). Both contribute identity fields only; environment
//! stays unset and classification falls to the heuristics.

use serde_json::{Map, Value};

use super::json::parse_json_lenient;
use super::types::{EntrypointSet, MetadataSignal, ModDescriptor};
use crate::services::archive::ModArchive;
use crate::types::errors::{ScanError, ScanResult};
use crate::types::record::LoaderFamily;

const MCMOD_INFO: &str = "mcmod.info";
const RIFTMOD: &str = "riftmod.json";

pub(super) fn parse_mcmod_info(archive: &mut ModArchive, limit: u64) -> ScanResult<MetadataSignal> {
    let text = archive.read_entry_string(MCMOD_INFO, limit)?;
    let root = parse_json_lenient(MCMOD_INFO, &text)?;

    // mcmod.info ships either as a bare array of mod objects or as a
    // `{"modList": [...]}` wrapper (casing varies); oldest files are a
    // single object.
    let entry = match &root {
        Value::Array(items) => items.first().and_then(Value::as_object),
        Value::Object(map) => map
            .get("modList")
            .or_else(|| map.get("modlist"))
            .and_then(Value::as_array)
            .and_then(|items| items.first())
            .and_then(Value::as_object)
            .or(Some(map)),
        _ => None,
    };
    let entry = entry.ok_or_else(|| ScanError::MalformedDescriptor {
        entry: MCMOD_INFO.to_string(),
        reason: "no mod entry found".to_string(),
    })?;

    Ok(MetadataSignal {
        family: LoaderFamily::LegacyForge,
        environment: None,
        entrypoints: EntrypointSet::default(),
        descriptor: ModDescriptor {
            id: string_field(entry, "modid"),
            name: string_field(entry, "name"),
            version: string_field(entry, "version"),
        },
    })
}

pub(super) fn parse_riftmod(archive: &mut ModArchive, limit: u64) -> ScanResult<MetadataSignal> {
    let text = archive.read_entry_string(RIFTMOD, limit)?;
    let root = parse_json_lenient(RIFTMOD, &text)?;
    let root = root
        .as_object()
        .ok_or_else(|| ScanError::MalformedDescriptor {
            entry: RIFTMOD.to_string(),
            reason: "top-level value is not an object".to_string(),
        })?;

    Ok(MetadataSignal {
        family: LoaderFamily::Rift,
        environment: None,
        entrypoints: EntrypointSet::default(),
        descriptor: ModDescriptor {
            id: string_field(root, "id"),
            name: string_field(root, "name"),
            version: string_field(root, "version"),
        },
    })
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}
