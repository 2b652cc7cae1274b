//! `fabric.mod.json` extraction.

use serde_json::Value;

use super::json::parse_json_lenient;
use super::types::{DeclaredEnv, EntrypointSet, MetadataSignal, ModDescriptor};
use crate::services::archive::ModArchive;
use crate::types::errors::{ScanError, ScanResult};
use crate::types::record::LoaderFamily;

const DESCRIPTOR: &str = "fabric.mod.json";

pub(super) fn parse(archive: &mut ModArchive, limit: u64) -> ScanResult<MetadataSignal> {
    let text = archive.read_entry_string(DESCRIPTOR, limit)?;
    let root = parse_json_lenient(DESCRIPTOR, &text)?;
    let root = root
        .as_object()
        .ok_or_else(|| ScanError::MalformedDescriptor {
            entry: DESCRIPTOR.to_string(),
            reason: "top-level value is not an object".to_string(),
        })?;

    // `environment` is client/server/`*`; a missing or non-string field
    // means the default `*`.
    let environment = root
        .get("environment")
        .and_then(Value::as_str)
        .map_or(DeclaredEnv::Both, DeclaredEnv::from_wire);

    let mut entrypoints = EntrypointSet::default();
    if let Some(map) = root.get("entrypoints").and_then(Value::as_object) {
        entrypoints.client = map.contains_key("client");
        entrypoints.server = map.contains_key("server");
        entrypoints.main = map.contains_key("main");
    }

    let descriptor = ModDescriptor {
        id: string_field(root, "id"),
        name: string_field(root, "name"),
        version: string_field(root, "version"),
    };

    Ok(MetadataSignal {
        family: LoaderFamily::Fabric,
        environment: Some(environment),
        entrypoints,
        descriptor,
    })
}

fn string_field(map: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}
