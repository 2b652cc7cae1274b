//! `quilt.mod.json` extraction.
//!
//! Quilt nests everything under `quilt_loader`; the environment value may sit
//! on the loader object itself or under its generic `metadata` block. Value
//! semantics match Fabric.

use serde_json::{Map, Value};

use super::json::parse_json_lenient;
use super::types::{DeclaredEnv, EntrypointSet, MetadataSignal, ModDescriptor};
use crate::services::archive::ModArchive;
use crate::types::errors::{ScanError, ScanResult};
use crate::types::record::LoaderFamily;

const DESCRIPTOR: &str = "quilt.mod.json";

pub(super) fn parse(archive: &mut ModArchive, limit: u64) -> ScanResult<MetadataSignal> {
    let text = archive.read_entry_string(DESCRIPTOR, limit)?;
    let root = parse_json_lenient(DESCRIPTOR, &text)?;
    let root = root
        .as_object()
        .ok_or_else(|| ScanError::MalformedDescriptor {
            entry: DESCRIPTOR.to_string(),
            reason: "top-level value is not an object".to_string(),
        })?;

    let loader = root.get("quilt_loader").and_then(Value::as_object);
    let metadata = loader
        .and_then(|l| l.get("metadata"))
        .and_then(Value::as_object);

    let environment = loader
        .and_then(|l| l.get("environment"))
        .or_else(|| metadata.and_then(|m| m.get("environment")))
        .and_then(Value::as_str)
        .map_or(DeclaredEnv::Both, DeclaredEnv::from_wire);

    let entrypoints = loader
        .and_then(|l| l.get("entrypoints"))
        .and_then(Value::as_object)
        .map(entrypoints_from)
        .unwrap_or_default();

    let descriptor = ModDescriptor {
        id: loader
            .and_then(|l| l.get("id"))
            .and_then(Value::as_str)
            .map(str::to_string),
        name: metadata
            .and_then(|m| m.get("name"))
            .and_then(Value::as_str)
            .map(str::to_string),
        version: loader
            .and_then(|l| l.get("version"))
            .and_then(Value::as_str)
            .map(str::to_string),
    };

    Ok(MetadataSignal {
        family: LoaderFamily::Quilt,
        environment: Some(environment),
        entrypoints,
        descriptor,
    })
}

/// Quilt descriptors in the wild use both the Fabric key names and the
/// `*_init` spellings; accept either.
fn entrypoints_from(map: &Map<String, Value>) -> EntrypointSet {
    EntrypointSet {
        client: map.contains_key("client") || map.contains_key("client_init"),
        server: map.contains_key("server") || map.contains_key("server_init"),
        main: map.contains_key("main") || map.contains_key("init"),
    }
}
