//! Mixin descriptor scan.
//!
//! A mixin config whose `client` section is non-empty injects code into
//! client classes, which is strong (though not conclusive) client evidence.

use serde_json::Value;

use super::{HeuristicHit, MarkerKind};
use crate::services::archive::ModArchive;
use crate::services::loader::parse_json_lenient;

/// Common namings: `mixins.modid.json`, `mixins.modid.client.json`,
/// `modid.mixins.json`.
pub(super) fn is_mixin_config(entry_name: &str) -> bool {
    let base = entry_name
        .rsplit('/')
        .next()
        .unwrap_or(entry_name)
        .to_ascii_lowercase();
    base.ends_with(".json") && (base.starts_with("mixins") || base.ends_with(".mixins.json"))
}

pub(super) fn scan_mixin_configs(archive: &mut ModArchive, limit: u64) -> Vec<HeuristicHit> {
    let mut config_names: Vec<String> = archive
        .entry_names()
        .filter(|name| is_mixin_config(name))
        .map(str::to_string)
        .collect();
    // Stable evidence order regardless of central-directory layout.
    config_names.sort();

    let mut hits = Vec::new();
    for name in config_names {
        let text = match archive.read_entry_string(&name, limit) {
            Ok(text) => text,
            Err(error) => {
                log::warn!("skipping unreadable mixin config '{name}': {error}");
                continue;
            }
        };
        let root = match parse_json_lenient(&name, &text) {
            Ok(root) => root,
            Err(error) => {
                log::debug!("skipping unparseable mixin config: {error}");
                continue;
            }
        };

        if let Some(client) = root.get("client").and_then(Value::as_array) {
            if !client.is_empty() {
                hits.push(HeuristicHit {
                    entry: name,
                    kind: MarkerKind::ClientMixinSection,
                    matched: format!("{} client mixin class(es)", client.len()),
                });
            }
        }
    }
    hits
}
