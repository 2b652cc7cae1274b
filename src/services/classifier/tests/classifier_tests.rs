use super::*;
use crate::services::heuristics::{HeuristicHit, MarkerKind};
use crate::services::loader::{EntrypointSet, ModDescriptor};

fn signal(
    family: LoaderFamily,
    environment: Option<DeclaredEnv>,
    entrypoints: EntrypointSet,
) -> MetadataSignal {
    MetadataSignal {
        family,
        environment,
        entrypoints,
        descriptor: ModDescriptor::default(),
    }
}

fn namespace_hit() -> HeuristicSignal {
    HeuristicSignal {
        hits: vec![HeuristicHit {
            entry: "a/B.class".to_string(),
            kind: MarkerKind::ClientNamespace,
            matched: "net/minecraft/client/".to_string(),
        }],
    }
}

fn mixin_hit() -> HeuristicSignal {
    HeuristicSignal {
        hits: vec![HeuristicHit {
            entry: "mixins.m.json".to_string(),
            kind: MarkerKind::ClientMixinSection,
            matched: "1 client mixin class(es)".to_string(),
        }],
    }
}

#[test]
fn declared_server_without_client_entrypoint_is_server_only() {
    let meta = signal(
        LoaderFamily::Fabric,
        Some(DeclaredEnv::Server),
        EntrypointSet {
            main: true,
            ..Default::default()
        },
    );
    let verdict = classify(LoaderFamily::Fabric, Some(&meta), &HeuristicSignal::default());

    assert_eq!(verdict.side, Side::ServerOnly);
    assert_eq!(verdict.confidence, Confidence::High);
    assert_eq!(
        verdict.evidence,
        vec!["fabric.mod.json: environment=server".to_string()]
    );
}

// Declared server-only wins even when client markers matched: shared
// rendering-adjacent utility code trips the heuristics too often to let
// them override an explicit declaration.
#[test]
fn declared_server_overrides_heuristic_findings() {
    let meta = signal(
        LoaderFamily::Fabric,
        Some(DeclaredEnv::Server),
        EntrypointSet::default(),
    );
    let verdict = classify(LoaderFamily::Fabric, Some(&meta), &namespace_hit());

    assert_eq!(verdict.side, Side::ServerOnly);
    assert_eq!(verdict.confidence, Confidence::High);
}

#[test]
fn declared_server_with_both_entrypoint_kinds_stays_server_only() {
    let meta = signal(
        LoaderFamily::Fabric,
        Some(DeclaredEnv::Server),
        EntrypointSet {
            client: true,
            server: true,
            main: false,
        },
    );
    let verdict = classify(LoaderFamily::Fabric, Some(&meta), &HeuristicSignal::default());

    assert_eq!(verdict.side, Side::ServerOnly);
    assert!(verdict
        .evidence
        .iter()
        .any(|line| line.contains("authoritative")));
}

#[test]
fn declared_server_with_only_client_entrypoint_is_contradictory() {
    let meta = signal(
        LoaderFamily::Fabric,
        Some(DeclaredEnv::Server),
        EntrypointSet {
            client: true,
            ..Default::default()
        },
    );
    // Even with heuristic hits, an explicit server declaration rules out
    // `risky`; the contradiction degrades to `unknown`.
    let verdict = classify(LoaderFamily::Fabric, Some(&meta), &namespace_hit());

    assert_eq!(verdict.side, Side::Unknown);
    assert_eq!(verdict.confidence, Confidence::Low);
    assert!(!verdict.evidence.is_empty());
}

#[test]
fn declared_client_is_client_only_with_evidence() {
    let meta = signal(
        LoaderFamily::Quilt,
        Some(DeclaredEnv::Client),
        EntrypointSet::default(),
    );
    let verdict = classify(LoaderFamily::Quilt, Some(&meta), &HeuristicSignal::default());

    assert_eq!(verdict.side, Side::ClientOnly);
    assert_eq!(verdict.confidence, Confidence::High);
    assert_eq!(
        verdict.evidence,
        vec!["quilt.mod.json: environment=client".to_string()]
    );
}

#[test]
fn declared_star_environment_is_both() {
    let meta = signal(
        LoaderFamily::Quilt,
        Some(DeclaredEnv::Both),
        EntrypointSet::default(),
    );
    let verdict = classify(LoaderFamily::Quilt, Some(&meta), &HeuristicSignal::default());
    assert_eq!(verdict.side, Side::Both);
    assert_eq!(verdict.confidence, Confidence::High);
}

#[test]
fn both_entrypoint_kinds_without_environment_is_both() {
    let meta = signal(
        LoaderFamily::Quilt,
        None,
        EntrypointSet {
            client: true,
            server: true,
            main: false,
        },
    );
    let verdict = classify(LoaderFamily::Quilt, Some(&meta), &HeuristicSignal::default());
    assert_eq!(verdict.side, Side::Both);
}

// Heuristic-only law: evidence without a descriptor is `risky`, never
// `unknown` or `client_only`.
#[test]
fn heuristics_without_metadata_are_risky() {
    let verdict = classify(LoaderFamily::Unknown, None, &namespace_hit());

    assert_eq!(verdict.side, Side::Risky);
    assert_eq!(verdict.confidence, Confidence::Medium);
    assert_eq!(verdict.evidence.len(), 1);
    assert!(verdict.evidence[0].contains("net/minecraft/client/"));
}

// A Forge manifest tags the family but is never verdict evidence; client
// mixins still flag the archive.
#[test]
fn forge_manifest_with_client_mixins_is_risky() {
    let meta = signal(LoaderFamily::Forge, None, EntrypointSet::default());
    let verdict = classify(LoaderFamily::Forge, Some(&meta), &mixin_hit());

    assert_eq!(verdict.side, Side::Risky);
    assert!(verdict.evidence[0].contains("mixins.m.json"));
    assert!(!verdict
        .evidence
        .iter()
        .any(|line| line.contains("mods.toml")));
}

#[test]
fn risky_collects_every_heuristic_hit_in_order() {
    let mut hits = namespace_hit();
    hits.hits.extend(mixin_hit().hits);
    let verdict = classify(LoaderFamily::Unknown, None, &hits);

    assert_eq!(verdict.side, Side::Risky);
    assert_eq!(verdict.evidence.len(), 2);
    assert!(verdict.evidence[0].contains("a/B.class"));
    assert!(verdict.evidence[1].contains("mixins.m.json"));
}

// Total absence law.
#[test]
fn nothing_at_all_is_unknown() {
    let verdict = classify(LoaderFamily::Unknown, None, &HeuristicSignal::default());
    assert_eq!(verdict.side, Side::Unknown);
    assert_eq!(verdict.confidence, Confidence::Low);
}

#[test]
fn classification_is_a_pure_function() {
    let meta = signal(
        LoaderFamily::Fabric,
        Some(DeclaredEnv::Server),
        EntrypointSet {
            main: true,
            ..Default::default()
        },
    );
    let first = classify(LoaderFamily::Fabric, Some(&meta), &namespace_hit());
    let second = classify(LoaderFamily::Fabric, Some(&meta), &namespace_hit());
    assert_eq!(first, second);
}
