//! Verdict derivation: a pure function over the two collected signals.
//!
//! Precedence is explicit and ordered. A declared environment from a
//! recognized loader outranks heuristic findings — shared rendering-adjacent
//! utility code trips the constant-pool markers often enough that a declared
//! `server` environment must win over them.

use crate::services::heuristics::HeuristicSignal;
use crate::services::loader::{DeclaredEnv, MetadataSignal};
use crate::types::record::LoaderFamily;
use crate::types::verdict::{Confidence, Side, SideVerdict};

/// Merge metadata and heuristic evidence into a final verdict.
///
/// First matching rule wins:
/// 1. declared `server` environment → `server_only` (heuristics overridden),
///    unless the descriptor *only* declares a client entrypoint — that
///    contradiction downgrades to `unknown`;
/// 2. declared `client` environment → `client_only`;
/// 3. declared `*` environment, or both client and server entrypoints →
///    `both`;
/// 4. non-empty heuristics without a decisive declaration → `risky`;
/// 5. otherwise → `unknown`.
pub fn classify(
    family: LoaderFamily,
    metadata: Option<&MetadataSignal>,
    heuristics: &HeuristicSignal,
) -> SideVerdict {
    if let Some(meta) = metadata {
        let label = family.descriptor_path().unwrap_or("descriptor");
        match meta.environment {
            Some(DeclaredEnv::Server) => return classify_declared_server(label, meta),
            Some(DeclaredEnv::Client) => {
                return SideVerdict::new(
                    Side::ClientOnly,
                    Confidence::High,
                    vec![format!("{label}: environment=client")],
                );
            }
            Some(DeclaredEnv::Both) => {
                return SideVerdict::new(
                    Side::Both,
                    Confidence::High,
                    vec![format!("{label}: environment=*")],
                );
            }
            None => {
                if meta.entrypoints.client && meta.entrypoints.server {
                    return SideVerdict::new(
                        Side::Both,
                        Confidence::High,
                        vec![format!(
                            "{label}: declares both client and server entrypoints"
                        )],
                    );
                }
                // Family-only descriptors (Forge manifests, mcmod.info,
                // riftmod.json) are inconclusive; fall through.
            }
        }
    }

    if !heuristics.is_empty() {
        let evidence = heuristics.hits.iter().map(|hit| hit.describe()).collect();
        return SideVerdict::new(Side::Risky, Confidence::Medium, evidence);
    }

    SideVerdict::new(
        Side::Unknown,
        Confidence::Low,
        vec!["no recognized sided metadata and no client markers found".to_string()],
    )
}

/// `environment: server` handling.
///
/// The environment declaration is authoritative over entrypoint-derived
/// signals, so a descriptor that also declares a client entrypoint alongside
/// server/main ones still classifies `server_only` (the conflict is noted in
/// the evidence). A descriptor whose *only* entrypoint is `client` is
/// self-contradictory: neither declaration can be trusted, and an explicit
/// `server` environment rules out `risky`, so the verdict degrades to
/// `unknown`.
fn classify_declared_server(label: &str, meta: &MetadataSignal) -> SideVerdict {
    let entrypoints = meta.entrypoints;
    if entrypoints.client && !entrypoints.server && !entrypoints.main {
        return SideVerdict::new(
            Side::Unknown,
            Confidence::Low,
            vec![format!(
                "{label}: environment=server contradicts its only entrypoint being 'client'"
            )],
        );
    }

    let mut evidence = vec![format!("{label}: environment=server")];
    if entrypoints.client {
        evidence.push(format!(
            "{label}: declared environment treated as authoritative over the client entrypoint"
        ));
    }
    SideVerdict::new(Side::ServerOnly, Confidence::High, evidence)
}

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod tests;
