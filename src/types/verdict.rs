use serde::{Deserialize, Serialize};

/// The side a mod requires. Always exactly one of these five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Declared safe for a dedicated server.
    ServerOnly,
    /// Declared client-only; must not be deployed to a server.
    ClientOnly,
    /// Runs on both sides.
    Both,
    /// No descriptor and no client markers; nothing to go on.
    Unknown,
    /// Client markers found without an authoritative declaration.
    Risky,
}

impl Side {
    /// Whether this verdict belongs in a server-deployment review set.
    ///
    /// Mirrors the export filter downstream tools apply: definite server
    /// mods plus everything that could not be cleared.
    pub fn is_server_candidate(self) -> bool {
        matches!(self, Side::ServerOnly | Side::Unknown | Side::Risky)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Final classification for one archive: the side, how sure we are, and the
/// ordered list of human-readable justifications that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideVerdict {
    pub side: Side,
    pub confidence: Confidence,
    pub evidence: Vec<String>,
}

impl SideVerdict {
    pub fn new(side: Side, confidence: Confidence, evidence: Vec<String>) -> Self {
        Self {
            side,
            confidence,
            evidence,
        }
    }
}

#[cfg(test)]
#[path = "tests/verdict_tests.rs"]
mod tests;
