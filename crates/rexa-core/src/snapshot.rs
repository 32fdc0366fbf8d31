//! Serializable record of a compiled automaton.
//!
//! A snapshot keeps the postfix token string and automaton kind, which is
//! enough to rebuild a behaviorally equivalent automaton, plus the edge
//! listing so a viewer can re-render it without recompiling.

use crate::automaton::AutomatonKind;
use crate::inspect::{Listing, inspect};
use crate::nfa::ClosureMode;
use crate::symbol::Label;
use crate::Automaton;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SnapshotEdge {
    pub from: String,
    pub symbol: Label,
    pub to: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Snapshot {
    pub version: u32,
    #[serde(rename = "type")]
    pub kind: AutomatonKind,
    pub postfix: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    #[serde(default)]
    pub closure: ClosureMode,
    pub start: String,
    pub accepts: Vec<String>,
    pub edges: Vec<SnapshotEdge>,
}

impl Snapshot {
    /// Capture `automaton` together with the postfix it was built from.
    pub fn capture(
        automaton: &Automaton,
        postfix: impl Into<String>,
        regex: Option<String>,
        closure: ClosureMode,
    ) -> Self {
        let listing = inspect(automaton);
        Self::from_listing(automaton.kind(), postfix, regex, closure, &listing)
    }

    pub fn from_listing(
        kind: AutomatonKind,
        postfix: impl Into<String>,
        regex: Option<String>,
        closure: ClosureMode,
        listing: &Listing,
    ) -> Self {
        let edges = listing
            .edges()
            .iter()
            .map(|e| SnapshotEdge {
                from: Listing::name(e.from),
                symbol: e.label,
                to: Listing::name(e.to),
            })
            .collect();

        Self {
            version: SNAPSHOT_VERSION,
            kind,
            postfix: postfix.into(),
            regex,
            closure,
            start: Listing::name(listing.start()),
            accepts: listing.accepts().iter().map(|&a| Listing::name(a)).collect(),
            edges,
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, SnapshotError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(text)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        Ok(snapshot)
    }

    /// The stored edges in `S0 -- a --> S1` form.
    pub fn transcript(&self) -> String {
        let mut lines: Vec<String> = self
            .edges
            .iter()
            .map(|e| format!("{} -- {} --> {}", e.from, e.symbol, e.to))
            .collect();
        lines.push(String::new());
        lines.push(format!("Start: {}", self.start));
        lines.push(format!("Accept: {}", self.accepts.join(", ")));
        lines.join("\n")
    }
}
