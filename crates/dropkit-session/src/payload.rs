#![forbid(unsafe_code)]

//! Drag payload codec.
//!
//! The payload is the minimal identifying information a drag gesture
//! carries: a MIME-like `kind` tag plus the source identity (node ids for
//! list drags, a cell coordinate for grid drags). Targets decode it before
//! accepting a gesture; anything malformed or foreign yields a typed
//! [`PayloadError`], never a panic — the gesture simply proceeds as a
//! no-drop.
//!
//! The codec fails closed: data is round-tripped through a schema'd JSON
//! form, so a foreign producer cannot smuggle unchecked structure past the
//! decode step.

use dropkit_core::tree::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind tag for payloads carrying list node ids.
pub const NODE_LIST_KIND: &str = "dropkit/nodes";

/// Kind tag for payloads carrying a grid cell coordinate.
pub const GRID_CELL_KIND: &str = "dropkit/grid-cell";

/// Why a serialized payload was not usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// The serialized form did not parse as a payload.
    Malformed(String),
    /// The payload parsed but its kind does not match the target's.
    KindMismatch {
        /// Kind pattern the target accepts.
        expected: String,
        /// Kind the payload actually carried.
        found: String,
    },
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(msg) => write!(f, "malformed drag payload: {msg}"),
            Self::KindMismatch { expected, found } => {
                write!(f, "payload kind {found:?} does not match target {expected:?}")
            }
        }
    }
}

impl std::error::Error for PayloadError {}

/// The source identity carried by a drag gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayloadSource {
    /// Node ids captured from a list drag.
    Nodes(Vec<NodeId>),
    /// Origin cell of a grid drag.
    Cell {
        /// Source column.
        col: u16,
        /// Source row.
        row: u16,
    },
}

/// Data carried by the platform drag gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropPayload {
    /// MIME-like kind tag matched against the accepting target.
    pub kind: String,
    /// Source identity.
    pub source: PayloadSource,
}

impl DropPayload {
    /// Payload for a list drag carrying the given node ids.
    #[must_use]
    pub fn nodes(ids: Vec<NodeId>) -> Self {
        Self {
            kind: NODE_LIST_KIND.to_string(),
            source: PayloadSource::Nodes(ids),
        }
    }

    /// Payload for a grid drag originating at `(col, row)`.
    #[must_use]
    pub fn grid_cell(col: u16, row: u16) -> Self {
        Self {
            kind: GRID_CELL_KIND.to_string(),
            source: PayloadSource::Cell { col, row },
        }
    }

    /// Override the kind tag, for hosts with several distinct drag contexts.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Whether the payload kind matches a target's accepted pattern.
    ///
    /// Supports exact match and a trailing wildcard (e.g. `"dropkit/*"`).
    /// The wildcard prefix must end at a slash, so `"dropkit/*"` does not
    /// match `"dropkit2/nodes"`.
    #[must_use]
    pub fn matches_kind(&self, pattern: &str) -> bool {
        if pattern == "*" || pattern == "*/*" {
            return true;
        }
        if let Some(prefix) = pattern.strip_suffix("/*") {
            self.kind.starts_with(prefix)
                && self.kind.as_bytes().get(prefix.len()) == Some(&b'/')
        } else {
            self.kind == pattern
        }
    }

    /// Serialize for the platform drag transport.
    pub fn encode(&self) -> Result<String, PayloadError> {
        serde_json::to_string(self).map_err(|e| PayloadError::Malformed(e.to_string()))
    }

    /// Deserialize a payload received from the platform drag transport.
    pub fn decode(serialized: &str) -> Result<Self, PayloadError> {
        serde_json::from_str(serialized).map_err(|e| PayloadError::Malformed(e.to_string()))
    }

    /// Decode and enforce the target's kind in one step.
    ///
    /// The two failure classes are distinct so targets can tell "garbage"
    /// from "fine payload, wrong context"; both mean "ignore this gesture".
    pub fn decode_for(serialized: &str, expected_kind: &str) -> Result<Self, PayloadError> {
        let payload = Self::decode(serialized)?;
        if payload.matches_kind(expected_kind) {
            Ok(payload)
        } else {
            Err(PayloadError::KindMismatch {
                expected: expected_kind.to_string(),
                found: payload.kind,
            })
        }
    }
}
