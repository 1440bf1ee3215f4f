use serde::{Deserialize, Serialize};

/// A stored short link. The storage layer's internal surrogate key is
/// deliberately absent; identifiers address records everywhere above it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub link: String,
    pub target: String,
    /// Opaque metadata, stored and returned verbatim.
    pub extras: Option<serde_json::Value>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Payload for creating a record. `created_at` is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub link: String,
    pub target: String,
    pub extras: Option<serde_json::Value>,
}
