//! API wire types — mirrors the backend's request/response schemas.

use serde::{Deserialize, Serialize};

/// Every backend payload is wrapped as `{ "message": ..., "data": ... }`.
/// Only `data` is read.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

// ── Auth ────────────────────────────────────────────────────────────

/// An authenticated user: bearer token plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
}

/// Account role. Self-registration only ever creates common users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Artist,
    #[default]
    Common,
}
