//! Response types (Serialize)

use serde::{Deserialize, Serialize};

/// `201` body of `POST /api/songs`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatedResponse {
    pub id: i32,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}
