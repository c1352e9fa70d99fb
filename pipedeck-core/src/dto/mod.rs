//! Data Transfer Objects for the HTTP API
//!
//! Request and response bodies shared by the web application and the client.

pub mod design;
pub mod pipeline;

use serde::{Deserialize, Serialize};

/// Bare `{"success": true}` acknowledgement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
