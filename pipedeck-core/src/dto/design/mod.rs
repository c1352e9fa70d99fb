//! Design DTOs

use serde::{Deserialize, Serialize};

/// Acknowledgement for a submitted editor design
///
/// Designs are never stored or deployed anywhere, so `persisted` is how a
/// caller tells "accepted and dropped" apart from a real save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignAck {
    pub success: bool,
    pub persisted: bool,
    pub message: String,
}

impl DesignAck {
    /// The design was accepted but nothing was kept
    pub fn not_persisted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            persisted: false,
            message: message.into(),
        }
    }
}
