//! Plain confirmation bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// Confirmation message
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
