use serde::{Deserialize, Serialize};

/// Error body returned by the club endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
