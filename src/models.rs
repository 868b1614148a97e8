use serde::{Deserialize, Serialize};

use crate::core::dialogue::{ReplyKind, Step};

/// Response to a session-creation request
#[derive(Debug, Serialize, Deserialize)]
pub struct BeginResponse {
    pub session_id: String,
    pub prompt: String,
    pub step: Step,
}

/// One answer submitted to an active session
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub message: String,
}

/// Reply to a submitted answer
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub kind: ReplyKind,
    pub text: String,
    pub step: Step,
    /// The session delivered its result and has been discarded
    pub completed: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub active_sessions: usize,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
