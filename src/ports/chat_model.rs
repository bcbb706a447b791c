//! Chat model port definition.

use crate::domain::AppError;

/// One blocking chat completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    /// Model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// System instructions.
    pub system: String,
    /// User message.
    pub user: String,
}

/// Port for text-generation model calls.
pub trait ChatModel {
    /// Send the request and block until the full text is returned.
    fn complete(&self, request: ChatRequest) -> Result<String, AppError>;
}
