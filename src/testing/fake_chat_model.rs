use crate::domain::AppError;
use crate::ports::{ChatModel, ChatRequest};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
enum FakeOutcome {
    Respond(String),
    Fail(String),
}

/// Chat model double that records requests and replays a fixed outcome.
#[derive(Debug, Clone)]
pub struct FakeChatModel {
    pub requests: Arc<Mutex<Vec<ChatRequest>>>,
    outcome: FakeOutcome,
}

impl FakeChatModel {
    pub fn responding(text: impl Into<String>) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), outcome: FakeOutcome::Respond(text.into()) }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), outcome: FakeOutcome::Fail(message.into()) }
    }

    pub fn get_requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ChatModel for FakeChatModel {
    fn complete(&self, request: ChatRequest) -> Result<String, AppError> {
        self.requests.lock().unwrap().push(request);
        match &self.outcome {
            FakeOutcome::Respond(text) => Ok(text.clone()),
            FakeOutcome::Fail(message) => Err(AppError::ModelInvocation(message.clone())),
        }
    }
}
