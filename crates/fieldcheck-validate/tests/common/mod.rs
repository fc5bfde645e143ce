//! Shared fakes for validation tests.

use std::collections::HashMap;
use std::sync::Mutex;

use fieldcheck_model::{
    ResultCode, ServiceError, ServiceResult, VerificationOutcome, VerificationRequest, Verifier,
};

/// Scripted reply for a subject.
#[derive(Clone)]
pub enum Reply {
    Code(ResultCode),
    ServiceFailed,
    Transport,
    Misconfigured,
}

/// Verifier that answers from a per-subject script and records requests.
#[derive(Default)]
pub struct FakeVerifier {
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<VerificationRequest>>,
}

impl FakeVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, subject: &str, reply: Reply) -> Self {
        self.replies.insert(subject.to_string(), reply);
        self
    }

    pub fn calls(&self) -> Vec<VerificationRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl Verifier for FakeVerifier {
    fn verify(&self, request: &VerificationRequest) -> ServiceResult<VerificationOutcome> {
        self.calls.lock().unwrap().push(request.clone());
        match self.replies.get(&request.subject) {
            Some(Reply::Code(code)) => Ok(VerificationOutcome::succeeded(*code)),
            Some(Reply::ServiceFailed) => Ok(VerificationOutcome::failed("no credits")),
            Some(Reply::Transport) => Err(ServiceError::Http { status: 503 }),
            Some(Reply::Misconfigured) => {
                Err(ServiceError::Config("invalid header value".to_string()))
            }
            None => Ok(VerificationOutcome::succeeded(ResultCode::Valid)),
        }
    }
}
