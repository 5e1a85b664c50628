//! Test text generators: mock `TextGenerator` implementations for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use energy_quest_core::error::ProviderError;
use energy_quest_core::provider::{TextGenerator, TextRequest};

/// A text generator that replays a fixed script of results, one per call,
/// and records every request it receives. Once the script is exhausted each
/// call fails with an upstream error.
#[derive(Debug)]
pub struct ScriptedTextGenerator {
    script: Mutex<VecDeque<Result<String, ProviderError>>>,
    requests: Mutex<Vec<TextRequest>>,
}

impl ScriptedTextGenerator {
    /// Create a generator that answers calls with `script`, in order.
    #[must_use]
    pub fn new(script: Vec<Result<String, ProviderError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all requests received.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn requests(&self) -> Vec<TextRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedTextGenerator {
    async fn generate_text(&self, request: TextRequest) -> Result<String, ProviderError> {
        self.requests.lock().unwrap().push(request);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ProviderError::Upstream("script exhausted".into())))
    }
}
