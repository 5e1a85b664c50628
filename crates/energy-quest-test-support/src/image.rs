//! Test image generators: mock `ImageGenerator` implementations for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use energy_quest_core::error::ProviderError;
use energy_quest_core::provider::{GeneratedImage, ImageGenerator, ImageRequest};

/// An image generator that replays a fixed script of results and records
/// every request. Fails with an upstream error once the script runs out.
#[derive(Debug)]
pub struct ScriptedImageGenerator {
    script: Mutex<VecDeque<Result<Vec<GeneratedImage>, ProviderError>>>,
    requests: Mutex<Vec<ImageRequest>>,
}

impl ScriptedImageGenerator {
    /// Create a generator that answers calls with `script`, in order.
    #[must_use]
    pub fn new(script: Vec<Result<Vec<GeneratedImage>, ProviderError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a generator that returns one image with `payload` for each of
    /// `calls` calls.
    #[must_use]
    pub fn repeating(payload: &str, calls: usize) -> Self {
        let image = GeneratedImage {
            image_bytes: Some(payload.to_owned()),
        };
        Self::new(vec![Ok(vec![image]); calls])
    }

    /// Returns a snapshot of all requests received.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn requests(&self) -> Vec<ImageRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerator for ScriptedImageGenerator {
    async fn generate_images(
        &self,
        request: ImageRequest,
    ) -> Result<Vec<GeneratedImage>, ProviderError> {
        self.requests.lock().unwrap().push(request);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ProviderError::Upstream("script exhausted".into())))
    }
}
