//! Mock provider implementations for testing.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{ImageGenerationProvider, TextCompletionProvider};
use crate::error::{AppError, Result};

/// Mock text provider returning a canned completion, or a canned failure.
pub struct MockTextProvider {
    result: std::result::Result<String, String>,
    calls: AtomicUsize,
}

impl MockTextProvider {
    pub fn new(response: &str) -> Self {
        Self {
            result: Ok(response.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of completion calls made against this mock.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextCompletionProvider for MockTextProvider {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.result {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(AppError::Upstream(message.clone())),
        }
    }
}

/// Mock image provider returning a canned URL, or a canned failure.
pub struct MockImageProvider {
    result: std::result::Result<String, String>,
    calls: AtomicUsize,
}

impl MockImageProvider {
    pub fn new(url: &str) -> Self {
        Self {
            result: Ok(url.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageGenerationProvider for MockImageProvider {
    async fn generate_image(&self, _prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.result {
            Ok(url) => Ok(url.clone()),
            Err(message) => Err(AppError::Upstream(message.clone())),
        }
    }
}
