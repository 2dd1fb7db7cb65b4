//! Generation provider abstractions.
//!
//! The two outbound model APIs sit behind small traits so the request
//! pipeline can run against deterministic fakes in tests instead of
//! performing real network calls.

pub mod mock;
pub mod openai;

use async_trait::async_trait;

use crate::error::Result;

/// Chat completion: one system+user exchange in, the completion's text out.
#[async_trait]
pub trait TextCompletionProvider: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

/// Image generation: a text prompt in, a hosted image URL out.
#[async_trait]
pub trait ImageGenerationProvider: Send + Sync {
    async fn generate_image(&self, prompt: &str) -> Result<String>;
}
