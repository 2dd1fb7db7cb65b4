//! OpenAI-backed provider implementation.
//!
//! One client serves both capabilities: chat completions for the recipe text
//! and image generations for the photo URL.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{ImageGenerationProvider, TextCompletionProvider};
use crate::error::{AppError, Result};

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const IMAGE_GENERATIONS_URL: &str = "https://api.openai.com/v1/images/generations";

const CHAT_MODEL: &str = "gpt-3.5-turbo";
const CHAT_TEMPERATURE: f32 = 0.7;
const IMAGE_MODEL: &str = "dall-e-3";
const IMAGE_SIZE: &str = "1024x1024";

#[derive(Clone)]
pub struct OpenAiClient {
    api_key: String,
    client: Client,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: Client::new(),
        }
    }

    /// Surface a non-2xx response as an upstream error, preferring the API's
    /// own error message when the body parses.
    async fn error_from_response(response: reqwest::Response) -> AppError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorResponse>(&body)
            .map(|parsed| parsed.error.message)
            .unwrap_or(body);
        AppError::Upstream(format!("OpenAI API error ({status}): {message}"))
    }
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Serialize)]
struct ImageRequest {
    model: String,
    prompt: String,
    n: u8,
    size: String,
}

#[derive(Deserialize)]
struct ImageResponse {
    data: Vec<ImageData>,
}

#[derive(Deserialize)]
struct ImageData {
    url: String,
}

#[derive(Deserialize)]
struct ApiErrorResponse {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

#[async_trait]
impl TextCompletionProvider for OpenAiClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let request = ChatRequest {
            model: CHAT_MODEL.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            temperature: CHAT_TEMPERATURE,
        };

        tracing::debug!(model = CHAT_MODEL, prompt_len = user.len(), "Requesting chat completion");

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let completion: ChatResponse = response.json().await?;
        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Upstream("Completion response contained no choices".to_string()))?;

        Ok(choice.message.content)
    }
}

#[async_trait]
impl ImageGenerationProvider for OpenAiClient {
    async fn generate_image(&self, prompt: &str) -> Result<String> {
        let request = ImageRequest {
            model: IMAGE_MODEL.to_string(),
            prompt: prompt.to_string(),
            n: 1,
            size: IMAGE_SIZE.to_string(),
        };

        tracing::debug!(model = IMAGE_MODEL, "Requesting image generation");

        let response = self
            .client
            .post(IMAGE_GENERATIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let generated: ImageResponse = response.json().await?;
        let image = generated
            .data
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Upstream("Image response contained no data".to_string()))?;

        Ok(image.url)
    }
}
