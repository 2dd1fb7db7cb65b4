pub mod api;
pub mod config;
pub mod error;
pub mod prompt;
pub mod providers;
pub mod resources;

use std::sync::Arc;

use config::Config;
use providers::{ImageGenerationProvider, TextCompletionProvider};

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub completions: Arc<dyn TextCompletionProvider>,
    pub images: Arc<dyn ImageGenerationProvider>,
}
