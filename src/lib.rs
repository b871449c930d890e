pub mod api;
pub mod assistant;
pub mod cleaner;
pub mod config;
pub mod logging;
pub mod pipeline;
pub mod prompt;

use std::sync::Arc;

use async_openai::{config::OpenAIConfig, Client as OpenAIClient};

use crate::config::Config;

pub const TARGET_WEB_REQUEST: &str = "web_request";
pub const TARGET_LLM_REQUEST: &str = "llm_request";

/// Shared state for the HTTP handlers: the startup configuration and the
/// remote assistant client. Both are read-only after boot and safe to clone
/// across concurrently served requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: OpenAIClient<OpenAIConfig>,
}
