use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use async_openai::{config::OpenAIConfig, Client as OpenAIClient};

/// Assistant provisioned with the Odia metadata-writing instructions.
pub const DEFAULT_METADATA_ASSISTANT_ID: &str = "asst_atTgMWrNdNOz2TvTC5mZQCTd";

/// Assistant provisioned with the focus-keyword transform instructions.
pub const DEFAULT_TRANSFORM_ASSISTANT_ID: &str = "asst_nnxpQdzLJyjKRoBTIl9Cfpid";

/// Startup configuration, read once from the environment and shared read-only
/// across all requests.
#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: String,
    pub access_key: String,
    pub api_base: Option<String>,
    pub metadata_assistant_id: String,
    pub transform_assistant_id: String,
    pub poll: PollConfig,
}

/// Pacing for the run-status polling loop: sleep `initial_interval` after the
/// first poll, doubling up to `max_interval`, and give up once `deadline` has
/// elapsed without the run completing.
#[derive(Clone, Copy, Debug)]
pub struct PollConfig {
    pub initial_interval: Duration,
    pub max_interval: Duration,
    pub deadline: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            initial_interval: Duration::from_secs(1),
            max_interval: Duration::from_secs(8),
            deadline: Duration::from_secs(300),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let openai_api_key =
            env::var("OPENAI_API_KEY").context("OPENAI_API_KEY environment variable required")?;
        let access_key =
            env::var("ACCESS_KEY").context("ACCESS_KEY environment variable required")?;

        let deadline_secs: u64 = env::var("RUN_DEADLINE_SECS")
            .ok()
            .and_then(|secs| secs.parse().ok())
            .unwrap_or(300);

        Ok(Self {
            openai_api_key,
            access_key,
            api_base: env::var("OPENAI_API_BASE").ok(),
            metadata_assistant_id: env::var("METADATA_ASSISTANT_ID")
                .unwrap_or_else(|_| DEFAULT_METADATA_ASSISTANT_ID.to_string()),
            transform_assistant_id: env::var("TRANSFORM_ASSISTANT_ID")
                .unwrap_or_else(|_| DEFAULT_TRANSFORM_ASSISTANT_ID.to_string()),
            poll: PollConfig {
                deadline: Duration::from_secs(deadline_secs),
                ..PollConfig::default()
            },
        })
    }

    /// Builds the process-wide assistant client. The client is stateless and
    /// safe to share across concurrently served requests.
    pub fn client(&self) -> OpenAIClient<OpenAIConfig> {
        let mut openai_config = OpenAIConfig::new().with_api_key(self.openai_api_key.clone());
        if let Some(api_base) = &self.api_base {
            openai_config = openai_config.with_api_base(api_base.clone());
        }
        OpenAIClient::with_config(openai_config)
    }
}
