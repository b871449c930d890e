use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        CreateMessageRequestArgs, CreateRunRequestArgs, CreateThreadRequestArgs, MessageContent,
        MessageObject, MessageRole, RunStatus,
    },
    Client,
};
use thiserror::Error;
use tokio::time::{sleep, Instant};
use tracing::{debug, error, info, warn};

use crate::config::PollConfig;
use crate::TARGET_LLM_REQUEST;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("assistant service error: {0}")]
    Remote(#[from] OpenAIError),
    #[error("run {run_id} ended with terminal status {status:?}")]
    RunFailed { run_id: String, status: RunStatus },
    #[error("run {run_id} did not complete within {deadline:?}")]
    Timeout { run_id: String, deadline: Duration },
    #[error("run {run_id} completed but produced no assistant reply")]
    MissingReply { run_id: String },
}

/// Runs one job against a pre-provisioned assistant identity: creates a
/// conversation thread, posts the prompt as a single user message, starts a
/// run, and waits for the assistant's reply.
pub async fn run_assistant_job(
    client: &Client<OpenAIConfig>,
    assistant_id: &str,
    prompt: &str,
    run_instructions: &str,
    poll: &PollConfig,
) -> Result<String, AssistantError> {
    let thread = client
        .threads()
        .create(CreateThreadRequestArgs::default().build()?)
        .await?;
    debug!(target: TARGET_LLM_REQUEST, "Created thread {} for assistant {}", thread.id, assistant_id);

    let message = CreateMessageRequestArgs::default()
        .role(MessageRole::User)
        .content(prompt)
        .build()?;
    client.threads().messages(&thread.id).create(message).await?;

    let run = client
        .threads()
        .runs(&thread.id)
        .create(
            CreateRunRequestArgs::default()
                .assistant_id(assistant_id)
                .instructions(run_instructions)
                .build()?,
        )
        .await?;
    info!(target: TARGET_LLM_REQUEST, "Started run {} on thread {} against assistant {}", run.id, thread.id, assistant_id);

    await_run_completion(client, &thread.id, &run.id, poll).await
}

/// Polls a started run until it completes, then extracts the assistant's
/// reply from the thread. Waits with bounded exponential backoff; any
/// terminal status other than `completed` is an error, as is exceeding the
/// overall deadline.
pub async fn await_run_completion(
    client: &Client<OpenAIConfig>,
    thread_id: &str,
    run_id: &str,
    poll: &PollConfig,
) -> Result<String, AssistantError> {
    let started = Instant::now();
    let mut interval = poll.initial_interval;

    loop {
        let run = client.threads().runs(thread_id).retrieve(run_id).await?;
        match run.status {
            RunStatus::Completed => break,
            RunStatus::Queued | RunStatus::InProgress => {
                if started.elapsed() >= poll.deadline {
                    warn!(target: TARGET_LLM_REQUEST, "Run {} still {:?} after {:?}, giving up", run_id, run.status, poll.deadline);
                    return Err(AssistantError::Timeout {
                        run_id: run_id.to_string(),
                        deadline: poll.deadline,
                    });
                }
                debug!(target: TARGET_LLM_REQUEST, "Run {} is {:?}, polling again in {:?}", run_id, run.status, interval);
                sleep(interval).await;
                interval = (interval * 2).min(poll.max_interval);
            }
            status => {
                error!(target: TARGET_LLM_REQUEST, "Run {} ended with terminal status {:?}", run_id, status);
                return Err(AssistantError::RunFailed {
                    run_id: run_id.to_string(),
                    status,
                });
            }
        }
    }

    let messages = client
        .threads()
        .messages(thread_id)
        .list(&[("order", "desc")])
        .await?;

    match extract_assistant_reply(&messages.data) {
        Some(reply) => {
            info!(target: TARGET_LLM_REQUEST, "Run {} completed with a {} character reply", run_id, reply.len());
            Ok(reply)
        }
        None => Err(AssistantError::MissingReply {
            run_id: run_id.to_string(),
        }),
    }
}

/// First assistant-authored text in the message list. The service returns
/// messages newest first, so this is the latest reply.
pub fn extract_assistant_reply(messages: &[MessageObject]) -> Option<String> {
    messages
        .iter()
        .find(|message| matches!(message.role, MessageRole::Assistant))
        .and_then(|message| {
            message.content.iter().find_map(|content| match content {
                MessageContent::Text(text) => Some(text.text.value.clone()),
                _ => None,
            })
        })
}
