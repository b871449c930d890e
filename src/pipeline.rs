use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::assistant::{run_assistant_job, AssistantError};
use crate::cleaner::{clean, CleanedResponse};
use crate::prompt;
use crate::AppState;
use crate::TARGET_LLM_REQUEST;

/// Inbound request body. Missing fields default to empty values so partial
/// requests keep working.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRequest {
    #[serde(default)]
    pub article_text: String,
    #[serde(default)]
    pub special_instructions: SpecialInstructions,
}

/// Editorial guidance for the metadata stage. Any fields beyond the focus
/// keyword (angle, language_style, ...) are carried verbatim into the prompt.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SpecialInstructions {
    #[serde(default)]
    pub focus_keyword: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Transform-stage output fields used only to derive the focus keyword; never
/// returned to the caller.
const SCRATCH_KEYS: [&str; 2] = ["focus_keyword_odia", "focus_keyword_english"];

/// Drives the full pipeline for one request: metadata stage, transform stage,
/// response cleaning, and scratch-key removal. Stages run strictly in
/// sequence since the transform consumes the metadata stage's raw text.
pub async fn generate_metadata(
    state: &AppState,
    request: &MetadataRequest,
) -> Result<Value, AssistantError> {
    let focus_keyword = &request.special_instructions.focus_keyword;
    if focus_keyword.is_empty() {
        info!(target: TARGET_LLM_REQUEST, "No focus keyword supplied, the transform stage will derive one");
    } else {
        info!(target: TARGET_LLM_REQUEST, "Focus keyword supplied: {}", focus_keyword);
    }

    let metadata_text = run_metadata_stage(state, request).await?;
    debug!(target: TARGET_LLM_REQUEST, "Raw metadata stage reply: {}", metadata_text);

    let transformed_text = run_transform_stage(state, &metadata_text, focus_keyword).await?;
    debug!(target: TARGET_LLM_REQUEST, "Raw transform stage reply: {}", transformed_text);

    Ok(postprocess(clean(&transformed_text)))
}

async fn run_metadata_stage(
    state: &AppState,
    request: &MetadataRequest,
) -> Result<String, AssistantError> {
    let special_instructions =
        serde_json::to_string(&request.special_instructions).unwrap_or_default();
    let prompt = prompt::metadata_prompt(&request.article_text, &special_instructions);

    run_assistant_job(
        &state.client,
        &state.config.metadata_assistant_id,
        &prompt,
        prompt::METADATA_RUN_INSTRUCTIONS,
        &state.config.poll,
    )
    .await
}

async fn run_transform_stage(
    state: &AppState,
    metadata_text: &str,
    focus_keyword: &str,
) -> Result<String, AssistantError> {
    let prompt = prompt::transform_prompt(metadata_text, focus_keyword);

    run_assistant_job(
        &state.client,
        &state.config.transform_assistant_id,
        &prompt,
        prompt::TRANSFORM_RUN_INSTRUCTIONS,
        &state.config.poll,
    )
    .await
}

/// Removes the scratch keys from a parsed transform reply. Unparsed replies
/// pass through without key removal.
fn postprocess(cleaned: CleanedResponse) -> Value {
    match cleaned {
        CleanedResponse::Parsed(mut value) => {
            if let Some(object) = value.as_object_mut() {
                for key in SCRATCH_KEYS {
                    object.remove(key);
                }
            }
            value
        }
        CleanedResponse::Unparsed(text) => Value::String(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn postprocess_removes_scratch_keys() {
        let cleaned = CleanedResponse::Parsed(json!({
            "focus_keyword_odia": "ବନ୍ୟା",
            "focus_keyword_english": "Flood",
            "headline": "Flood: ଶିରୋନାମା",
            "meta_title": "Flood: ଶୀର୍ଷକ",
        }));

        let value = postprocess(cleaned);
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("focus_keyword_odia"));
        assert!(!object.contains_key("focus_keyword_english"));
        assert_eq!(object.len(), 2);
    }

    #[test]
    fn postprocess_passes_unparsed_text_through() {
        let value = postprocess(CleanedResponse::Unparsed("not json at all".to_string()));
        assert_eq!(value, Value::String("not json at all".to_string()));
    }

    #[test]
    fn missing_body_fields_default_to_empty() {
        let request: MetadataRequest = serde_json::from_str("{}").unwrap();
        assert!(request.article_text.is_empty());
        assert!(request.special_instructions.focus_keyword.is_empty());
        assert!(request.special_instructions.extra.is_empty());
    }

    #[test]
    fn extra_instruction_fields_are_carried_through() {
        let request: MetadataRequest = serde_json::from_str(
            r#"{
                "articleText": "ଲେଖା",
                "specialInstructions": {
                    "focus_keyword": "ବନ୍ୟା",
                    "angle": "rescue efforts",
                    "language_style": "conversational"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(request.special_instructions.focus_keyword, "ବନ୍ୟା");
        let rendered = serde_json::to_string(&request.special_instructions).unwrap();
        assert!(rendered.contains("rescue efforts"));
        assert!(rendered.contains("conversational"));
    }
}
