use serde_json::Value;
use tracing::warn;

use crate::TARGET_LLM_REQUEST;

/// Outcome of cleaning a raw assistant reply: either strict JSON, or the
/// cleaned text passed through when it does not parse. Callers must handle
/// both cases.
#[derive(Clone, Debug, PartialEq)]
pub enum CleanedResponse {
    Parsed(Value),
    Unparsed(String),
}

/// Strips code-fence wrapping and a leading `json` language tag, then
/// attempts a strict JSON parse. Parse failures are logged and recovered by
/// returning the cleaned text unchanged.
pub fn clean(raw: &str) -> CleanedResponse {
    let text = strip_code_fence(raw);
    match serde_json::from_str(text) {
        Ok(value) => CleanedResponse::Parsed(value),
        Err(err) => {
            warn!(target: TARGET_LLM_REQUEST, "Assistant reply is not valid JSON ({}), passing raw text through", err);
            CleanedResponse::Unparsed(text.to_string())
        }
    }
}

/// Removes a leading and trailing triple-backtick fence pair, then a leading
/// `json` language tag left behind by some fence styles.
fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(fenced) = text.strip_prefix("```") {
        if let Some(body) = fenced.strip_suffix("```") {
            text = body.trim();
        }
    }
    if let Some(tagged) = text.strip_prefix("json") {
        text = tagged.trim_start();
    }
    text
}
