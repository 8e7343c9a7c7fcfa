//! # NLP Operations
//!
//! Criteria extraction and reply generation on top of the [`ChatModel`]
//! seam.

use std::collections::HashMap;

use serde_json::Value;
use tracing::warn;

use crate::query::SearchCriteria;

use super::client::{ChatMessage, ChatModel};
use super::errors::NlpResult;

const EXTRACT_SYSTEM_PROMPT: &str = "You extract real-estate search filters from a \
conversation. Reply with a single JSON object and nothing else. Allowed keys: \
budget, location, bedrooms, bathrooms, minSize, maxSize, amenities. Numeric \
values are plain integers, amenities is a comma-separated string. Omit any \
key the user did not specify.";

const CHAT_SYSTEM_PROMPT: &str = "You are a friendly real-estate assistant. Answer \
the user's message conversationally, grounded in the search context provided. \
Keep replies short and concrete; never invent listings that are not in the \
context.";

/// Ask the model to pull search filters out of a free-text message.
///
/// The reply is parsed with the same degrade-to-absent rules as the query
/// string: a malformed or off-script model reply yields an empty criteria,
/// never an error. Only transport and service failures surface as errors.
pub async fn extract_criteria(
    model: &dyn ChatModel,
    message: &str,
    history: &[ChatMessage],
) -> NlpResult<SearchCriteria> {
    let mut messages = vec![ChatMessage::system(EXTRACT_SYSTEM_PROMPT)];
    messages.extend_from_slice(history);
    messages.push(ChatMessage::user(message));

    let reply = model.complete(&messages).await?;
    Ok(criteria_from_reply(&reply))
}

/// Ask the model for a conversational reply grounded in search context.
pub async fn generate_reply(
    model: &dyn ChatModel,
    message: &str,
    context: &Value,
) -> NlpResult<String> {
    let system = format!("{}\n\nSearch context:\n{}", CHAT_SYSTEM_PROMPT, context);
    let messages = vec![ChatMessage::system(system), ChatMessage::user(message)];

    model.complete(&messages).await
}

/// Parse the model's JSON reply into criteria, degrading anything
/// unusable to "not specified".
fn criteria_from_reply(reply: &str) -> SearchCriteria {
    let Ok(Value::Object(fields)) = serde_json::from_str(strip_code_fence(reply)) else {
        warn!(reply, "model reply was not a JSON object, extracting nothing");
        return SearchCriteria::default();
    };

    // Stringify every value, then reuse the query-string parsing rules.
    let params: HashMap<String, String> = fields
        .into_iter()
        .filter_map(|(key, value)| {
            let raw = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Array(items) => items
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join(","),
                _ => return None,
            };
            Some((key, raw))
        })
        .collect();

    SearchCriteria::from_params(&params)
}

/// Models sometimes wrap JSON in a markdown code fence despite
/// instructions; accept both shapes.
fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    inner
        .strip_prefix("json")
        .unwrap_or(inner)
        .trim_end_matches('`')
        .trim()
}
