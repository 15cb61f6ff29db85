//! Outcome classification for completed tool invocations.

use serde::Serialize;
use serde_json::Value;

use crate::tools::ToolIdentity;

/// Caption shown whenever a tool result cannot be read as a success.
pub const WARNING_CAPTION: &str = "Something went wrong";

const GENERIC_SUCCESS_CAPTION: &str = "Done";

/// Outcome category for one completed tool invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeCategory {
    Success,
    Warning,
}

/// Caption and category derived from one completed tool result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolOutcome {
    pub caption: String,
    pub category: OutcomeCategory,
}

impl ToolOutcome {
    fn success(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            category: OutcomeCategory::Success,
        }
    }

    fn warning(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            category: OutcomeCategory::Warning,
        }
    }
}

/// Interprets one completed tool result into a caption and category.
///
/// The failure precondition dominates everything tool-specific: a reported
/// failure or an empty payload is the generic warning regardless of
/// identity. Payloads that fail to parse, carry a truthy `error` field, or
/// miss the shape the identity requires degrade to the same warning. The
/// function is total; nothing here can interrupt the fold.
#[must_use]
pub fn interpret(tool_name: &str, content: &str, success: bool) -> ToolOutcome {
    if !success || content.is_empty() {
        return ToolOutcome::warning(WARNING_CAPTION);
    }

    let Ok(payload) = serde_json::from_str::<Value>(content) else {
        tracing::debug!(tool_name, "tool result payload is not valid JSON");
        return ToolOutcome::warning(WARNING_CAPTION);
    };

    if payload.get("error").is_some_and(is_truthy) {
        return ToolOutcome::warning(WARNING_CAPTION);
    }

    let Some(identity) = ToolIdentity::parse(tool_name) else {
        return ToolOutcome::success(GENERIC_SUCCESS_CAPTION);
    };

    match identity {
        ToolIdentity::CreateCompanyResearchSession => match total_results(&payload) {
            None => ToolOutcome::warning(WARNING_CAPTION),
            Some(0) => ToolOutcome::warning("No companies found"),
            Some(1) => ToolOutcome::success("Matched company"),
            Some(matched) => ToolOutcome::success(format!("Matched {matched} companies")),
        },
        ToolIdentity::CreateSearchSession => match total_results(&payload).unwrap_or(0) {
            0 => ToolOutcome::warning("No results found"),
            1 => ToolOutcome::success("Found 1 result"),
            found => ToolOutcome::success(format!("Found {found} results")),
        },
        ToolIdentity::SessionEnrich => {
            let enrichments = payload
                .get("results")
                .and_then(Value::as_array)
                .map_or(0, Vec::len);
            match enrichments {
                0 => ToolOutcome::warning("No enrichments found"),
                1 => ToolOutcome::success("Found 1 result"),
                found => ToolOutcome::success(format!("Found {found} results")),
            }
        }
        ToolIdentity::SessionFetchEvents => {
            match payload.get("total_events").and_then(Value::as_u64) {
                None => ToolOutcome::warning(WARNING_CAPTION),
                Some(0) => ToolOutcome::warning("No events found"),
                Some(1) => ToolOutcome::success("Found 1 event"),
                Some(found) => ToolOutcome::success(format!("Found {found} events")),
            }
        }
        ToolIdentity::SessionViewData => match payload.as_object().map(|entries| entries.len()) {
            None => ToolOutcome::warning(WARNING_CAPTION),
            Some(0) => ToolOutcome::warning("No data loaded"),
            Some(1) => ToolOutcome::success("Loaded 1 result"),
            Some(loaded) => ToolOutcome::success(format!("Loaded {loaded} results")),
        },
        ToolIdentity::Autocomplete => ToolOutcome::success("Created search filters"),
        ToolIdentity::GetSearchFilters
        | ToolIdentity::GetSessionDetails
        | ToolIdentity::SessionLoadMoreResults
        | ToolIdentity::GetBusinessId => ToolOutcome::success(GENERIC_SUCCESS_CAPTION),
    }
}

fn total_results(payload: &Value) -> Option<u64> {
    payload
        .get("session_details")?
        .get("total_results")?
        .as_u64()
}

// The wire reports errors as strings, flags, counts, or nested objects;
// anything non-empty and non-zero counts as an error.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
