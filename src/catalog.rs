//! Human-readable status captions for in-flight tool invocations.

use crate::partial_json::extract_string_field;
use crate::tools::ToolIdentity;

/// Caption shown while an unrecognized tool is running.
pub const FALLBACK_PROGRESS_CAPTION: &str = "Working on it";

/// Caption shown for the field-lookup tool before any field is extractable.
pub const LOOKUP_PROGRESS_CAPTION: &str = "Thinking";

/// Returns the in-progress caption for a tool invocation.
///
/// Every identity maps to a fixed caption except the field-lookup tool,
/// whose caption names whatever portion of the `field` argument has
/// streamed so far. Total: unknown identities and under-determined
/// arguments both degrade to a fixed caption.
#[must_use]
pub fn progress_caption(tool_name: &str, partial_arguments: &str) -> String {
    let Some(identity) = ToolIdentity::parse(tool_name) else {
        return FALLBACK_PROGRESS_CAPTION.to_string();
    };

    match identity {
        ToolIdentity::Autocomplete => match extract_string_field(partial_arguments, "field") {
            Some(field) => format!("Thinking about {field}"),
            None => LOOKUP_PROGRESS_CAPTION.to_string(),
        },
        ToolIdentity::GetSearchFilters => "Setting up search".to_string(),
        ToolIdentity::CreateSearchSession => "Searching for companies".to_string(),
        ToolIdentity::CreateCompanyResearchSession => "Matching".to_string(),
        ToolIdentity::GetSessionDetails => "Reading through the results".to_string(),
        ToolIdentity::SessionLoadMoreResults => "Loading more results".to_string(),
        ToolIdentity::SessionViewData => "Looking at the data".to_string(),
        ToolIdentity::GetBusinessId => "Getting business ID".to_string(),
        ToolIdentity::SessionEnrich => "Getting more information".to_string(),
        ToolIdentity::SessionFetchEvents => "Searching for events".to_string(),
    }
}
