//! Closed enumeration of the research agent's remote tool surface.

/// Identity of one recognized remote tool.
///
/// The set is closed and versioned alongside the agent service. Unrecognized
/// wire identifiers must flow through the generic fallback captions rather
/// than extending this enum at runtime, so adding a tool is a single
/// compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolIdentity {
    /// Field-lookup / filter-construction tool. The only identity whose
    /// in-progress caption is derived from partially-streamed arguments,
    /// and the only one whose consecutive results collapse to the last.
    Autocomplete,
    GetSearchFilters,
    CreateSearchSession,
    CreateCompanyResearchSession,
    GetSessionDetails,
    SessionLoadMoreResults,
    SessionViewData,
    GetBusinessId,
    SessionEnrich,
    SessionFetchEvents,
}

impl ToolIdentity {
    /// Resolves a wire identifier to a recognized identity.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "autocomplete" => Some(Self::Autocomplete),
            "get_search_filters" => Some(Self::GetSearchFilters),
            "create_search_session" => Some(Self::CreateSearchSession),
            "create_company_research_session" => Some(Self::CreateCompanyResearchSession),
            "get_session_details" => Some(Self::GetSessionDetails),
            "session_load_more_results" => Some(Self::SessionLoadMoreResults),
            "session_view_data" => Some(Self::SessionViewData),
            "get_business_id" => Some(Self::GetBusinessId),
            "session_enrich" => Some(Self::SessionEnrich),
            "session_fetch_events" => Some(Self::SessionFetchEvents),
            _ => None,
        }
    }

    /// Returns the wire identifier for this identity.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Autocomplete => "autocomplete",
            Self::GetSearchFilters => "get_search_filters",
            Self::CreateSearchSession => "create_search_session",
            Self::CreateCompanyResearchSession => "create_company_research_session",
            Self::GetSessionDetails => "get_session_details",
            Self::SessionLoadMoreResults => "session_load_more_results",
            Self::SessionViewData => "session_view_data",
            Self::GetBusinessId => "get_business_id",
            Self::SessionEnrich => "session_enrich",
            Self::SessionFetchEvents => "session_fetch_events",
        }
    }

    /// True for the field-lookup tool whose consecutive results collapse.
    #[must_use]
    pub fn is_field_lookup(self) -> bool {
        matches!(self, Self::Autocomplete)
    }
}
