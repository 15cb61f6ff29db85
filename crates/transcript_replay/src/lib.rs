//! Deterministic scripted conversation snapshots.
//!
//! This crate is the local stand-in for the streaming transport: a canned
//! research conversation, replayed as the progressively longer snapshots
//! the external collaborator would hand to the engine after each stream
//! update. It contains no transport or protocol logic and is intended for
//! local development and contract-level integration testing.

use agent_stream::{ContentFragment, StreamMessage};

/// One progressive view of the append-only conversation stream.
pub type Snapshot = Vec<StreamMessage>;

/// One scripted moment: the snapshot visible to the caller, plus the
/// optimistic echo the caller's input layer would still be holding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayStep {
    pub label: &'static str,
    pub snapshot: Snapshot,
    pub pending_echo: Option<&'static str>,
}

const PROMPT: &str = "Find European banks with more than 500 employees";

/// Returns the canned research conversation, step by step.
///
/// Later snapshots extend earlier ones; the script walks the interesting
/// reconciliation moments in order: an optimistic submit, its confirmation,
/// a lookup preview growing argument by argument, a run of consecutive
/// filter-refinement results, a completed search, an empty events probe,
/// and the closing summary.
#[must_use]
pub fn research_session_script() -> Vec<ReplayStep> {
    let mut steps = Vec::new();
    let mut stream: Snapshot = Vec::new();

    steps.push(ReplayStep {
        label: "optimistic submit",
        snapshot: stream.clone(),
        pending_echo: Some(PROMPT),
    });

    stream.push(StreamMessage::human("msg-1", PROMPT));
    steps.push(ReplayStep {
        label: "turn confirmed, echo still held",
        snapshot: stream.clone(),
        pending_echo: Some(PROMPT),
    });

    stream.push(StreamMessage::assistant(
        "msg-2",
        vec![lookup_preview(r#"{"fie"#)],
    ));
    steps.push(ReplayStep {
        label: "lookup arguments streaming",
        snapshot: stream.clone(),
        pending_echo: None,
    });

    replace_last(
        &mut stream,
        StreamMessage::assistant(
            "msg-2",
            vec![lookup_preview(r#"{"field":"company_size","va"#)],
        ),
    );
    steps.push(ReplayStep {
        label: "lookup field extractable",
        snapshot: stream.clone(),
        pending_echo: None,
    });

    stream.push(StreamMessage::tool(
        "msg-3",
        "autocomplete",
        r#"{"filters":{"company_size":"501+"}}"#,
    ));
    stream.push(StreamMessage::tool(
        "msg-4",
        "autocomplete",
        r#"{"filters":{"company_size":"501+","region":"europe"}}"#,
    ));
    steps.push(ReplayStep {
        label: "consecutive filter refinements",
        snapshot: stream.clone(),
        pending_echo: None,
    });

    stream.push(StreamMessage::assistant(
        "msg-5",
        vec![ContentFragment::ToolUse {
            index: 0,
            tool_name: "create_search_session".to_string(),
            partial_arguments: r#"{"filters":{"company_size":"501+"#.to_string(),
        }],
    ));
    steps.push(ReplayStep {
        label: "search session starting",
        snapshot: stream.clone(),
        pending_echo: None,
    });

    stream.push(StreamMessage::tool(
        "msg-6",
        "create_search_session",
        r#"{"session_details":{"total_results":128}}"#,
    ));
    steps.push(ReplayStep {
        label: "search complete",
        snapshot: stream.clone(),
        pending_echo: None,
    });

    stream.push(StreamMessage::tool(
        "msg-7",
        "session_fetch_events",
        r#"{"total_events":0}"#,
    ));
    steps.push(ReplayStep {
        label: "events probe comes back empty",
        snapshot: stream.clone(),
        pending_echo: None,
    });

    stream.push(StreamMessage::assistant(
        "msg-8",
        vec![ContentFragment::Text {
            index: 0,
            text: "Here are the strongest matches, sorted by headcount.".to_string(),
        }],
    ));
    steps.push(ReplayStep {
        label: "closing summary",
        snapshot: stream,
        pending_echo: None,
    });

    steps
}

fn lookup_preview(partial_arguments: &str) -> ContentFragment {
    ContentFragment::ToolUse {
        index: 0,
        tool_name: "autocomplete".to_string(),
        partial_arguments: partial_arguments.to_string(),
    }
}

// The streamed assistant message is the one place the stream mutates in
// place rather than appending: its fragments grow across snapshots.
fn replace_last(stream: &mut Snapshot, message: StreamMessage) {
    stream.pop();
    stream.push(message);
}
