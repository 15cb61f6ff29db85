//! The stateful core: folds one conversation snapshot into display records.

use agent_stream::{ContentFragment, StreamMessage, PENDING_ECHO_ID};
use serde::Serialize;

use crate::catalog::progress_caption;
use crate::outcome::{interpret, OutcomeCategory};
use crate::tools::ToolIdentity;

/// One reconciled, renderable unit.
///
/// Records are produced fresh on every fold and never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    /// Stable render key: the message id, or `"{message_id}/{fragment_index}"`
    /// for per-fragment records, so a fragment keeps its key across partial
    /// updates to later fragments.
    pub id: String,
    pub body: RecordBody,
}

/// Payload of one display record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordBody {
    Human {
        content: String,
        /// True only for the optimistic echo of a not-yet-confirmed turn.
        pending: bool,
    },
    AssistantText {
        text: String,
    },
    ToolInProgress {
        caption: String,
    },
    ToolDone {
        caption: String,
        category: OutcomeCategory,
    },
}

/// Folds one snapshot of the conversation stream into display records.
///
/// `pending_echo` is the caller-owned optimistic copy of a submitted human
/// turn. It joins the fold as a synthetic trailing human message and is
/// suppressed as soon as a confirmed turn with the same content has rendered
/// ahead of it; clearing the value once the confirmed echo is observed stays
/// the caller's responsibility.
///
/// The fold is a pure function of its two inputs: output order preserves
/// input order, suppression only removes records, and re-running it on the
/// same snapshot yields the same list. Both positional policies (the
/// in-progress preview gate and the consecutive field-lookup collapse) are
/// lookahead predicates over the immutable snapshot, never stored flags.
#[must_use]
pub fn reconcile(messages: &[StreamMessage], pending_echo: Option<&str>) -> Vec<DisplayRecord> {
    let echo = pending_echo.map(|content| StreamMessage::pending_echo(content));
    let mut snapshot: Vec<&StreamMessage> = messages.iter().collect();
    if let Some(echo) = echo.as_ref() {
        snapshot.push(echo);
    }

    let mut records = Vec::new();
    let mut last_human_content: Option<&str> = None;

    for (position, message) in snapshot.iter().enumerate() {
        let is_last_message = position + 1 == snapshot.len();

        match message {
            StreamMessage::Human { id, content } => {
                let pending = id == PENDING_ECHO_ID;
                if pending && last_human_content == Some(content.as_str()) {
                    tracing::debug!("suppressing confirmed or stale pending echo");
                    continue;
                }

                last_human_content = Some(content);
                records.push(DisplayRecord {
                    id: id.clone(),
                    body: RecordBody::Human {
                        content: content.clone(),
                        pending,
                    },
                });
            }
            StreamMessage::Assistant { id, content } => {
                for (fragment_position, fragment) in content.iter().enumerate() {
                    match fragment {
                        ContentFragment::Text { index, text } => {
                            records.push(DisplayRecord {
                                id: fragment_record_id(id, *index),
                                body: RecordBody::AssistantText { text: text.clone() },
                            });
                        }
                        ContentFragment::ToolUse {
                            index,
                            tool_name,
                            partial_arguments,
                        } => {
                            // A preview is only live while nothing newer
                            // exists anywhere in the snapshot.
                            let still_streaming =
                                is_last_message && fragment_position + 1 == content.len();
                            if !still_streaming {
                                tracing::trace!(
                                    tool_name = %tool_name,
                                    "suppressing superseded tool-use preview"
                                );
                                continue;
                            }

                            records.push(DisplayRecord {
                                id: fragment_record_id(id, *index),
                                body: RecordBody::ToolInProgress {
                                    caption: progress_caption(tool_name, partial_arguments),
                                },
                            });
                        }
                    }
                }
            }
            StreamMessage::Tool {
                id,
                tool_name,
                content,
                status,
            } => {
                if tool_name.is_empty() {
                    continue;
                }

                if collapsed_into_next_lookup(&snapshot, position, tool_name) {
                    tracing::debug!("suppressing intermediate filter-refinement result");
                    continue;
                }

                let outcome = interpret(tool_name, content, status.is_success());
                records.push(DisplayRecord {
                    id: id.clone(),
                    body: RecordBody::ToolDone {
                        caption: outcome.caption,
                        category: outcome.category,
                    },
                });
            }
        }
    }

    records
}

fn fragment_record_id(message_id: &str, index: u32) -> String {
    format!("{message_id}/{index}")
}

/// True when a field-lookup result is immediately followed by another
/// field-lookup result: only the final step of a consecutive refinement run
/// is shown.
fn collapsed_into_next_lookup(
    snapshot: &[&StreamMessage],
    position: usize,
    tool_name: &str,
) -> bool {
    if !ToolIdentity::parse(tool_name).is_some_and(ToolIdentity::is_field_lookup) {
        return false;
    }

    matches!(
        snapshot.get(position + 1),
        Some(StreamMessage::Tool {
            tool_name: next_name,
            ..
        }) if ToolIdentity::parse(next_name).is_some_and(ToolIdentity::is_field_lookup)
    )
}
