//! Provider-agnostic contract for the streamed research-agent conversation.
//!
//! This crate intentionally defines only the shared event-stream schema and
//! its decode boundary. It excludes transport details, reconciliation
//! policy, and presentation concerns.
//!
//! The schema is owned by the remote agent service and treated here as an
//! immutable contract: messages arrive in a totally ordered, append-only
//! sequence, and every snapshot handed to consumers is a full prefix view
//! of that sequence.

mod error;

pub use error::StreamDecodeError;

use serde::{Deserialize, Serialize};

/// Reserved message id for the locally-originated optimistic echo of a
/// human turn. Never persisted by the remote source of truth.
pub const PENDING_ECHO_ID: &str = "pending-echo";

/// Reported completion status of one tool invocation.
///
/// A missing status on the wire decodes as [`ToolStatus::Success`]; failed
/// invocations are always reported explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolStatus {
    #[default]
    Success,
    Failure,
}

impl ToolStatus {
    /// Returns true when the invocation completed successfully.
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// One sub-unit of an assistant message's streamed content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentFragment {
    /// Completed or still-growing assistant prose.
    Text { index: u32, text: String },
    /// A tool invocation that has started streaming its arguments.
    ToolUse {
        index: u32,
        tool_name: String,
        /// Possibly-incomplete JSON; grows monotonically across snapshots
        /// for the same fragment index.
        partial_arguments: String,
    },
}

impl ContentFragment {
    /// Returns the fragment's position index within its assistant message.
    #[must_use]
    pub fn index(&self) -> u32 {
        match self {
            Self::Text { index, .. } | Self::ToolUse { index, .. } => *index,
        }
    }
}

/// One element of the raw conversation stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum StreamMessage {
    /// A confirmed (or optimistically echoed) human turn.
    Human { id: String, content: String },
    /// A streamed assistant turn, fragment by fragment.
    Assistant {
        id: String,
        content: Vec<ContentFragment>,
    },
    /// The recorded result of one tool invocation.
    Tool {
        id: String,
        /// Empty when the invocation is not user-facing.
        #[serde(default)]
        tool_name: String,
        /// JSON-encoded result payload; empty on failure.
        #[serde(default)]
        content: String,
        #[serde(default)]
        status: ToolStatus,
    },
}

impl StreamMessage {
    /// Constructs a confirmed human turn.
    #[must_use]
    pub fn human(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Human {
            id: id.into(),
            content: content.into(),
        }
    }

    /// Constructs the synthetic optimistic echo of a submitted human turn.
    #[must_use]
    pub fn pending_echo(content: impl Into<String>) -> Self {
        Self::human(PENDING_ECHO_ID, content)
    }

    /// Constructs an assistant turn from ordered content fragments.
    #[must_use]
    pub fn assistant(id: impl Into<String>, content: Vec<ContentFragment>) -> Self {
        Self::Assistant {
            id: id.into(),
            content,
        }
    }

    /// Constructs a successful tool result carrying a JSON payload.
    #[must_use]
    pub fn tool(
        id: impl Into<String>,
        tool_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self::Tool {
            id: id.into(),
            tool_name: tool_name.into(),
            content: content.into(),
            status: ToolStatus::Success,
        }
    }

    /// Constructs a failed tool result. Failed invocations carry no payload.
    #[must_use]
    pub fn tool_failure(id: impl Into<String>, tool_name: impl Into<String>) -> Self {
        Self::Tool {
            id: id.into(),
            tool_name: tool_name.into(),
            content: String::new(),
            status: ToolStatus::Failure,
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Human { id, .. } | Self::Assistant { id, .. } | Self::Tool { id, .. } => id,
        }
    }

    /// Returns true for the locally-originated optimistic human echo.
    #[must_use]
    pub fn is_pending_echo(&self) -> bool {
        matches!(self, Self::Human { id, .. } if id == PENDING_ECHO_ID)
    }
}

/// Decodes one conversation snapshot serialized as a JSON array of messages.
pub fn decode_snapshot(json: &str) -> Result<Vec<StreamMessage>, StreamDecodeError> {
    serde_json::from_str(json).map_err(|source| StreamDecodeError::Snapshot { source })
}

/// Decodes a JSONL transcript, one message per non-empty line.
pub fn decode_snapshot_lines(text: &str) -> Result<Vec<StreamMessage>, StreamDecodeError> {
    let mut messages = Vec::new();
    for (position, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let message = serde_json::from_str(line).map_err(|source| StreamDecodeError::Line {
            line: position + 1,
            source,
        })?;
        messages.push(message);
    }
    Ok(messages)
}
