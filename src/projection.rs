//! Stateless projection from display records to rendering templates.
//!
//! Exists so the presentation layer needs no knowledge of tool identities
//! or payload shapes: it switches on [`RenderKind`] and prints the literal
//! text the record already carries.

use serde::Serialize;

use crate::reconcile::{DisplayRecord, RecordBody};

/// Closed set of rendering templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderKind {
    HumanBubble,
    AssistantText,
    ToolInProgress,
    ToolDone,
}

/// Maps a record to its rendering template. Total; cannot fail.
#[must_use]
pub fn render_kind(record: &DisplayRecord) -> RenderKind {
    match &record.body {
        RecordBody::Human { .. } => RenderKind::HumanBubble,
        RecordBody::AssistantText { .. } => RenderKind::AssistantText,
        RecordBody::ToolInProgress { .. } => RenderKind::ToolInProgress,
        RecordBody::ToolDone { .. } => RenderKind::ToolDone,
    }
}

/// Returns the literal text or caption the record renders.
#[must_use]
pub fn display_text(record: &DisplayRecord) -> &str {
    match &record.body {
        RecordBody::Human { content, .. } => content,
        RecordBody::AssistantText { text } => text,
        RecordBody::ToolInProgress { caption } | RecordBody::ToolDone { caption, .. } => caption,
    }
}
