//! Stream classification and reconciliation for research-agent transcripts.
//!
//! The engine consumes a raw, append-only, partially-ordered conversation
//! stream (human turns, streamed assistant fragments, tool results) and
//! folds each full snapshot of it into a stable, de-duplicated list of
//! display records, plus short status captions for in-flight and completed
//! tool invocations.
//!
//! Invariant: single suppression gate. Only [`reconcile::reconcile`]
//! decides which stream entries reach the transcript.
//!
//! # Public API Overview
//! - Fold a snapshot with [`reconcile`] and walk the resulting
//!   [`DisplayRecord`] list.
//! - Project records onto rendering templates with [`render_kind`] and
//!   [`display_text`]; the presentation layer needs no knowledge of tool
//!   identities or payload shapes.
//! - Caption helpers ([`progress_caption`], [`interpret`],
//!   [`extract_string_field`]) are pure and total: malformed or unexpected
//!   input degrades to a defined fallback caption, never an error.
//!
//! The raw event schema lives in the `agent_stream` contract crate.

pub mod catalog;
pub mod outcome;
pub mod partial_json;
pub mod projection;
pub mod reconcile;
pub mod tools;

/// In-progress caption lookup.
pub use crate::catalog::progress_caption;

/// Completed-tool outcome interpretation.
pub use crate::outcome::{interpret, OutcomeCategory, ToolOutcome};

/// Best-effort field extraction from partially-streamed arguments.
pub use crate::partial_json::extract_string_field;

/// Stateless record-to-template projection.
pub use crate::projection::{display_text, render_kind, RenderKind};

/// The stateful fold and its output model.
pub use crate::reconcile::{reconcile, DisplayRecord, RecordBody};

/// Closed enumeration of the recognized remote tool surface.
pub use crate::tools::ToolIdentity;
