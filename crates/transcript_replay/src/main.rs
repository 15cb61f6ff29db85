use std::env;
use std::fs;
use std::io;

use tracing_subscriber::EnvFilter;
use transcript_engine::{display_text, reconcile, render_kind, DisplayRecord, RenderKind};
use transcript_replay::research_session_script;

/// Optional pending-echo content applied when replaying a snapshot file.
const PENDING_ECHO_ENV_VAR: &str = "TRANSCRIPT_REPLAY_PENDING_ECHO";

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match env::args().nth(1) {
        Some(path) => replay_file(&path),
        None => {
            replay_script();
            Ok(())
        }
    }
}

/// Replays a snapshot file: either a JSON array of messages or a JSONL
/// transcript with one message per line.
fn replay_file(path: &str) -> io::Result<()> {
    let text = fs::read_to_string(path)?;
    let messages = if text.trim_start().starts_with('[') {
        agent_stream::decode_snapshot(&text)
    } else {
        agent_stream::decode_snapshot_lines(&text)
    }
    .map_err(io::Error::other)?;

    let pending_echo = pending_echo_from_env();
    print_records(&reconcile(&messages, pending_echo.as_deref()));
    Ok(())
}

fn replay_script() {
    for step in research_session_script() {
        println!("--- {}", step.label);
        print_records(&reconcile(&step.snapshot, step.pending_echo));
        println!();
    }
}

fn pending_echo_from_env() -> Option<String> {
    let value = env::var(PENDING_ECHO_ENV_VAR).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn print_records(records: &[DisplayRecord]) {
    for record in records {
        let text = display_text(record);
        match render_kind(record) {
            RenderKind::HumanBubble => println!("> {text}"),
            RenderKind::AssistantText => println!("{text}"),
            RenderKind::ToolInProgress => println!("~ {text}"),
            RenderKind::ToolDone => println!("* {text}"),
        }
    }
}
