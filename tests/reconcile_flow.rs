use agent_stream::{ContentFragment, StreamMessage};
use transcript_engine::{
    display_text, reconcile, render_kind, OutcomeCategory, RecordBody, RenderKind,
};

fn text_fragment(index: u32, text: &str) -> ContentFragment {
    ContentFragment::Text {
        index,
        text: text.to_string(),
    }
}

fn tool_use_fragment(index: u32, tool_name: &str, partial_arguments: &str) -> ContentFragment {
    ContentFragment::ToolUse {
        index,
        tool_name: tool_name.to_string(),
        partial_arguments: partial_arguments.to_string(),
    }
}

#[test]
fn streaming_lookup_turn_renders_human_bubble_and_dynamic_caption() {
    let messages = vec![
        StreamMessage::human("m1", "Find me banks"),
        StreamMessage::assistant(
            "m2",
            vec![tool_use_fragment(0, "autocomplete", r#"{"field":"banks","lim"#)],
        ),
    ];

    let records = reconcile(&messages, None);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "m1");
    assert_eq!(
        records[0].body,
        RecordBody::Human {
            content: "Find me banks".to_string(),
            pending: false,
        }
    );
    assert_eq!(records[1].id, "m2/0");
    assert_eq!(
        records[1].body,
        RecordBody::ToolInProgress {
            caption: "Thinking about banks".to_string(),
        }
    );
}

#[test]
fn reconcile_is_deterministic_and_idempotent() {
    let messages = vec![
        StreamMessage::human("m1", "Who bought Globex?"),
        StreamMessage::assistant(
            "m2",
            vec![
                text_fragment(0, "Let me check."),
                tool_use_fragment(1, "session_fetch_events", "{}"),
            ],
        ),
        StreamMessage::tool("m3", "session_fetch_events", r#"{"total_events":2}"#),
    ];

    let first = reconcile(&messages, Some("Who bought Globex?"));
    let second = reconcile(&messages, Some("Who bought Globex?"));

    assert_eq!(first, second);
}

#[test]
fn output_preserves_input_order_across_roles() {
    let messages = vec![
        StreamMessage::human("m1", "Find fintech companies in Berlin"),
        StreamMessage::assistant("m2", vec![text_fragment(0, "Searching now.")]),
        StreamMessage::tool(
            "m3",
            "create_search_session",
            r#"{"session_details":{"total_results":7}}"#,
        ),
        StreamMessage::assistant("m4", vec![text_fragment(0, "Found a few candidates.")]),
        StreamMessage::human("m5", "Enrich the first ten"),
    ];

    let records = reconcile(&messages, None);

    let ids: Vec<&str> = records.iter().map(|record| record.id.as_str()).collect();
    assert_eq!(ids, vec!["m1", "m2/0", "m3", "m4/0", "m5"]);
}

#[test]
fn assistant_fragments_keep_stable_per_index_record_keys() {
    let messages = vec![StreamMessage::assistant(
        "m2",
        vec![
            text_fragment(0, "First thought."),
            text_fragment(1, "Second thought."),
            tool_use_fragment(2, "session_enrich", "{}"),
        ],
    )];

    let records = reconcile(&messages, None);

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].id, "m2/0");
    assert_eq!(records[1].id, "m2/1");
    assert_eq!(records[2].id, "m2/2");
}

#[test]
fn completed_tool_records_carry_interpreted_outcomes() {
    let messages = vec![
        StreamMessage::tool(
            "m3",
            "create_company_research_session",
            r#"{"session_details":{"total_results":0}}"#,
        ),
        StreamMessage::tool_failure("m4", "session_enrich"),
    ];

    let records = reconcile(&messages, None);

    assert_eq!(
        records[0].body,
        RecordBody::ToolDone {
            caption: "No companies found".to_string(),
            category: OutcomeCategory::Warning,
        }
    );
    assert_eq!(
        records[1].body,
        RecordBody::ToolDone {
            caption: "Something went wrong".to_string(),
            category: OutcomeCategory::Warning,
        }
    );
}

#[test]
fn projection_covers_every_reconciled_record() {
    let messages = vec![
        StreamMessage::human("m1", "Find me banks"),
        StreamMessage::assistant("m2", vec![text_fragment(0, "On it.")]),
        StreamMessage::tool("m3", "autocomplete", r#"{"filters":{}}"#),
        StreamMessage::assistant("m4", vec![tool_use_fragment(0, "create_search_session", "{")]),
    ];

    let records = reconcile(&messages, None);
    let kinds: Vec<RenderKind> = records.iter().map(render_kind).collect();

    assert_eq!(
        kinds,
        vec![
            RenderKind::HumanBubble,
            RenderKind::AssistantText,
            RenderKind::ToolDone,
            RenderKind::ToolInProgress,
        ]
    );
    assert_eq!(display_text(&records[0]), "Find me banks");
    assert_eq!(display_text(&records[2]), "Created search filters");
    assert_eq!(display_text(&records[3]), "Searching for companies");
}
