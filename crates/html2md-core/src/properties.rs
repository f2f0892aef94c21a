use proptest::prelude::*;

use crate::builder::{build, MarkupEvent};
use crate::node::Document;
use crate::options::Options;
use crate::render::{render, render_blocks};
use crate::utilities::{is_void, normalize_whitespace};

fn tag_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "div", "p", "span", "table", "thead", "tbody", "tr", "td", "th", "hr", "br", "script",
        "style", "meta", "b",
    ])
    .prop_map(str::to_string)
}

fn event_strategy() -> impl Strategy<Value = MarkupEvent> {
    prop_oneof![
        tag_strategy().prop_map(|tag| MarkupEvent::open(&tag)),
        tag_strategy().prop_map(|tag| MarkupEvent::close(&tag)),
        "[a-z |\n\t]{0,12}".prop_map(|text| MarkupEvent::text(&text)),
    ]
}

/// Text the tree should keep: every run that arrives while the innermost
/// open frame is not an ignored one
fn expected_visible_text(events: &[MarkupEvent], options: &Options) -> String {
    // one flag per open frame, true inside an ignored subtree
    let mut frames: Vec<bool> = Vec::new();
    let mut out = String::new();

    for event in events {
        match event {
            MarkupEvent::Open { tag, self_closing, .. } => {
                let tag = tag.to_ascii_lowercase();
                let ignored = frames.last() == Some(&true) || options.is_ignored(&tag);
                if !*self_closing && !is_void(&tag) {
                    frames.push(ignored);
                }
            }
            MarkupEvent::Close { tag } => {
                if !is_void(&tag.to_ascii_lowercase()) {
                    frames.pop();
                }
            }
            MarkupEvent::Text(text) => {
                if frames.last() != Some(&true) {
                    out.push_str(text);
                }
            }
        }
    }
    out
}

fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

proptest! {
    #[test]
    fn prop_any_event_stream_renders(events in prop::collection::vec(event_strategy(), 0..80)) {
        let options = Options::default();
        let doc = build(events, &options);
        let output = render(&doc, &options);
        prop_assert_eq!(output.trim(), output.as_str());
    }

    #[test]
    fn prop_tree_keeps_exactly_the_visible_text(
        events in prop::collection::vec(event_strategy(), 0..80)
    ) {
        let options = Options::default();
        let expected = expected_visible_text(&events, &options);
        let doc = build(events, &options);
        prop_assert_eq!(doc.text_content(doc.root()), expected);
    }

    #[test]
    fn prop_table_lines_have_equal_cell_counts(
        rows in prop::collection::vec(prop::collection::vec("[a-z ]{0,6}", 0..6), 1..8)
    ) {
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut events = vec![MarkupEvent::open("table")];
        for row in &rows {
            events.push(MarkupEvent::open("tr"));
            for cell in row {
                events.push(MarkupEvent::open("td"));
                events.push(MarkupEvent::text(cell));
                events.push(MarkupEvent::close("td"));
            }
            events.push(MarkupEvent::close("tr"));
        }
        events.push(MarkupEvent::close("table"));

        let options = Options::default();
        let output = render(&build(events, &options), &options);

        if columns == 0 {
            prop_assert_eq!(output, "");
        } else {
            let lines: Vec<&str> = output.lines().collect();
            prop_assert_eq!(lines.len(), rows.len() + 1);
            for line in lines {
                prop_assert_eq!(line.matches('|').count(), columns + 1);
            }
        }
    }

    #[test]
    fn prop_ignored_subtree_never_leaks(
        inner in prop::collection::vec(
            prop::sample::select(vec!["table", "tr", "td", "p", "div"]),
            0..10,
        )
    ) {
        let mut events = vec![MarkupEvent::open("script")];
        for tag in &inner {
            events.push(MarkupEvent::open(tag));
            events.push(MarkupEvent::text("secret"));
        }
        for tag in inner.iter().rev() {
            events.push(MarkupEvent::close(tag));
        }
        events.extend([
            MarkupEvent::close("script"),
            MarkupEvent::open("p"),
            MarkupEvent::text("Visible"),
            MarkupEvent::close("p"),
        ]);

        let options = Options::default();
        let output = render(&build(events, &options), &options);
        prop_assert_eq!(output, "Visible");
    }

    #[test]
    fn prop_stray_closes_keep_siblings(
        paragraphs in prop::collection::vec((word(), prop::option::of(tag_strategy())), 1..10)
    ) {
        let mut events = Vec::new();
        for (text, stray) in &paragraphs {
            events.push(MarkupEvent::open("p"));
            events.push(MarkupEvent::text(text));
            events.push(MarkupEvent::close("p"));
            if let Some(tag) = stray {
                events.push(MarkupEvent::close(tag));
            }
        }

        let options = Options::default();
        let output = render(&build(events, &options), &options);
        let expected: Vec<&str> = paragraphs.iter().map(|(t, _)| t.as_str()).collect();
        prop_assert_eq!(output, expected.join("\n\n"));
    }

    #[test]
    fn prop_text_blocks_are_whitespace_fixed_points(
        texts in prop::collection::vec("[a-z \n\t]{0,20}", 0..10)
    ) {
        let mut events = Vec::new();
        for text in &texts {
            events.push(MarkupEvent::open("div"));
            events.push(MarkupEvent::text(text));
            events.push(MarkupEvent::close("div"));
        }

        let options = Options::default();
        for block in render_blocks(&build(events, &options), &options) {
            prop_assert!(!block.is_empty());
            prop_assert_eq!(normalize_whitespace(&block), block.clone());

            let mut doc = Document::new();
            let root = doc.root();
            doc.append_text(root, &block);
            prop_assert_eq!(render(&doc, &options), block);
        }
    }
}
