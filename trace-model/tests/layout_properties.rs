//! Layout and selection properties over generated span trees.

use proptest::prelude::*;
use trace_model::{
    flatten, layout_children, layout_tree, parse_root_span, Selection, Span, SpanDetail, SpanKind,
    SpanPath, StatusCode, TraceTree,
};

fn kind_strategy() -> impl Strategy<Value = SpanKind> {
    prop_oneof![
        Just(SpanKind::Chain),
        Just(SpanKind::Agent),
        Just(SpanKind::Tool),
        Just(SpanKind::Llm),
        Just(SpanKind::Unspecified),
    ]
}

/// One span without children. Some spans have no times at all, some end
/// before they start and some have no end.
fn span_strategy() -> impl Strategy<Value = Span> {
    (
        kind_strategy(),
        prop::option::of(-50_i64..500),
        prop::option::of(-10_i64..500),
        any::<bool>(),
        0_u32..10_000,
    )
        .prop_map(|(kind, start, length, failed, id)| Span {
            name: Some(format!("span-{id}")),
            span_kind: kind,
            start_time_ms: start.map(|start| start as f64),
            end_time_ms: start.zip(length).map(|(start, length)| (start + length) as f64),
            status_code: if failed {
                StatusCode::Error
            } else {
                StatusCode::Success
            },
            ..Span::default()
        })
}

fn tree_strategy() -> impl Strategy<Value = Span> {
    span_strategy().prop_recursive(4, 64, 5, |inner| {
        (span_strategy(), prop::collection::vec(inner, 0..5)).prop_map(|(mut span, children)| {
            span.child_spans = children;
            span
        })
    })
}

fn all_spans(root: &Span) -> Vec<&Span> {
    let mut out = vec![root];
    let mut idx = 0;
    while idx < out.len() {
        let span = out[idx];
        out.extend(span.child_spans.iter());
        idx += 1;
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn child_boxes_stay_inside_parent(root in tree_strategy()) {
        for span in all_spans(&root) {
            for placed in layout_children(span) {
                prop_assert!((0.0..=1.0).contains(&placed.offset), "offset {:?}", placed);
                prop_assert!(placed.width >= 0.0, "width {:?}", placed);
                prop_assert!(placed.offset + placed.width <= 1.0 + 1e-9, "box {:?}", placed);
            }
        }
    }

    #[test]
    fn offsets_never_decrease_with_start_time(root in tree_strategy()) {
        for span in all_spans(&root) {
            let mut timed: Vec<(f64, f64)> = layout_children(span)
                .into_iter()
                .filter_map(|placed| {
                    span.child_spans[placed.index]
                        .start_time_ms
                        .map(|start| (start, placed.offset))
                })
                .collect();
            timed.sort_by(|a, b| a.0.total_cmp(&b.0));
            prop_assert!(
                timed.windows(2).all(|pair| pair[0].1 <= pair[1].1),
                "offsets out of order: {:?}",
                timed
            );
        }
    }

    #[test]
    fn absolute_extents_nest_within_root(root in tree_strategy()) {
        let extents = layout_tree(&root).absolute_extents();
        prop_assert_eq!(extents.len(), root.span_count());
        for (path, start, end) in extents {
            prop_assert!(start >= -1e-9 && end <= 1.0 + 1e-9, "{}: {}..{}", path, start, end);
            prop_assert!(root.descendant(&path).is_some());
        }
    }

    #[test]
    fn selecting_any_span_shows_its_own_metadata(root in tree_strategy()) {
        let mut selection = Selection::default();
        for row in flatten(&root) {
            selection.select(row.path.clone());
            let (path, span) = selection.resolve(&root);
            prop_assert_eq!(&path, &row.path);

            let detail = SpanDetail::from_span(span);
            prop_assert_eq!(&detail.title, &row.name);
            prop_assert_eq!(detail.general_value("Name"), span.name.as_deref());
            prop_assert_eq!(detail.general_value("Kind"), Some(row.kind.label()));
            prop_assert_eq!(detail.general_value("Status"), Some(row.status.label()));
            let children = row.child_count.to_string();
            prop_assert_eq!(detail.general_value("Children"), Some(children.as_str()));
        }
    }

    #[test]
    fn arbitrary_dumps_never_panic(input in ".{0,64}") {
        let _ = parse_root_span(&input);
        let _ = TraceTree::new(input).parse();
    }
}

#[test]
fn malformed_dumps_are_rejected() {
    let inputs = [
        "",
        "{",
        "}",
        "[]",
        "\"just a string\"",
        "{\"child_spans\": 3}",
        "{\"child_spans\": [1, 2]}",
        "{\"start_time_ms\": {}}",
        "{\"results\": \"nope\"}",
        "nul",
    ];
    for input in inputs {
        assert!(parse_root_span(input).is_err(), "accepted {input:?}");
        assert!(TraceTree::new(input).parse().is_err());
    }
}

#[test]
fn stale_selection_falls_back_to_root() {
    let root = parse_root_span(r#"{"name": "root", "child_spans": [{"name": "only"}]}"#).unwrap();
    let mut selection = Selection::default();
    selection.select(SpanPath::new(vec![usize::MAX]));
    let (path, span) = selection.resolve(&root);
    assert!(path.is_root());
    assert_eq!(SpanDetail::from_span(span).title, root.display_name());
}
