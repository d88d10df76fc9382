//! End-to-end tests for the baseline finder: scan a batch, render each
//! element with a minimal writer implementing the padding contract, and check
//! the bytes.

use proptest::prelude::*;
use regalign::{push_spaces, AlignmentFinder, AlignmentState, Element, SimpleAlignment};

/// Minimal writer: tag, padded tag column, then each alignment entry in
/// order. Present attributes are written literally and padded; absent ones
/// become blanks via `append_padding`.
fn render(state: &dyn AlignmentState, element: &Element) -> String {
    let names: Vec<&str> = element.attribute_names().collect();
    let alignments = state.determine_alignment(&names).expect("alignment");
    let mut out = String::new();
    out.push('<');
    out.push_str(element.name());
    push_spaces(&mut out, state.element_padding_width(element));
    for alignment in &alignments {
        if alignment.is_padding_only() {
            alignment.append_padding(None, &mut out);
        } else if let Some(value) = element.value(alignment.name()) {
            out.push(' ');
            out.push_str(alignment.name());
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
            alignment.append_padding(Some(value), &mut out);
        } else {
            alignment.append_padding(None, &mut out);
        }
    }
    out.push_str("/>");
    out
}

/// Re-parse `name="value"` pairs out of a rendered element.
fn parse_attributes(rendered: &str) -> Vec<(String, String)> {
    let body = rendered.strip_suffix("/>").expect("closed element");
    let start = body.find(' ').map_or(body.len(), |i| i);
    let mut rest = &body[start..];
    let mut attrs = Vec::new();
    loop {
        rest = rest.trim_start_matches(' ');
        if rest.is_empty() {
            break;
        }
        let eq = rest.find("=\"").expect("attribute");
        let name = rest[..eq].to_string();
        rest = &rest[eq + 2..];
        let close = rest.find('"').expect("closing quote");
        attrs.push((name, rest[..close].to_string()));
        rest = &rest[close + 1..];
    }
    attrs
}

#[test]
fn renders_scenario_batch_byte_exact() {
    let batch = vec![
        Element::new("enum").attr("a", "1").attr("b", "22"),
        Element::new("enum").attr("a", "333"),
    ];
    let state = SimpleAlignment::new().find_alignment(&batch).unwrap();

    assert_eq!(render(state.as_ref(), &batch[0]), "<enum a=\"1\"   b=\"22\"/>");
    assert_eq!(render(state.as_ref(), &batch[1]), "<enum a=\"333\"/>");
}

#[test]
fn aligned_columns_start_at_the_same_offset() {
    let batch = vec![
        Element::new("enum")
            .attr("value", "1")
            .attr("name", "XR_A")
            .attr("comment", "short"),
        Element::new("enum")
            .attr("value", "4000")
            .attr("name", "XR_LONGER_ONE")
            .attr("comment", "x"),
    ];
    let state = SimpleAlignment::new().find_alignment(&batch).unwrap();
    let first = render(state.as_ref(), &batch[0]);
    let second = render(state.as_ref(), &batch[1]);
    assert_eq!(first.find(" name=\""), second.find(" name=\""));
}

#[test]
fn extra_width_moves_following_columns() {
    let batch = vec![Element::new("enum")
        .attr("value", "1")
        .attr("name", "XR_A")];
    let plain = SimpleAlignment::new().find_alignment(&batch).unwrap();
    let widened = SimpleAlignment::new()
        .extra_width("value", 2)
        .find_alignment(&batch)
        .unwrap();
    let plain_out = render(plain.as_ref(), &batch[0]);
    let widened_out = render(widened.as_ref(), &batch[0]);
    assert_eq!(
        widened_out.find(" name=\"").unwrap(),
        plain_out.find(" name=\"").unwrap() + 2
    );
}

#[test]
fn mixed_tag_names_share_the_attribute_columns() {
    let batch = vec![
        Element::new("member").attr("values", "X").attr("name", "a"),
        Element::new("comment"),
    ];
    let state = SimpleAlignment::new().find_alignment(&batch).unwrap();
    let first = render(state.as_ref(), &batch[0]);
    let second = render(state.as_ref(), &batch[1]);
    // both tag columns are 7 wide
    assert!(first.starts_with("<member "));
    assert!(second.starts_with("<comment"));
}

proptest! {
    /// Rendering never changes attribute values, only inserts whitespace.
    #[test]
    fn reparse_recovers_original_values(
        values in prop::collection::vec(("[a-z]{1,3}", "[a-z0-9]{1,8}"), 1..6),
        extra in prop::collection::vec(("[m-z]{4}", "[a-z0-9]{1,5}"), 0..3),
    ) {
        let mut batch = Vec::new();
        let mut el = Element::new("enum");
        for (name, value) in &values {
            el.set_attr(name, value);
        }
        batch.push(el);
        let mut el = Element::new("enum");
        for (name, value) in &extra {
            el.set_attr(name, value);
        }
        batch.push(el);

        let state = SimpleAlignment::new().find_alignment(&batch).unwrap();
        for element in &batch {
            let rendered = render(state.as_ref(), element);
            let mut parsed = parse_attributes(&rendered);
            let mut expected: Vec<(String, String)> = element.attributes().to_vec();
            parsed.sort();
            expected.sort();
            prop_assert_eq!(parsed, expected);
        }
    }
}
