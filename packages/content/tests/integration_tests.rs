//! Integration tests for content crate

use scribe_content::{
    extract, normalize, plain_text, ContentError, RichContent, RichContentNode, TreeShape,
};

#[test]
fn test_quill_style_payload() {
    let content = RichContent::from_html(concat!(
        "<h2>Notes</h2><ol><li>first</li><li>second</li></ol>",
        "<p><a href=\"https://x.y\">link</a>.</p>",
    ));

    assert_eq!(plain_text(&content), "Notes first second link .");
}

#[test]
fn test_blank_editor_payload_has_no_text() {
    let content = RichContent::from_html("<p><br></p>");

    assert!(!content.is_empty());
    assert_eq!(plain_text(&content), "");
}

#[test]
fn test_html_and_json_trees_extract_alike() {
    let html = RichContent::from_html("<p>same <em>words</em></p>");
    let json = RichContent::from_tree(html.root().clone()).unwrap();

    assert_eq!(plain_text(&html), plain_text(&json));
    assert_ne!(html.raw(), json.raw());
}

#[test]
fn test_normalize_after_extract_only_once() {
    let node = RichContentNode::element(
        "body",
        vec![
            RichContentNode::text("a\n"),
            RichContentNode::text("\n b"),
        ],
    );

    let raw = extract(&node);
    assert_eq!(raw, "a\n \n b");
    assert_eq!(normalize(&raw), "a b");
}

#[test]
fn test_shape_of_parsed_payload() {
    let content = RichContent::from_html("<p>one</p><p>two <b>three</b></p>");
    let shape = TreeShape::of(content.root());

    // body + 2 p + b
    assert_eq!(shape.elements, 4);
    assert_eq!(shape.text_leaves, 3);
}

#[test]
fn test_deep_structured_tree() {
    let mut node = RichContentNode::text("deep");
    for _ in 0..100_000 {
        node = RichContentNode::element("blockquote", vec![node]);
    }

    assert_eq!(normalize(&extract(&node)), "deep");
    assert_eq!(TreeShape::of(&node).depth, 100_000);
    assert!(matches!(
        RichContent::from_tree(node),
        Err(ContentError::TooDeep { .. })
    ));
}
