//! HTML payload parsing (editing surface → RichContentNode)
//!
//! Runs the HTML5 tree builder over the payload and keeps the `<body>`
//! subtree. Malformed markup is recovered by the parser, so this never fails.

use crate::node::RichContentNode;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use tracing::debug;

/// Parse a payload and return its `<body>` element as a tree
pub fn parse_body(raw: &str) -> RichContentNode {
    debug!(bytes = raw.len(), "Parsing HTML payload");

    // The editing surface runs no scripts, so <noscript> holds real markup
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    let dom = parse_document(RcDom::default(), opts).one(raw);

    find_element(&dom.document, "body")
        .and_then(|body| convert(&body))
        .unwrap_or_else(|| RichContentNode::element("body", vec![]))
}

fn find_element(root: &Handle, local_name: &str) -> Option<Handle> {
    let mut stack = vec![root.clone()];

    while let Some(handle) = stack.pop() {
        let found = matches!(
            &handle.data,
            NodeData::Element { name, .. } if &*name.local == local_name
        );
        if found {
            return Some(handle);
        }
        stack.extend(handle.children.borrow().iter().rev().cloned());
    }

    None
}

/// An element whose children are still being converted
struct Frame {
    tag: String,
    // Reversed, so `pop` yields the next child in document order
    pending: Vec<Handle>,
    built: Vec<RichContentNode>,
}

impl Frame {
    fn open(handle: &Handle) -> Option<Self> {
        match &handle.data {
            NodeData::Element { name, .. } => Some(Self {
                tag: name.local.to_string(),
                pending: handle.children.borrow().iter().rev().cloned().collect(),
                built: Vec::new(),
            }),
            _ => None,
        }
    }
}

/// Convert an element subtree. Comments, doctypes and processing
/// instructions are dropped.
fn convert(root: &Handle) -> Option<RichContentNode> {
    let mut stack = vec![Frame::open(root)?];

    loop {
        let next = stack.last_mut()?.pending.pop();

        match next {
            Some(child) => match &child.data {
                NodeData::Text { contents } => {
                    let text = RichContentNode::text(&**contents.borrow());
                    stack.last_mut()?.built.push(text);
                }
                NodeData::Element { .. } => stack.extend(Frame::open(&child)),
                _ => {}
            },
            None => {
                let done = stack.pop()?;
                let node = RichContentNode::element(done.tag, done.built);
                match stack.last_mut() {
                    Some(parent) => parent.built.push(node),
                    None => return Some(node),
                }
            }
        }
    }
}
