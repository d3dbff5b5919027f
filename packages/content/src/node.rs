//! # Rich Content Model
//!
//! A document is held twice: the raw payload exactly as the editing
//! surface produced it, and the parsed tree used for text extraction.
//! The raw form is what gets exported; the tree is what gets counted.

use crate::error::ContentError;
use crate::html;
use crate::visitor::TreeShape;
use serde::{Deserialize, Serialize};

/// Deepest element nesting [`RichContent::from_tree`] accepts.
///
/// Keeps the JSON form within serde_json's default nesting limit, so the
/// raw payload can always be read back with [`RichContent::from_json`].
pub const MAX_TREE_DEPTH: usize = 63;

/// One node of the authored document tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RichContentNode {
    /// Text leaf. An absent value extracts as the empty string.
    Text {
        #[serde(default)]
        value: Option<String>,
    },

    /// Element with ordered children. The tag is informational only.
    Element {
        tag: String,
        #[serde(default)]
        children: Vec<RichContentNode>,
    },
}

impl RichContentNode {
    pub fn text(value: impl Into<String>) -> Self {
        RichContentNode::Text {
            value: Some(value.into()),
        }
    }

    pub fn element(tag: impl Into<String>, children: Vec<RichContentNode>) -> Self {
        RichContentNode::Element {
            tag: tag.into(),
            children,
        }
    }

    /// Get children (empty for text leaves)
    pub fn children(&self) -> &[RichContentNode] {
        match self {
            RichContentNode::Text { .. } => &[],
            RichContentNode::Element { children, .. } => children,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, RichContentNode::Text { .. })
    }
}

// Children are detached onto a heap stack so dropping a deep tree never
// recurses.
impl Drop for RichContentNode {
    fn drop(&mut self) {
        let mut pending = match self {
            RichContentNode::Element { children, .. } if !children.is_empty() => {
                std::mem::take(children)
            }
            _ => return,
        };

        while let Some(mut node) = pending.pop() {
            if let RichContentNode::Element { children, .. } = &mut node {
                pending.append(children);
            }
        }
    }
}

/// Authored document: raw payload plus its parsed tree
///
/// Replaced wholesale on every edit, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichContent {
    raw: String,
    root: RichContentNode,
}

impl RichContent {
    /// Parse an HTML payload from the editing surface
    pub fn from_html(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let root = html::parse_body(&raw);
        Self { raw, root }
    }

    /// Build content from an already-structured tree.
    ///
    /// The raw payload becomes the tree's JSON serialization. Trees nested
    /// deeper than [`MAX_TREE_DEPTH`] are rejected.
    pub fn from_tree(root: RichContentNode) -> Result<Self, ContentError> {
        let depth = TreeShape::of(&root).depth;
        if depth > MAX_TREE_DEPTH {
            return Err(ContentError::TooDeep {
                depth,
                limit: MAX_TREE_DEPTH,
            });
        }

        let raw = serde_json::to_string(&root)?;
        Ok(Self { raw, root })
    }

    /// Parse a JSON tree payload
    pub fn from_json(raw: impl Into<String>) -> Result<Self, ContentError> {
        let raw = raw.into();
        let root = serde_json::from_str(&raw)?;
        Ok(Self { raw, root })
    }

    /// Empty document
    pub fn empty() -> Self {
        Self {
            raw: String::new(),
            root: RichContentNode::element("body", vec![]),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn root(&self) -> &RichContentNode {
        &self.root
    }

    /// True when the raw payload is empty
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl Default for RichContent {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_serializes_with_type_tag() {
        let node = RichContentNode::element("p", vec![RichContentNode::text("Hi")]);
        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["type"], "element");
        assert_eq!(json["tag"], "p");
        assert_eq!(json["children"][0]["type"], "text");
        assert_eq!(json["children"][0]["value"], "Hi");
    }

    #[test]
    fn test_from_json_accepts_missing_fields() {
        let content =
            RichContent::from_json(r#"{"type":"element","tag":"div","children":[{"type":"text"}]}"#)
                .unwrap();

        assert_eq!(
            content.root(),
            &RichContentNode::element("div", vec![RichContentNode::Text { value: None }])
        );
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let result = RichContent::from_json("{not json");
        assert!(matches!(result, Err(ContentError::Json(_))));
    }

    #[test]
    fn test_from_tree_keeps_json_as_raw() {
        let content = RichContent::from_tree(RichContentNode::text("x")).unwrap();
        assert_eq!(content.raw(), r#"{"type":"text","value":"x"}"#);
    }

    fn nested(depth: usize) -> RichContentNode {
        let mut node = RichContentNode::text("x");
        for _ in 0..depth {
            node = RichContentNode::element("div", vec![node]);
        }
        node
    }

    #[test]
    fn test_from_tree_round_trips_at_depth_limit() {
        let content = RichContent::from_tree(nested(MAX_TREE_DEPTH)).unwrap();
        let reread = RichContent::from_json(content.raw()).unwrap();

        assert_eq!(reread.raw(), content.raw());
    }

    #[test]
    fn test_from_tree_rejects_excessive_depth() {
        let result = RichContent::from_tree(nested(200_000));

        assert!(matches!(
            result,
            Err(ContentError::TooDeep {
                depth: 200_000,
                limit: MAX_TREE_DEPTH
            })
        ));
    }

    #[test]
    fn test_deep_tree_drops() {
        let node = nested(500_000);
        assert_eq!(node.children().len(), 1);
        drop(node);
    }

    #[test]
    fn test_empty_content() {
        let content = RichContent::default();
        assert!(content.is_empty());
        assert!(content.root().children().is_empty());
    }
}
