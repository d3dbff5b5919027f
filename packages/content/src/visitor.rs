use crate::node::RichContentNode;

/// Visitor pattern for traversing content trees immutably
///
/// The walk is driven by [`walk`] with an explicit stack, so arbitrarily
/// deep trees never exhaust the call stack. Override the callbacks you
/// need; each defaults to doing nothing.
pub trait Visitor {
    fn enter_element(&mut self, _tag: &str) {}

    fn leave_element(&mut self, _tag: &str) {}

    fn visit_text(&mut self, _value: Option<&str>) {
        // Leaf node, no children to walk
    }
}

enum Step<'a> {
    Enter(&'a RichContentNode),
    Leave(&'a str),
}

/// Walk a tree depth-first in document order
pub fn walk<V: Visitor>(visitor: &mut V, root: &RichContentNode) {
    let mut stack = vec![Step::Enter(root)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(RichContentNode::Text { value }) => visitor.visit_text(value.as_deref()),
            Step::Enter(RichContentNode::Element { tag, children }) => {
                visitor.enter_element(tag);
                stack.push(Step::Leave(tag));
                stack.extend(children.iter().rev().map(Step::Enter));
            }
            Step::Leave(tag) => visitor.leave_element(tag),
        }
    }
}

/// Node counts for a tree, reported alongside content change events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeShape {
    pub elements: usize,
    pub text_leaves: usize,
    pub depth: usize,
    current_depth: usize,
}

impl TreeShape {
    pub fn of(node: &RichContentNode) -> Self {
        let mut shape = Self::default();
        walk(&mut shape, node);
        shape
    }
}

impl Visitor for TreeShape {
    fn enter_element(&mut self, _tag: &str) {
        self.elements += 1;
        self.current_depth += 1;
        self.depth = self.depth.max(self.current_depth);
    }

    fn leave_element(&mut self, _tag: &str) {
        self.current_depth -= 1;
    }

    fn visit_text(&mut self, _value: Option<&str>) {
        self.text_leaves += 1;
    }
}
