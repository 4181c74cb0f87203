use crate::ast::{Node, Quantifier};

/// Where a trailing quantifier attaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// The last child of a sequence, or the last branch of an alternation.
    LastElement,
    /// The whole quantified body.
    Whole,
}

impl Binding {
    /// Decides the binding from the text of the quantified body, before it
    /// is parsed.
    #[must_use]
    pub fn for_body(body: &str) -> Self {
        if !body.contains(['(', ')']) {
            Binding::LastElement
        } else if body.starts_with('(') && body.ends_with(')') {
            Binding::Whole
        } else if body.ends_with(')') || body.chars().next_back().is_some_and(|c| c != ')') {
            Binding::LastElement
        } else {
            Binding::Whole
        }
    }
}

/// Attaches `quantifier` to the parsed `node` of the quantified `body`.
#[must_use]
pub fn bind(body: &str, node: Node, quantifier: Quantifier) -> Node {
    match (Binding::for_body(body), node) {
        (Binding::LastElement, Node::Sequence(children)) => {
            Node::Sequence(quantify_last(children, quantifier))
        }
        (Binding::LastElement, Node::Alternation(branches)) => {
            Node::Alternation(quantify_last(branches, quantifier))
        }
        (_, node) => Node::quantify(node, quantifier),
    }
}

fn quantify_last(mut nodes: Vec<Node>, quantifier: Quantifier) -> Vec<Node> {
    if let Some(last) = nodes.pop() {
        nodes.push(Node::quantify(last, quantifier));
    }
    nodes
}
