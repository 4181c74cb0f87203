//! Merging of sub-results.
//!
//! A `None` operand stands for a sub-pattern that parsed to nothing (an empty
//! prefix or an empty group) and leaves the other operand untouched.

use crate::ast::Node;

/// Concatenates two results, extending an existing [`Node::Sequence`] rather
/// than nesting one inside another.
#[must_use]
pub fn sequence(lhs: Option<Node>, rhs: Option<Node>) -> Option<Node> {
    merge(lhs, rhs, Node::Sequence, |node| match node {
        Node::Sequence(children) => Ok(children),
        other => Err(other),
    })
}

/// Joins two results as alternatives, extending an existing
/// [`Node::Alternation`] rather than nesting one inside another.
#[must_use]
pub fn alternation(lhs: Option<Node>, rhs: Option<Node>) -> Option<Node> {
    merge(lhs, rhs, Node::Alternation, |node| match node {
        Node::Alternation(branches) => Ok(branches),
        other => Err(other),
    })
}

/// Wraps the contents of a parenthesized group as a one-branch
/// [`Node::Alternation`]. An alternation is already a group and is returned
/// as is.
#[must_use]
pub fn group(inner: Option<Node>) -> Option<Node> {
    inner.map(|node| match node {
        Node::Alternation(_) => node,
        other => Node::Alternation(vec![other]),
    })
}

fn merge(
    lhs: Option<Node>,
    rhs: Option<Node>,
    wrap: fn(Vec<Node>) -> Node,
    split: fn(Node) -> Result<Vec<Node>, Node>,
) -> Option<Node> {
    let (lhs, rhs) = match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => (lhs, rhs),
        (lhs, rhs) => return lhs.or(rhs),
    };

    let mut children = split(lhs).unwrap_or_else(|node| vec![node]);
    match split(rhs) {
        Ok(more) => children.extend(more),
        Err(node) => children.push(node),
    }
    Some(wrap(children))
}
