//! Character class expansion.

use crate::ast::{ClassItem, Node};

/// Builds a [`Node::CharClass`] from a class body with its brackets removed.
///
/// Every `x-y` becomes one [`ClassItem::Range`]; everything else becomes one
/// [`ClassItem::Literal`] per character. An empty body gives an empty class,
/// which an interpreter has to reject or skip.
#[must_use]
pub fn build(body: &str) -> Node {
    let chars: Vec<char> = body.chars().collect();
    let mut items = Vec::with_capacity(chars.len());
    collect(&chars, &mut items);
    Node::CharClass(items)
}

fn collect(chars: &[char], items: &mut Vec<ClassItem>) {
    let Some(at) = chars.windows(3).position(|window| window[1] == '-') else {
        items.extend(chars.iter().copied().map(ClassItem::Literal));
        return;
    };

    collect(&chars[..at], items);
    items.push(ClassItem::Range(chars[at], chars[at + 2]));
    collect(&chars[at + 3..], items);
}
