use super::Quantifier;
use std::fmt;

/// A node of a generative pattern tree.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Node {
    /// Children are generated in order and concatenated.
    Sequence(Vec<Node>),
    /// One child is chosen uniformly at random.
    Alternation(Vec<Node>),
    /// The item is generated as many times as the quantifier asks for.
    Quantify {
        item: Box<Node>,
        quantifier: Quantifier,
    },
    /// One item is chosen uniformly. Empty only for an empty class body.
    CharClass(Vec<ClassItem>),
    /// Emitted verbatim.
    Literal(String),
    /// Unresolved random category key (`w`, `d`, or a custom name).
    Random(String),
}

/// A member of a [`Node::CharClass`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClassItem {
    Literal(char),
    Range(char, char), // inclusive
}

impl Node {
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Node::Literal(value.into())
    }

    #[must_use]
    pub fn quantify(item: Node, quantifier: Quantifier) -> Self {
        Node::Quantify {
            item: Box::new(item),
            quantifier,
        }
    }
}

/// Renders the tree as an s-expression, e.g.
/// `(SEQUENCE,(LITERAL,a),(QUANTIFY,(LITERAL,b),{3}))`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Sequence(children) => list(f, "SEQUENCE", children),
            Node::Alternation(children) => list(f, "ALTERNATION", children),
            Node::Quantify { item, quantifier } => write!(f, "(QUANTIFY,{item},{quantifier})"),
            Node::CharClass(items) => list(f, "CHARCLASS", items),
            Node::Literal(value) => write!(f, "(LITERAL,{value})"),
            Node::Random(key) => write!(f, "(RANDOM,{key})"),
        }
    }
}

impl fmt::Display for ClassItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassItem::Literal(c) => write!(f, "(LITERAL,{c})"),
            ClassItem::Range(low, high) => write!(f, "(RANGE,(LITERAL,{low}),(LITERAL,{high}))"),
        }
    }
}

fn list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, tag: &str, items: &[T]) -> fmt::Result {
    write!(f, "({tag}")?;
    for item in items {
        write!(f, ",{item}")?;
    }
    f.write_str(")")
}
