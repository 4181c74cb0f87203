//! Random category leaves.
//!
//! A category key is only wrapped here. Looking up its contents, and failing
//! on names nobody registered, is left to whoever generates from the tree.

use crate::ast::Node;

/// Keys that may follow a backslash to name a reserved category.
pub const RESERVED_KEYS: [char; 4] = ['w', 's', 'd', 'c'];

/// The category a [`Node::Random`] key refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category<'a> {
    Word,      // \w
    Space,     // \s
    Digit,     // \d
    Character, // \c
    /// `[:name:]`
    Custom(&'a str),
}

impl<'a> Category<'a> {
    #[must_use]
    pub fn from_key(key: &'a str) -> Self {
        match key {
            "w" => Category::Word,
            "s" => Category::Space,
            "d" => Category::Digit,
            "c" => Category::Character,
            name => Category::Custom(name),
        }
    }
}

/// Wraps `key` in a [`Node::Random`] leaf.
#[must_use]
pub fn leaf(key: &str) -> Node {
    Node::Random(key.to_owned())
}

#[must_use]
pub fn is_reserved(key: char) -> bool {
    RESERVED_KEYS.contains(&key)
}

impl Node {
    /// Classifies the key of a [`Node::Random`]; `None` for any other node.
    #[must_use]
    pub fn category(&self) -> Option<Category<'_>> {
        match self {
            Node::Random(key) => Some(Category::from_key(key)),
            _ => None,
        }
    }
}
