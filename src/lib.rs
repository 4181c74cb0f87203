//! Compiles generative patterns into trees.
//!
//! A pattern is regular expression syntax plus random category tokens (`\w`,
//! `\d`, `\s`, `\c`, `[:name:]`). Instead of matching strings, the resulting
//! [`Node`] tree describes how to produce random strings fitting the pattern.
//! Sampling from the tree is left to the caller.

#![warn(clippy::pedantic, rust_2018_idioms)]
#![allow(clippy::missing_errors_doc)]

pub mod ast;
pub mod charset;
pub mod parser;
pub mod random;
pub mod scan;
pub mod validate;

pub use self::{
    ast::{ClassItem, Node, Quantifier, Symbol},
    parser::{Parser, parse},
    random::Category,
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The pattern is not valid regular expression syntax, or could not be
    /// decomposed.
    #[error("invalid pattern syntax in {pattern:?}: {cause}")]
    InvalidPatternSyntax { pattern: String, cause: Cause },
}

/// Why a pattern was rejected.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Cause {
    /// The regular expression parser rejected the pattern.
    #[error("{0}")]
    Regex(String),

    /// No production matched this part of the pattern.
    #[error("no production matches {remainder:?}")]
    Unmatched { remainder: String },

    /// A quantifier token is none of `*`, `+`, `?`, their lazy forms, `{n}`
    /// or `{m,n}`.
    #[error("invalid quantifier token {0:?}")]
    Quantifier(String),

    /// A repeat count does not fit in 32 bits.
    #[error("repeat count {0:?} is out of range")]
    Count(String),

    /// A repeat range has its minimum above its maximum.
    #[error("repeat range {{{min},{max}}} is reversed")]
    Range { min: u32, max: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
