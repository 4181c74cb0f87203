pub mod combine;
pub mod production;
pub mod quantify;

use super::{
    Cause, Error, Result,
    ast::{Node, Quantifier},
    charset, random,
    scan::Outline,
    validate::validate,
};
use production::{PRODUCTIONS, Shape};

/// Parses a pattern into a generative tree with the default options.
///
/// Returns `Ok(None)` when the pattern describes nothing, as `""` and `()` do.
///
/// # Errors
///
/// If the pattern is not valid regular expression syntax, or part of it cannot
/// be decomposed, [`Error::InvalidPatternSyntax`] is returned.
pub fn parse(pattern: &str) -> Result<Option<Node>> {
    Parser::new().parse(pattern)
}

/// Pattern parsing options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parser {
    validate: bool,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Creates a parser that checks regex syntax before decomposing.
    #[must_use]
    pub const fn new() -> Self {
        Parser { validate: true }
    }

    /// Turns the regular expression syntax check on or off. With the check
    /// off, extensions the regex syntax lacks (such as `\c`) are accepted, and
    /// unbalanced delimiters are taken as literal characters.
    #[must_use]
    pub const fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Converts `pattern` into a [`Node`] tree.
    ///
    /// # Errors
    ///
    /// If the pattern is invalid, an [`Error`] is returned. No partial tree is
    /// ever returned.
    pub fn parse(&self, pattern: &str) -> Result<Option<Node>> {
        let wrap = |cause| Error::InvalidPatternSyntax {
            pattern: pattern.to_owned(),
            cause,
        };

        if self.validate {
            validate(pattern).map_err(wrap)?;
        }
        decompose(pattern).map_err(wrap)
    }
}

/// Decomposes `pattern` into a tree.
///
/// Trailing leaves (classes, randoms, literals) are peeled off in a loop and
/// folded back onto the head, so plain runs of characters cost no recursion.
fn decompose(pattern: &str) -> std::result::Result<Option<Node>, Cause> {
    let mut rest = pattern;
    let mut leaves = Vec::new();

    let head = loop {
        if rest.is_empty() {
            break None;
        }
        match recognize(rest)? {
            Shape::Class { prefix, body } => {
                leaves.push(charset::build(body));
                rest = prefix;
            }
            Shape::Random { prefix, key } => {
                leaves.push(random::leaf(key));
                rest = prefix;
            }
            Shape::Literal { prefix, literal } => {
                leaves.push(Node::literal(literal));
                rest = prefix;
            }
            Shape::Quantified { body, token } => {
                let quantifier = Quantifier::from_token(token)?;
                break decompose(body)?.map(|node| quantify::bind(body, node, quantifier));
            }
            Shape::Concat(lhs, rhs) => {
                break combine::sequence(decompose(lhs)?, decompose(rhs)?);
            }
            Shape::Alternate(lhs, rhs) => {
                break combine::alternation(decompose(lhs)?, decompose(rhs)?);
            }
            Shape::Group(inner) => break combine::group(decompose(inner)?),
        }
    };

    Ok(leaves
        .into_iter()
        .rev()
        .fold(head, |node, leaf| combine::sequence(node, Some(leaf))))
}

/// Finds the first production matching the whole of `pattern`. The scan is
/// dropped before the caller recurses into the pieces.
fn recognize(pattern: &str) -> std::result::Result<Shape<'_>, Cause> {
    let outline = Outline::new(pattern);
    PRODUCTIONS
        .iter()
        .find_map(|production| production(&outline))
        .ok_or_else(|| Cause::Unmatched {
            remainder: pattern.to_owned(),
        })
}
