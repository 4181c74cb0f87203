use crate::Cause;
use std::fmt;

/// How many times a quantified sub-pattern is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// `{n}`
    Fixed(u32),
    /// `{m,n}`, `min <= max`
    Ranged { min: u32, max: u32 },
    /// `*`, `+`, `?` and their lazy forms. The repeat policy belongs to the
    /// interpreter.
    Symbolic(Symbol),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Star,         // *
    Plus,         // +
    Question,     // ?
    LazyStar,     // *?
    LazyPlus,     // +?
    LazyQuestion, // ??
}

impl Symbol {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Symbol::Star => "*",
            Symbol::Plus => "+",
            Symbol::Question => "?",
            Symbol::LazyStar => "*?",
            Symbol::LazyPlus => "+?",
            Symbol::LazyQuestion => "??",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "*" => Symbol::Star,
            "+" => Symbol::Plus,
            "?" => Symbol::Question,
            "*?" => Symbol::LazyStar,
            "+?" => Symbol::LazyPlus,
            "??" => Symbol::LazyQuestion,
            _ => return None,
        })
    }
}

impl Quantifier {
    /// Resolves a quantifier token as it appears at the end of a pattern,
    /// e.g. `+?`, `{3}` or `{2,4}`.
    ///
    /// # Errors
    ///
    /// Returns [`Cause::Count`] if a count does not fit in a `u32`,
    /// [`Cause::Range`] if a range has its minimum above its maximum, and
    /// [`Cause::Quantifier`] if the token is not a quantifier at all.
    pub fn from_token(token: &str) -> Result<Self, Cause> {
        if let Some(symbol) = Symbol::from_token(token) {
            return Ok(Quantifier::Symbolic(symbol));
        }

        let Some(counts) = token
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
        else {
            return Err(Cause::Quantifier(token.to_owned()));
        };

        match counts.split_once(',') {
            None => Ok(Quantifier::Fixed(count(counts)?)),
            Some((min, max)) => {
                let (min, max) = (count(min)?, count(max)?);
                if min > max {
                    return Err(Cause::Range { min, max });
                }
                Ok(Quantifier::Ranged { min, max })
            }
        }
    }
}

fn count(digits: &str) -> Result<u32, Cause> {
    digits
        .parse()
        .map_err(|_| Cause::Count(digits.to_owned()))
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantifier::Fixed(n) => write!(f, "{{{n}}}"),
            Quantifier::Ranged { min, max } => write!(f, "{{{min},{max}}}"),
            Quantifier::Symbolic(symbol) => f.write_str(symbol.as_str()),
        }
    }
}
