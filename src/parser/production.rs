//! The ordered production table.
//!
//! Each production looks at a whole scanned pattern and, if the pattern has
//! its shape, splits it into the pieces to recurse on. The first matching
//! production in [`PRODUCTIONS`] wins. Every production strips at least one
//! trailing character, so recursing on the pieces always terminates.

use crate::{
    random,
    scan::{Mark, Outline},
};

/// How a pattern decomposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape<'a> {
    /// `<body><token>`
    Quantified { body: &'a str, token: &'a str },
    /// Both parts generated one after the other.
    Concat(&'a str, &'a str),
    /// Either part generated.
    Alternate(&'a str, &'a str),
    /// `(<inner>)` covering the whole pattern.
    Group(&'a str),
    /// `<prefix>[<body>]`
    Class { prefix: &'a str, body: &'a str },
    /// `<prefix>[:<key>:]` or `<prefix>\<key>`
    Random { prefix: &'a str, key: &'a str },
    /// `<prefix><literal>`
    Literal { prefix: &'a str, literal: &'a str },
}

pub type Production = for<'a> fn(&Outline<'a>) -> Option<Shape<'a>>;

pub static PRODUCTIONS: [Production; 13] = [
    quantifier_suffix,
    balanced_concat,
    balanced_alternation,
    implied_alternation,
    unbalanced_alternation,
    unbalanced_concat,
    explicit_group,
    implied_group,
    class_suffix,
    custom_random_suffix,
    reserved_random_escape,
    literal_escape,
    single_character,
];

/// `<body>*`, `<body>+?`, `<body>{3}`, `<body>{2,4}` and friends.
fn quantifier_suffix<'a>(outline: &Outline<'a>) -> Option<Shape<'a>> {
    let units = outline.units();
    let last = outline.last()?;
    if last.mark != Mark::Plain {
        return None;
    }

    let token_start = match last.ch {
        '*' | '+' | '?' => {
            let lazy = last.ch == '?'
                && units.len() > 2
                && units[units.len() - 2].mark == Mark::Plain
                && matches!(units[units.len() - 2].ch, '*' | '+' | '?');
            units.len() - if lazy { 2 } else { 1 }
        }
        '}' => brace_start(outline)?,
        _ => return None,
    };

    if token_start == 0 {
        return None;
    }
    Some(Shape::Quantified {
        body: outline.text(0, token_start),
        token: outline.text(token_start, units.len()),
    })
}

/// Index of the `{` of a trailing `{n}` or `{m,n}`.
fn brace_start(outline: &Outline<'_>) -> Option<usize> {
    let units = outline.units();
    let mut digits = 0;
    let mut commas = 0;

    for (index, unit) in units[..units.len() - 1].iter().enumerate().rev() {
        if unit.mark != Mark::Plain {
            return None;
        }
        match unit.ch {
            '0'..='9' => digits += 1,
            ',' if digits > 0 && commas == 0 => {
                commas += 1;
                digits = 0;
            }
            '{' if digits > 0 => return Some(index),
            _ => return None,
        }
    }
    None
}

/// `(<a>)(<b>)`
fn balanced_concat<'a>(outline: &Outline<'a>) -> Option<Shape<'a>> {
    let first_close = outline.close_of(0)?;
    let second_open = first_close + 1;
    if !outline.group_reaches_end(second_open) {
        return None;
    }
    Some(Shape::Concat(
        outline.text(1, first_close),
        outline.text(second_open + 1, outline.len() - 1),
    ))
}

/// `(<a>)|(<b>)`
fn balanced_alternation<'a>(outline: &Outline<'a>) -> Option<Shape<'a>> {
    let first_close = outline.close_of(0)?;
    let pipe = first_close + 1;
    if outline.get(pipe)?.mark != Mark::Pipe || !outline.group_reaches_end(pipe + 1) {
        return None;
    }
    Some(Shape::Alternate(
        outline.text(1, first_close),
        outline.text(pipe + 2, outline.len() - 1),
    ))
}

/// `<a>|<b>`, split at the rightmost top level `|`.
fn implied_alternation<'a>(outline: &Outline<'a>) -> Option<Shape<'a>> {
    let pipe = outline.top_level_pipes().next()?;
    Some(Shape::Alternate(
        outline.text(0, pipe),
        outline.text(pipe + 1, outline.len()),
    ))
}

/// `<a>|(<b>)`
fn unbalanced_alternation<'a>(outline: &Outline<'a>) -> Option<Shape<'a>> {
    let pipe = outline
        .top_level_pipes()
        .find(|&pipe| outline.group_reaches_end(pipe + 1))?;
    Some(Shape::Alternate(
        outline.text(0, pipe),
        outline.text(pipe + 2, outline.len() - 1),
    ))
}

/// `<a>(<b>)` with a non-empty `<a>`.
fn unbalanced_concat<'a>(outline: &Outline<'a>) -> Option<Shape<'a>> {
    let open = outline.open_of(outline.len().checked_sub(1)?)?;
    if open == 0 {
        return None;
    }
    Some(Shape::Concat(
        outline.text(0, open),
        outline.text(open, outline.len()),
    ))
}

/// `(<a>)`
fn explicit_group<'a>(outline: &Outline<'a>) -> Option<Shape<'a>> {
    if !outline.group_reaches_end(0) {
        return None;
    }
    Some(Shape::Group(outline.text(1, outline.len() - 1)))
}

/// `<prefix>(<a>)` with a prefix free of parentheses.
fn implied_group<'a>(outline: &Outline<'a>) -> Option<Shape<'a>> {
    let open = outline.open_of(outline.len().checked_sub(1)?)?;
    let prefix = outline.text(0, open);
    if prefix.is_empty() || prefix.contains(['(', ')']) {
        return None;
    }
    Some(Shape::Concat(prefix, outline.text(open, outline.len())))
}

/// `<prefix>[<body>]`, unless the body names a custom random category.
fn class_suffix<'a>(outline: &Outline<'a>) -> Option<Shape<'a>> {
    let (prefix, body) = trailing_class(outline)?;
    if custom_key(body).is_some() {
        return None;
    }
    Some(Shape::Class { prefix, body })
}

/// `<prefix>[:<name>:]`
fn custom_random_suffix<'a>(outline: &Outline<'a>) -> Option<Shape<'a>> {
    let (prefix, body) = trailing_class(outline)?;
    let key = custom_key(body)?;
    Some(Shape::Random { prefix, key })
}

/// `<prefix>\w`, `\s`, `\d` or `\c`.
fn reserved_random_escape<'a>(outline: &Outline<'a>) -> Option<Shape<'a>> {
    let (prefix, literal) = trailing_escape(outline)?;
    if !random::is_reserved(outline.last()?.ch) {
        return None;
    }
    Some(Shape::Random {
        prefix,
        key: literal,
    })
}

/// `<prefix>\<any>`
fn literal_escape<'a>(outline: &Outline<'a>) -> Option<Shape<'a>> {
    let (prefix, literal) = trailing_escape(outline)?;
    Some(Shape::Literal { prefix, literal })
}

/// `<prefix><any>`
fn single_character<'a>(outline: &Outline<'a>) -> Option<Shape<'a>> {
    let last = outline.len().checked_sub(1)?;
    Some(Shape::Literal {
        prefix: outline.text(0, last),
        literal: outline.text(last, outline.len()),
    })
}

fn trailing_class<'a>(outline: &Outline<'a>) -> Option<(&'a str, &'a str)> {
    let close = outline.len().checked_sub(1)?;
    let open = outline.class_open_of(close)?;
    Some((outline.text(0, open), outline.text(open + 1, close)))
}

fn trailing_escape<'a>(outline: &Outline<'a>) -> Option<(&'a str, &'a str)> {
    let last = outline.len().checked_sub(1)?;
    if outline.get(last)?.mark != Mark::Escaped {
        return None;
    }
    Some((outline.text(0, last - 1), outline.text(last, outline.len())))
}

fn custom_key(body: &str) -> Option<&str> {
    body.strip_prefix(':')?.strip_suffix(':')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(production: Production, pattern: &str) -> Option<Shape<'_>> {
        production(&Outline::new(pattern))
    }

    #[test]
    fn test_first_match_wins() {
        let outline = Outline::new("a|(b)");
        let first = PRODUCTIONS.iter().find_map(|production| production(&outline));
        assert_eq!(first, Some(Shape::Alternate("a", "(b)")));
    }

    #[test]
    fn test_unbalanced_alternation() {
        assert_eq!(
            shape(unbalanced_alternation, "ab|(cd)"),
            Some(Shape::Alternate("ab", "cd"))
        );
        assert_eq!(shape(unbalanced_alternation, "a|(b)|c(d)"), None);
        assert_eq!(shape(unbalanced_alternation, "a|b"), None);
    }

    #[test]
    fn test_implied_group() {
        assert_eq!(
            shape(implied_group, "ab(cd)"),
            Some(Shape::Concat("ab", "(cd)"))
        );
        assert_eq!(shape(implied_group, "(a)b(c)"), None);
        assert_eq!(shape(implied_group, "(cd)"), None);
    }

    #[test]
    fn test_quantifier_tokens() {
        assert_eq!(
            shape(quantifier_suffix, "ab+?"),
            Some(Shape::Quantified {
                body: "ab",
                token: "+?"
            })
        );
        assert_eq!(
            shape(quantifier_suffix, "a{2,4}"),
            Some(Shape::Quantified {
                body: "a",
                token: "{2,4}"
            })
        );
        assert_eq!(shape(quantifier_suffix, "a\\*"), None);
        assert_eq!(shape(quantifier_suffix, "a{,4}"), None);
        assert_eq!(shape(quantifier_suffix, "a{}"), None);
        assert_eq!(shape(quantifier_suffix, "*"), None);
    }

    #[test]
    fn test_class_and_custom_random_split() {
        assert_eq!(shape(class_suffix, "x[:cpf:]"), None);
        assert_eq!(
            shape(custom_random_suffix, "x[:cpf:]"),
            Some(Shape::Random {
                prefix: "x",
                key: "cpf"
            })
        );
        assert_eq!(
            shape(class_suffix, "[ab][cd]"),
            Some(Shape::Class {
                prefix: "[ab]",
                body: "cd"
            })
        );
    }
}
