//! Structural scanning of pattern strings.
//!
//! The productions decide on the shape of a whole pattern by looking at the
//! characters at its edges. Whether such a character is an escaped literal, a
//! class member or a real group delimiter depends on everything before it, so
//! each pattern is scanned once into [`Unit`]s before the productions run.

pub mod mark;

pub use mark::{Mark, Unit};

use std::str::CharIndices;

#[derive(Debug, Clone, Copy)]
struct Class {
    nesting: usize,
    members: usize,
    negated: bool,
}

pub struct Scanner<'a> {
    chars: CharIndices<'a>,
    depth: usize,
    escaping: bool,
    class: Option<Class>,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new(pattern: &'a str) -> Self {
        Scanner {
            chars: pattern.char_indices(),
            depth: 0,
            escaping: false,
            class: None,
        }
    }

    pub fn next_unit(&mut self) -> Option<Unit> {
        let (offset, ch) = self.chars.next()?;
        let depth = self.depth;
        let unit = |mark, depth| Unit {
            offset,
            ch,
            mark,
            depth,
        };

        if let Some(class) = self.class.as_mut() {
            let mark = if std::mem::take(&mut self.escaping) {
                class.members += 1;
                Mark::ClassBody
            } else {
                match ch {
                    '\\' => {
                        self.escaping = true;
                        Mark::ClassBody
                    }
                    '^' if class.members == 0 && !class.negated => {
                        class.negated = true;
                        Mark::ClassBody
                    }
                    // []] and [^]] hold a literal ]
                    ']' if class.members == 0 => {
                        class.members += 1;
                        Mark::ClassBody
                    }
                    ']' if class.nesting > 1 => {
                        class.nesting -= 1;
                        Mark::ClassBody
                    }
                    ']' => {
                        self.class = None;
                        Mark::ClassClose
                    }
                    '[' => {
                        class.nesting += 1;
                        class.members += 1;
                        Mark::ClassBody
                    }
                    _ => {
                        class.members += 1;
                        Mark::ClassBody
                    }
                }
            };
            return Some(unit(mark, depth));
        }

        if std::mem::take(&mut self.escaping) {
            return Some(unit(Mark::Escaped, depth));
        }

        let unit = match ch {
            '\\' => {
                self.escaping = true;
                unit(Mark::Escape, depth)
            }
            '(' => {
                self.depth += 1;
                unit(Mark::Open, depth)
            }
            ')' if self.depth > 0 => {
                self.depth -= 1;
                unit(Mark::Close, self.depth)
            }
            '|' => unit(Mark::Pipe, depth),
            '[' => {
                self.class = Some(Class {
                    nesting: 1,
                    members: 0,
                    negated: false,
                });
                unit(Mark::ClassOpen, depth)
            }
            _ => unit(Mark::Plain, depth),
        };
        Some(unit)
    }
}

impl Iterator for Scanner<'_> {
    type Item = Unit;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_unit()
    }
}

/// A scanned pattern.
#[derive(Debug, Clone)]
pub struct Outline<'a> {
    pattern: &'a str,
    units: Vec<Unit>,
}

impl<'a> Outline<'a> {
    #[must_use]
    pub fn new(pattern: &'a str) -> Self {
        Outline {
            pattern,
            units: Scanner::new(pattern).collect(),
        }
    }

    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Unit> {
        self.units.get(index)
    }

    #[must_use]
    pub fn last(&self) -> Option<&Unit> {
        self.units.last()
    }

    /// The text of units `from..to`.
    #[must_use]
    pub fn text(&self, from: usize, to: usize) -> &'a str {
        let offset = |index: usize| {
            self.units
                .get(index)
                .map_or(self.pattern.len(), |unit| unit.offset)
        };
        &self.pattern[offset(from)..offset(to)]
    }

    /// Index of the `)` closing the group opened at `open`.
    #[must_use]
    pub fn close_of(&self, open: usize) -> Option<usize> {
        let Unit { mark, depth, .. } = *self.units.get(open)?;
        if mark != Mark::Open {
            return None;
        }
        self.units[open + 1..]
            .iter()
            .position(|unit| unit.mark == Mark::Close && unit.depth == depth)
            .map(|at| open + 1 + at)
    }

    /// Index of the `(` opening the group closed at `close`.
    #[must_use]
    pub fn open_of(&self, close: usize) -> Option<usize> {
        let Unit { mark, depth, .. } = *self.units.get(close)?;
        if mark != Mark::Close {
            return None;
        }
        self.units[..close]
            .iter()
            .rposition(|unit| unit.mark == Mark::Open && unit.depth == depth)
    }

    /// Index of the `[` opening the class closed at `close`.
    #[must_use]
    pub fn class_open_of(&self, close: usize) -> Option<usize> {
        if self.units.get(close)?.mark != Mark::ClassClose {
            return None;
        }
        self.units[..close]
            .iter()
            .rposition(|unit| unit.mark == Mark::ClassOpen)
    }

    /// Whether the group opened at `open` ends with the last unit.
    #[must_use]
    pub fn group_reaches_end(&self, open: usize) -> bool {
        self.close_of(open) == Some(self.units.len().wrapping_sub(1))
    }

    /// Indexes of top level `|`, rightmost first.
    pub fn top_level_pipes(&self) -> impl Iterator<Item = usize> + '_ {
        self.units
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, unit)| unit.mark == Mark::Pipe && unit.depth == 0)
            .map(|(index, _)| index)
    }
}
