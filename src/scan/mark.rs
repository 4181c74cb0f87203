/// The structural role of one pattern character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Any character without a structural role.
    Plain,
    /// A `\` that escapes the next character.
    Escape,
    /// The character following an escaping `\`.
    Escaped,
    /// `(`
    Open,
    /// `)` closing an open group.
    Close,
    /// `|`
    Pipe,
    /// `[` starting a character class.
    ClassOpen,
    /// Anything between the brackets of a class, nested brackets included.
    ClassBody,
    /// `]` ending a character class.
    ClassClose,
}

/// A pattern character together with its position and role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    /// Byte offset of the character in the scanned pattern.
    pub offset: usize,
    pub ch: char,
    pub mark: Mark,
    /// Number of groups enclosing the character. A group's own `(` and `)`
    /// sit at the depth outside of it.
    pub depth: usize,
}
