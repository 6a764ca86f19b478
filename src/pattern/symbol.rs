//! Metacharacters recognised in a pattern.

use phf::{Map, phf_map};

/// A pattern character with special meaning.
///
/// Whether a symbol is actually treated specially depends on where it sits:
/// `?` and `*` only as the second character of the remaining pattern, `^` only
/// as the first character of a searched pattern, and `$` only as the whole
/// remaining pattern. Anywhere else they are ordinary atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Wildcard,    // . — any present character
    Optional,    // ? — zero or one of the preceding atom
    Repeat,      // * — zero or more of the preceding atom
    StartAnchor, // ^ — match begins at text offset 0
    EndAnchor,   // $ — no text may remain
}

/// Map of metacharacters to their symbol.
const CHAR_TO_SYMBOL_MAP: Map<char, Symbol> = phf_map! {
    '$' => Symbol::EndAnchor,
    '*' => Symbol::Repeat,
    '.' => Symbol::Wildcard,
    '?' => Symbol::Optional,
    '^' => Symbol::StartAnchor,
};

impl Symbol {
    /// Look up the symbol spelled by `ch`, if any.
    pub fn of(ch: char) -> Option<Symbol> {
        CHAR_TO_SYMBOL_MAP.get(&ch).copied()
    }

    /// The character that spells this symbol.
    pub fn as_char(self) -> char {
        match self {
            Symbol::Wildcard => '.',
            Symbol::Optional => '?',
            Symbol::Repeat => '*',
            Symbol::StartAnchor => '^',
            Symbol::EndAnchor => '$',
        }
    }
}

/// Test whether `ch` spells `symbol`.
pub fn is(ch: char, symbol: Symbol) -> bool {
    Symbol::of(ch) == Some(symbol)
}
