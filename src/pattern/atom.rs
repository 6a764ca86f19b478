//! Single-atom matching.

use super::symbol::{self, Symbol};

/// Test whether one pattern atom matches one text character.
///
/// `None` stands for an empty slot: an absent atom places no constraint and
/// always matches, while an absent character (text exhausted) fails against
/// any present atom. The wildcard matches any present character; every other
/// atom must equal the character exactly.
pub fn atom_matches(atom: Option<char>, ch: Option<char>) -> bool {
    match (atom, ch) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(a), Some(c)) => symbol::is(a, Symbol::Wildcard) || a == c,
    }
}
