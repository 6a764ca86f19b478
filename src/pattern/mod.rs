//! Pattern matching engine.
//!
//! A pattern is a string of atoms, each optionally followed by a quantifier.
//!
//! # Pattern syntax
//!
//! | Token  | Meaning                                                    |
//! |--------|------------------------------------------------------------|
//! | `c`    | The character `c`, compared exactly                        |
//! | `.`    | Any one character                                          |
//! | `X?`   | Zero or one `X`                                            |
//! | `X*`   | Zero or more `X`                                           |
//! | `^`    | Start anchor; only as the first character of a search      |
//! | `$`    | End anchor; only when it is the whole remaining pattern    |
//!
//! There is no escaping. A symbol outside its meaningful position is an
//! ordinary atom, so `a$b` matches the text `a$b` and a lone `*` matches `*`.

pub mod atom;
pub mod compiled;
pub mod matcher;
pub mod symbol;


pub use atom::atom_matches;
pub use compiled::Pattern;
pub use matcher::{full_match, match_optional, match_repeat, search};
pub use symbol::Symbol;
