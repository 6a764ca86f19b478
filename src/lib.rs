//! A tiny backtracking pattern matcher.
//!
//! Patterns are built from literal characters, the wildcard `.`, the
//! quantifiers `?` (zero or one) and `*` (zero or more), a leading `^` start
//! anchor and a trailing `$` end anchor. See [`pattern`] for the details.
//!
//! # Example
//!
//! ```rust
//! use rematch::{Pattern, full_match, search};
//!
//! assert!(full_match("a*b", "aaab"));
//! assert!(!full_match("a*b", "aac"));
//!
//! assert!(search("bc", "abc"));
//! assert!(!search("^abc", "zabc"));
//!
//! // Compile once, reuse for many texts.
//! let p = Pattern::new("c.$");
//! assert!(p.search("abcd"));
//! assert!(!p.search("abcde"));
//! ```

pub mod pattern;

pub use pattern::{Pattern, Symbol, atom_matches, full_match, match_optional, match_repeat, search};
