//! A pattern split into characters once and matched against many texts.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::matcher::{full_match_text, scan_chars};
use super::symbol::{self, Symbol};

/// A reusable pattern.
///
/// Construction never fails: every string is a pattern, and characters that
/// are not in a meaningful position are matched literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    chars: Vec<char>,
    /// Leading `^` present; [`Pattern::search`] then matches `chars[1..]`.
    anchored: bool,
}

impl Pattern {
    pub fn new(source: &str) -> Self {
        let chars: Vec<char> = source.chars().collect();
        let anchored = chars
            .first()
            .is_some_and(|&ch| symbol::is(ch, Symbol::StartAnchor));
        Self {
            source: source.to_string(),
            chars,
            anchored,
        }
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// True when [`Pattern::search`] only tries offset 0.
    pub fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// See [`crate::full_match`]. A leading `^` is matched literally.
    pub fn full_match(&self, text: &str) -> bool {
        full_match_text(&self.chars, text)
    }

    /// See [`crate::search`].
    pub fn search(&self, text: &str) -> bool {
        if self.anchored {
            full_match_text(&self.chars[1..], text)
        } else {
            scan_chars(&self.chars, text)
        }
    }
}

impl FromStr for Pattern {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Pattern::new(s))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
