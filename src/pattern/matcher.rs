//! Pattern matcher: full match and substring search over a pattern and a text.
//!
//! All positions are **character** (not byte) indices. A cursor pair
//! `(p, t)` names the remaining pattern `pattern[p..]` and the remaining text
//! `text[t..]`. Every routine answers for a cursor pair by looking at narrower
//! pairs only, so the answers for all pairs are filled into a table from the
//! ends backwards and no routine recurses.

use itertools::iproduct;
use log::trace;

use super::atom::atom_matches;
use super::symbol::{self, Symbol};

// ─── Public API ─────────────────────────────────────────────────────────────

/// Test whether `pattern` matches `text` starting at its first character.
///
/// Trailing text is ignored unless the pattern ends in `$`. A leading `^` is
/// not an anchor here and matches a literal `^`.
pub fn full_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    full_match_text(&pattern, text)
}

/// Test whether `pattern` matches anywhere in `text`, or only at its start
/// when the pattern begins with `^`.
///
/// An empty pattern is always found. A non-empty unanchored pattern is never
/// found in an empty text, even one that could match zero characters.
pub fn search(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    search_chars(&pattern, text)
}

/// Evaluate the `?` handler directly: `pattern[0]` is the optional atom and
/// `pattern[2..]` the continuation.
///
/// Matches if the atom consumes one character and the continuation matches
/// the rest, or if the continuation matches the whole text.
pub fn match_optional(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    Table::build(&pattern, &text).optional(0, 0)
}

/// Evaluate the `*` handler directly: `pattern[0]` is the repeating atom and
/// `pattern[2..]` the continuation.
///
/// Matches if the atom consumes one character and the same pattern matches
/// the rest, or if the continuation matches the whole text.
pub fn match_repeat(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    Table::build(&pattern, &text).repeat(0, 0)
}

/// Full match of `pattern` against the part of `text` it can reach.
pub(crate) fn full_match_text(pattern: &[char], text: &str) -> bool {
    let text: Vec<char> = match reach(pattern) {
        Some(n) => text.chars().take(n + 1).collect(),
        None => text.chars().collect(),
    };
    Table::build(pattern, &text).cell(0, 0)
}

pub(crate) fn search_chars(pattern: &[char], text: &str) -> bool {
    match pattern {
        [anchor, body @ ..] if symbol::is(*anchor, Symbol::StartAnchor) => {
            full_match_text(body, text)
        }
        _ => scan_chars(pattern, text),
    }
}

/// Unanchored search: try every start offset of `text` in increasing order.
pub(crate) fn scan_chars(pattern: &[char], text: &str) -> bool {
    if pattern.is_empty() {
        return true;
    }
    let text: Vec<char> = text.chars().collect();
    // One table answers every start offset: column `start` of row 0.
    let table = Table::build(pattern, &text);
    let found = (0..text.len()).find(|&start| table.cell(0, start));
    trace!("search: first match offset {found:?}");
    found.is_some()
}

/// How far past its start a full match of `pattern` can read into the text,
/// or `None` when a `*` unit makes that unbounded.
///
/// Every step without `*` advances the pattern at least as far as the text,
/// so offsets beyond `pattern.len()` are never inspected. Keeping one extra
/// character preserves the answer of the `$` rule, which only asks whether
/// the text ends at an offset no larger than `pattern.len()`.
fn reach(pattern: &[char]) -> Option<usize> {
    let unbounded = pattern
        .iter()
        .skip(1)
        .any(|&ch| symbol::is(ch, Symbol::Repeat));
    if unbounded { None } else { Some(pattern.len()) }
}

// ─── Evaluation table ───────────────────────────────────────────────────────

/// Answers for every cursor pair of one pattern against one text.
///
/// `cells[p * width + t]` holds the full-match answer for `(p, t)`, where
/// `p` ranges over `0..=pattern.len()` and `t` over `0..=text.len()`.
struct Table<'a> {
    pattern: &'a [char],
    text: &'a [char],
    width: usize,
    cells: Vec<bool>,
}

impl<'a> Table<'a> {
    /// Fill the table from the last cursor pair to `(0, 0)`.
    ///
    /// Each cell reads only cells with a larger pattern offset, or the same
    /// pattern offset and a larger text offset, so those are always filled
    /// first.
    fn build(pattern: &'a [char], text: &'a [char]) -> Self {
        let width = text.len() + 1;
        let mut table = Table {
            pattern,
            text,
            width,
            cells: vec![false; (pattern.len() + 1) * width],
        };
        trace!("table: {} pattern x {} text cursors", pattern.len() + 1, width);
        for (p, t) in iproduct!((0..=pattern.len()).rev(), (0..=text.len()).rev()) {
            let answer = table.full(p, t);
            table.cells[p * width + t] = answer;
        }
        table
    }

    /// Read a filled cell. Offsets past the end of the pattern clamp to the
    /// empty remainder.
    fn cell(&self, p: usize, t: usize) -> bool {
        self.cells[p.min(self.pattern.len()) * self.width + t]
    }

    fn atom_at(&self, p: usize) -> Option<char> {
        self.pattern.get(p).copied()
    }

    fn char_at(&self, t: usize) -> Option<char> {
        self.text.get(t).copied()
    }

    /// Narrow the text cursor by one character; an empty remainder stays empty.
    fn next(&self, t: usize) -> usize {
        (t + 1).min(self.text.len())
    }

    /// Full-match rules for `(p, t)`; the first applicable rule wins.
    fn full(&self, p: usize, t: usize) -> bool {
        match &self.pattern[p..] {
            [] => true,
            [end] if symbol::is(*end, Symbol::EndAnchor) => t == self.text.len(),
            [_, q, ..] if symbol::is(*q, Symbol::Optional) => self.optional(p, t),
            [_, q, ..] if symbol::is(*q, Symbol::Repeat) => self.repeat(p, t),
            [atom, ..] => {
                atom_matches(Some(*atom), self.char_at(t)) && self.cell(p + 1, self.next(t))
            }
        }
    }

    /// Zero-or-one: consume one character and skip past the quantified unit,
    /// or skip the unit without consuming anything.
    fn optional(&self, p: usize, t: usize) -> bool {
        (atom_matches(self.atom_at(p), self.char_at(t)) && self.cell(p + 2, self.next(t)))
            || self.cell(p + 2, t)
    }

    /// Zero-or-more: consume one character and stay on the same unit, or
    /// stop repeating and skip past it. Longer repetitions are tried first.
    fn repeat(&self, p: usize, t: usize) -> bool {
        // An exhausted text fails the atom, so `(p, t)` never reads itself.
        (atom_matches(self.atom_at(p), self.char_at(t)) && self.cell(p, self.next(t)))
            || self.cell(p + 2, t)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // --- Full match ---

    #[test]
    fn empty_pattern_matches_everything() {
        assert!(full_match("", ""));
        assert!(full_match("", "abc"));
    }

    #[test]
    fn literal_prefix() {
        assert!(full_match("abc", "abc"));
        assert!(full_match("ab", "abc"));
        assert!(!full_match("abc", "ab"));
        assert!(!full_match("abc", "abd"));
    }

    #[test]
    fn wildcards() {
        assert!(full_match("a.c", "axc"));
        assert!(full_match("a..d", "abcd"));
        assert!(!full_match("a..d", "abce"));
        assert!(!full_match(".", ""));
    }

    #[test]
    fn end_anchor_only_as_whole_remainder() {
        assert!(full_match("$", ""));
        assert!(!full_match("$", "a"));
        assert!(!full_match("$", "$"));
        assert!(full_match("abc$", "abc"));
        assert!(!full_match("abc$", "abcd"));
        // Mid-pattern `$` is a literal atom.
        assert!(full_match("a$b", "a$b"));
        assert!(!full_match("a$b", "ab"));
    }

    #[test]
    fn caret_is_literal_in_full_match() {
        assert!(full_match("^a", "^a"));
        assert!(!full_match("^a", "a"));
    }

    #[test]
    fn lone_quantifier_is_literal() {
        assert!(full_match("?", "?"));
        assert!(full_match("*", "*"));
        assert!(!full_match("*", "a"));
    }

    #[test]
    fn quantifier_binds_to_previous_atom_only() {
        // `?` after `?`: the first pair is a unit, the second `?` is literal.
        assert!(full_match("a??", "a?"));
        assert!(full_match("a??", "?"));
        assert!(!full_match("a??", "a"));
    }

    #[test]
    fn multibyte_chars_are_single_positions() {
        assert!(full_match("é.", "éx"));
        assert!(full_match("ü*$", "üüü"));
        assert!(!full_match("é$", "e"));
    }

    // --- Handlers ---

    #[test]
    fn optional_handler() {
        assert!(match_optional("a?b", "ab"));
        assert!(match_optional("a?b", "b"));
        assert!(!match_optional("a?b", "aab"));
        assert!(!match_optional("a?b", "ac"));
    }

    #[test]
    fn repeat_handler() {
        assert!(match_repeat("a*b", "b"));
        assert!(match_repeat("a*b", "aaaaab"));
        assert!(!match_repeat("a*b", "xyz"));
    }

    #[test]
    fn handlers_on_short_patterns_treat_missing_continuation_as_empty() {
        assert!(match_optional("a", "x"));
        assert!(match_repeat("", ""));
    }

    // --- Search ---

    #[test]
    fn search_unanchored_scans_offsets() {
        assert!(search("bc", "abc"));
        assert!(search("c", "abc"));
        assert!(!search("d", "abc"));
    }

    #[test]
    fn search_anchored_only_at_start() {
        assert!(search("^abc", "abcdef"));
        assert!(!search("^abc", "zabc"));
        assert!(search("^", "anything"));
        assert!(search("^", ""));
    }

    #[test]
    fn search_empty_text_with_unanchored_pattern_fails() {
        assert!(!search("a", ""));
        assert!(!search("a*", ""));
        assert!(!search("a?", ""));
        assert!(search("^a*", ""));
    }

    // --- Text window ---

    #[test]
    fn reach_is_pattern_length_without_repeat() {
        let chars = |s: &str| s.chars().collect::<Vec<_>>();
        assert_eq!(reach(&chars("")), Some(0));
        assert_eq!(reach(&chars("a?b.")), Some(4));
        // A leading `*` is a literal atom, not a repeat.
        assert_eq!(reach(&chars("*a")), Some(2));
        assert_eq!(reach(&chars("a*")), None);
        assert_eq!(reach(&chars("ab**")), None);
    }

    #[test]
    fn long_text_full_match_only_reads_the_window() {
        let text = format!("ab{}", "x".repeat(1_000_000));
        assert!(full_match("a", &text));
        assert!(full_match("a.?", &text));
        assert!(!full_match("ab$", &text));
        assert!(full_match("ab.*$", &text));
        assert!(!full_match("abx*y", &text));
        assert!(search("^ab", &text));
        assert!(!search("^abxx$", &text));
    }

    #[test]
    fn end_anchor_at_window_edge() {
        // Text exactly as long as the pattern, and one longer.
        assert!(full_match("ab$", "ab"));
        assert!(!full_match("ab$", "abc"));
        assert!(full_match("a?b?$", "ab"));
        assert!(!full_match("a?b?$", "abb"));
        assert!(full_match("a?$", "a"));
        assert!(!full_match("a?$", "aa"));
    }

    #[test]
    fn search_never_tries_offset_at_end_of_text() {
        // `$` alone can only match the empty remainder, which is never tried.
        assert!(!search("$", "abc"));
        assert!(search("c$", "abc"));
    }
}
