//! Bounded regex scanning
//!
//! The `regex` crate has no lookaround, so "not preceded or followed by a
//! digit" is checked here instead of in the patterns themselves. Patterns
//! that begin or end with a month name can also ask for a letter boundary on
//! that side, so `Kumar` never reads as `mar`.

use regex::{Captures, Regex};

/// Iterator over regex matches that do not touch a neighbouring ASCII digit
///
/// When the leftmost match at the current position sits inside a longer
/// digit run (or word, with a letter boundary), scanning restarts one
/// character after that match's start.
pub struct BoundedMatches<'r, 't> {
    regex: &'r Regex,
    text: &'t str,
    pos: usize,
    letter_before: bool,
    letter_after: bool,
}

impl<'r, 't> BoundedMatches<'r, 't> {
    pub fn new(regex: &'r Regex, text: &'t str) -> Self {
        Self {
            regex,
            text,
            pos: 0,
            letter_before: false,
            letter_after: false,
        }
    }

    /// Also reject matches with an ASCII letter directly before them
    pub fn with_letter_before(mut self, enabled: bool) -> Self {
        self.letter_before = enabled;
        self
    }

    /// Also reject matches with an ASCII letter directly after them
    pub fn with_letter_after(mut self, enabled: bool) -> Self {
        self.letter_after = enabled;
        self
    }

    fn accepts(&self, start: usize, end: usize) -> bool {
        is_digit_bounded(self.text, start, end)
            && !(self.letter_before && is_letter(char_before(self.text, start)))
            && !(self.letter_after && is_letter(char_after(self.text, end)))
    }
}

impl<'r, 't> Iterator for BoundedMatches<'r, 't> {
    type Item = Captures<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos <= self.text.len() {
            let caps = self.regex.captures_at(self.text, self.pos)?;
            let whole = caps.get(0)?;

            if self.accepts(whole.start(), whole.end()) {
                // Never yield the same empty match twice
                self.pos = if whole.end() > whole.start() {
                    whole.end()
                } else {
                    next_char_boundary(self.text, whole.end())
                };
                return Some(caps);
            }

            self.pos = next_char_boundary(self.text, whole.start());
        }
        None
    }
}

/// True when the byte range has no ASCII digit directly before or after it
pub fn is_digit_bounded(text: &str, start: usize, end: usize) -> bool {
    let is_digit = |c: Option<char>| c.is_some_and(|c| c.is_ascii_digit());
    !is_digit(char_before(text, start)) && !is_digit(char_after(text, end))
}

fn char_before(text: &str, pos: usize) -> Option<char> {
    text[..pos].chars().next_back()
}

fn char_after(text: &str, pos: usize) -> Option<char> {
    text[pos..].chars().next()
}

fn is_letter(c: Option<char>) -> bool {
    c.is_some_and(|c| c.is_ascii_alphabetic())
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(text.len() + 1)
}
