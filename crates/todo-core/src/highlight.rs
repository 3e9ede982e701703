//! Search Highlighting
//!
//! Splits a title at every case-insensitive occurrence of a search term so
//! the matches can be rendered emphasized and the rest as plain text.
//!
//! For "Hello World" and "o" the fragments are
//! `["Hell", "o", " W", "o", "rld"]`: text before the first match, then each
//! match followed by the text up to the next one, then the tail.

use std::ops::Range;

use regex::{Regex, RegexBuilder};

use crate::domain::Highlight;

/// Literal, case-insensitive matcher for one search term
#[derive(Debug, Clone)]
pub struct TermMatcher {
    pattern: Regex,
}

impl TermMatcher {
    /// Build a matcher for `term`. Returns `None` for an empty term.
    pub fn new(term: &str) -> Option<Self> {
        if term.is_empty() {
            return None;
        }
        match RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => Some(Self { pattern }),
            Err(err) => {
                log::warn!("search term rejected by matcher: {err}");
                None
            }
        }
    }

    /// Byte ranges of every non-overlapping match, left to right
    pub fn find(&self, title: &str) -> Vec<Range<usize>> {
        self.pattern.find_iter(title).map(|m| m.range()).collect()
    }

    /// Whether `text` is, in its entirety, one match of the term
    pub fn matches_whole(&self, text: &str) -> bool {
        self.pattern
            .find(text)
            .is_some_and(|m| m.start() == 0 && m.end() == text.len())
    }

    /// Split `title` around its matches.
    ///
    /// Returns `None` when nothing matches. Otherwise the leading and
    /// trailing fragments are always present (possibly empty); gaps between
    /// adjacent matches are only emitted when non-empty. Matched fragments
    /// keep the title's casing, so concatenating yields the title back.
    pub fn split(&self, title: &str) -> Option<Vec<String>> {
        let matches = self.find(title);
        let first = matches.first()?;
        let last = matches.last()?;

        let mut fragments = Vec::with_capacity(matches.len() * 2 + 1);
        fragments.push(title[..first.start].to_string());

        let mut previous_end = first.start;
        for range in &matches {
            let gap = &title[previous_end..range.start];
            if !gap.is_empty() {
                fragments.push(gap.to_string());
            }
            fragments.push(title[range.clone()].to_string());
            previous_end = range.end;
        }

        fragments.push(title[last.end..].to_string());
        Some(fragments)
    }
}

/// One-off split of `title` around `term`
pub fn split_fragments(title: &str, term: &str) -> Option<Vec<String>> {
    TermMatcher::new(term)?.split(title)
}

/// A piece of rendered title text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasized: bool,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: false,
        }
    }

    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: true,
        }
    }
}

/// Turn a highlight into display segments.
///
/// A fragment is emphasized when the term's matcher accepts it whole, so
/// bolding agrees with how `split` found the matches. Empty fragments carry
/// nothing to show and are dropped.
pub fn segments(highlight: &Highlight) -> Vec<Segment> {
    let matcher = TermMatcher::new(&highlight.term);
    highlight
        .fragments
        .iter()
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| Segment {
            emphasized: matcher
                .as_ref()
                .is_some_and(|matcher| matcher.matches_whole(fragment)),
            text: fragment.clone(),
        })
        .collect()
}
