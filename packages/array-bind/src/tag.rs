//! Field annotation parsing.
//!
//! An annotation looks like `[3]` or `[3], omitempty`. The first
//! comma-separated segment is the index clause; every later segment is a
//! modifier keyword. Unknown keywords are ignored so that annotations written
//! for newer modifiers still bind on older versions.

use std::fmt;
use std::ops::BitOr;

/// Modifier keyword that lets a field stay unset when its index is absent.
pub const OMIT_EMPTY_KEYWORD: &str = "omitempty";

/// Resolved index clause of an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagIndex {
    /// A well-formed, non-negative position.
    At(usize),
    /// The clause did not parse; treated as out of bounds by the mapper.
    Invalid,
}

impl TagIndex {
    /// Returns the position if it is within an input of length `len`.
    pub fn resolve(self, len: usize) -> Option<usize> {
        match self {
            TagIndex::At(index) if index < len => Some(index),
            _ => None,
        }
    }

    /// Returns the position, if the clause was well-formed.
    pub fn position(self) -> Option<usize> {
        match self {
            TagIndex::At(index) => Some(index),
            TagIndex::Invalid => None,
        }
    }
}

impl fmt::Display for TagIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagIndex::At(index) => write!(f, "[{index}]"),
            TagIndex::Invalid => write!(f, "<invalid>"),
        }
    }
}

/// Set of modifier flags parsed from an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TagOptions(u8);

impl TagOptions {
    /// No modifiers.
    pub const NONE: TagOptions = TagOptions(0);
    /// Skip the field when its index is absent from the input.
    pub const OMIT_EMPTY: TagOptions = TagOptions(1);

    /// Returns `true` if every flag in `other` is set.
    pub fn contains(self, other: TagOptions) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if the omit-if-absent modifier is set.
    pub fn omit_empty(self) -> bool {
        self.contains(TagOptions::OMIT_EMPTY)
    }

    /// Returns `true` if no modifier is set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for TagOptions {
    type Output = TagOptions;

    fn bitor(self, rhs: TagOptions) -> TagOptions {
        TagOptions(self.0 | rhs.0)
    }
}

/// Parses an annotation into its index clause and modifier set.
///
/// Never fails: a malformed index clause yields [`TagIndex::Invalid`] and the
/// caller decides what an unusable index means.
pub fn parse_tag(tag: &str) -> (TagIndex, TagOptions) {
    let mut segments = tag.split(',');
    let index = segments
        .next()
        .map(parse_index_clause)
        .unwrap_or(TagIndex::Invalid);

    let mut options = TagOptions::NONE;
    for segment in segments {
        match segment.trim() {
            OMIT_EMPTY_KEYWORD => options = options | TagOptions::OMIT_EMPTY,
            other => tracing::trace!("Ignoring unknown modifier '{}'", other),
        }
    }

    (index, options)
}

fn parse_index_clause(clause: &str) -> TagIndex {
    clause
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(str::trim)
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|digits| digits.parse().ok())
        .map_or(TagIndex::Invalid, TagIndex::At)
}
