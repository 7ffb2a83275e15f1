//! Depth classification of metric indexes relative to a base level.
//!
//! A search aggregation over `foo.bar.*` returns keys for every indexed path
//! that starts with the query prefix, at any depth. With the prefix `foo.bar`
//! the base level is 2: names one wildcard segment below the prefix
//! (`foo.bar.baz`) sit at level 2, and names one segment deeper
//! (`foo.bar.baz.aux`) sit at level 3 and mark their parent as browsable.
//!
//! Levels are zero-based: the level of an index is its number of separators.

use std::fmt;

use crate::error::{Error, Result};

/// Separator between metric name segments.
pub const METRIC_TOKEN_SEPARATOR: char = '.';

/// Number of segments in the query prefix a classifier is anchored to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BaseLevel(usize);

impl BaseLevel {
    #[must_use]
    pub const fn new(level: usize) -> Self {
        Self(level)
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for BaseLevel {
    fn from(level: usize) -> Self {
        Self(level)
    }
}

impl TryFrom<i64> for BaseLevel {
    type Error = Error;

    fn try_from(level: i64) -> Result<Self> {
        if level < 0 {
            return Err(Error::NegativeBaseLevel { base_level: level });
        }
        usize::try_from(level)
            .map(Self)
            .map_err(|_| Error::message(format!("base level {level} is out of range")))
    }
}

impl fmt::Display for BaseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where an index falls relative to the base level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level<'a> {
    /// The index is itself a base-level name.
    Base,
    /// The index is one segment below `parent`, a base-level name.
    Next { parent: &'a str },
    /// Any other depth; irrelevant to this base level.
    Ignored,
}

impl Level<'_> {
    /// Label used for logging and observation counters.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Next { .. } => "next_level",
            Self::Ignored => "ignored",
        }
    }
}

/// Zero-based level of `index`, i.e. the number of separators it contains.
#[must_use]
pub fn level_of(index: &str) -> usize {
    index.matches(METRIC_TOKEN_SEPARATOR).count()
}

/// Classify `index` against `base_level`.
///
/// Depth is counted in separators, not segments: `foo.bar.baz` sits at
/// level 2, so with base level 2 it is [`Level::Base`] and `foo.bar.baz.aux`
/// is [`Level::Next`]. A four-segment name such as `x.y.z.w` is therefore one
/// level below base level 2, not two, and reports `x.y.z` as its parent. Only
/// names at least two separators off the base level are ignored.
#[must_use]
pub fn classify(index: &str, base_level: BaseLevel) -> Level<'_> {
    match level_of(index).checked_sub(base_level.get()) {
        Some(0) => Level::Base,
        Some(1) => {
            // At base level 0 the parent is the leading segment.
            let split = if base_level.get() == 0 {
                index.split_once(METRIC_TOKEN_SEPARATOR)
            } else {
                index.rsplit_once(METRIC_TOKEN_SEPARATOR)
            };
            match split {
                Some((parent, _)) => Level::Next { parent },
                None => Level::Ignored,
            }
        },
        _ => Level::Ignored,
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("foo", 0)]
    #[case("foo.bar", 1)]
    #[case("foo.bar.baz.aux", 3)]
    #[case("foo..bar", 2)]
    fn level_counts_separators(#[case] index: &str, #[case] expected: usize) {
        assert_eq!(level_of(index), expected);
    }

    #[rstest]
    #[case("foo.bar.baz", 2, Level::Base)]
    #[case("foo.bar.baz.aux", 2, Level::Next { parent: "foo.bar.baz" })]
    #[case("foo.bar", 2, Level::Ignored)]
    #[case("x.y.z.w", 2, Level::Next { parent: "x.y.z" })]
    #[case("x.y.z.w.v", 2, Level::Ignored)]
    #[case("foo", 0, Level::Base)]
    #[case("foo.bar", 0, Level::Next { parent: "foo" })]
    #[case("foo.bar.baz", 0, Level::Ignored)]
    #[case("foo.bar", 1, Level::Base)]
    #[case("foo.bar.baz", 1, Level::Next { parent: "foo.bar" })]
    fn classify_relative_to_base(
        #[case] index: &str,
        #[case] base_level: usize,
        #[case] expected: Level<'static>,
    ) {
        assert_eq!(classify(index, BaseLevel::new(base_level)), expected);
    }

    #[test]
    fn parent_borrows_from_index() {
        let index = String::from("a.b.c");
        let Level::Next { parent } = classify(&index, BaseLevel::new(1)) else {
            panic!("expected next level");
        };
        assert_eq!(parent, "a.b");
    }

    #[test]
    fn negative_base_level_rejected() {
        let err = BaseLevel::try_from(-1_i64).unwrap_err();
        assert!(matches!(err, Error::NegativeBaseLevel { base_level: -1 }));
    }

    #[test]
    fn non_negative_base_level_accepted() {
        assert_eq!(BaseLevel::try_from(0_i64).unwrap(), BaseLevel::new(0));
        assert_eq!(BaseLevel::try_from(4_i64).unwrap().get(), 4);
    }
}
