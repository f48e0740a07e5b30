//! Distinct-letter sets
//!
//! A `LetterSet` is a 26-bit mask with one bit per letter `A`-`Z`. Letter order and
//! repeated letters are ignored, which makes it both the unit of frequency scoring
//! and the canonical key that merges anagrams.

use std::fmt;

/// Set of distinct uppercase letters stored as a bitmask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Build the set of distinct letters in `bytes`
    ///
    /// Bytes outside `A`-`Z` are ignored.
    #[must_use]
    pub fn of(bytes: &[u8]) -> Self {
        bytes
            .iter()
            .fold(Self::EMPTY, |set, &b| set.with(b))
    }

    /// Return a copy of this set with `letter` added
    ///
    /// Bytes outside `A`-`Z` leave the set unchanged.
    #[inline]
    #[must_use]
    pub const fn with(self, letter: u8) -> Self {
        if letter.is_ascii_uppercase() {
            Self(self.0 | (1 << (letter - b'A')))
        } else {
            self
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_uppercase() && self.0 & (1 << (letter - b'A')) != 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// True if the two sets share no letter
    #[inline]
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'A'..=b'Z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<LetterSet> for LetterSet {
    fn from_iter<I: IntoIterator<Item = LetterSet>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::union)
    }
}

/// Renders the sorted letters, e.g. `HELLO` becomes `EHLO`
impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}
