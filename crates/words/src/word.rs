use crate::error::Result;
use crate::letter::Letter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A finite sequence of letters in a free group
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(Vec<Letter>);

impl Word {
    #[must_use]
    pub const fn new(letters: Vec<Letter>) -> Self {
        Self(letters)
    }

    /// Parse a case-letter word: lowercase = generator, uppercase = inverse
    pub fn parse(text: &str) -> Result<Self> {
        text.chars()
            .map(Letter::from_char)
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Build a word from signed generator indices (`-2` is the inverse of generator 2)
    pub fn from_generators(generators: &[i32]) -> Result<Self> {
        generators
            .iter()
            .map(|&g| Letter::new(g))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.0
    }

    /// Reverse the word and invert every letter
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self(self.0.iter().rev().map(|l| l.inverse()).collect())
    }

    /// No adjacent pair of mutually inverse letters
    #[must_use]
    pub fn is_freely_reduced(&self) -> bool {
        self.0.windows(2).all(|pair| !pair[0].is_inverse_of(pair[1]))
    }

    /// Freely reduced, and the last letter does not cancel against the first
    #[must_use]
    pub fn is_cyclically_reduced(&self) -> bool {
        if !self.is_freely_reduced() {
            return false;
        }
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) if self.0.len() > 1 => !first.is_inverse_of(*last),
            _ => true,
        }
    }

    /// Cancel adjacent inverse pairs until none remain
    #[must_use]
    pub fn free_reduce(&self) -> Self {
        let mut stack: Vec<Letter> = Vec::with_capacity(self.0.len());
        for &letter in &self.0 {
            match stack.last() {
                Some(&top) if top.is_inverse_of(letter) => {
                    stack.pop();
                }
                _ => stack.push(letter),
            }
        }
        Self(stack)
    }

    /// Free reduction followed by stripping cancelling first/last pairs
    #[must_use]
    pub fn cyclic_reduce(&self) -> Self {
        let reduced = self.free_reduce();
        let letters = reduced.letters();
        let mut start = 0;
        let mut end = letters.len();
        while end - start > 1 && letters[start].is_inverse_of(letters[end - 1]) {
            start += 1;
            end -= 1;
        }
        Self(letters[start..end].to_vec())
    }

    /// The word followed by itself.
    ///
    /// Every window of length at most `len()` starting in the first half is a
    /// subword of the word read cyclically.
    #[must_use]
    pub fn doubled(&self) -> Vec<Letter> {
        let mut letters = Vec::with_capacity(self.0.len() * 2);
        letters.extend_from_slice(&self.0);
        letters.extend_from_slice(&self.0);
        letters
    }

    /// Largest generator index appearing in the word
    #[must_use]
    pub fn rank(&self) -> u32 {
        self.0.iter().map(|l| l.generator()).max().unwrap_or(0)
    }
}

impl From<Vec<Letter>> for Word {
    fn from(letters: Vec<Letter>) -> Self {
        Self(letters)
    }
}

impl From<&[Letter]> for Word {
    fn from(letters: &[Letter]) -> Self {
        Self(letters.to_vec())
    }
}

impl FromStr for Word {
    type Err = crate::error::WordError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "1");
        }
        for letter in &self.0 {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn w(text: &str) -> Word {
        Word::parse(text).unwrap()
    }

    #[test]
    fn test_inverse_reverses_and_swaps_case() {
        assert_eq!(w("abAB").inverse(), w("baBA"));
        assert_eq!(w("abc").inverse().inverse(), w("abc"));
    }

    #[test]
    fn test_from_generators_matches_letters() {
        let word = Word::from_generators(&[1, 2, -1, -2]).unwrap();
        assert_eq!(word, w("abAB"));
        assert!(Word::from_generators(&[1, 0]).is_err());
    }

    #[test]
    fn test_free_reduce() {
        assert_eq!(w("abBAc").free_reduce(), w("c"));
        assert_eq!(w("aA").free_reduce(), Word::default());
        assert!(w("abAB").is_freely_reduced());
        assert!(!w("abBa").is_freely_reduced());
    }

    #[test]
    fn test_cyclic_reduce() {
        assert_eq!(w("abcA").cyclic_reduce(), w("bc"));
        assert_eq!(w("abBA").cyclic_reduce(), Word::default());
        assert_eq!(w("bcAB").cyclic_reduce(), w("cA"));
        assert!(w("abAB").is_cyclically_reduced());
        assert!(!w("abA").is_cyclically_reduced());
        assert!(w("a").is_cyclically_reduced());
    }

    #[test]
    fn test_doubled() {
        let word = w("abc");
        assert_eq!(Word::from(word.doubled()), w("abcabc"));
    }

    #[test]
    fn test_display() {
        assert_eq!(w("abAB").to_string(), "abAB");
        assert_eq!(Word::default().to_string(), "1");
        assert_eq!(w("cB").rank(), 3);
    }
}
