use crate::error::{Result, WordError};
use crate::word::Word;
use serde::{Deserialize, Serialize};

/// One relator as it arrives from the outside world
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelatorInput {
    /// Case-letter spelling, e.g. `"abAB"`
    Letters(String),

    /// Signed generator indices, e.g. `[1, 2, -1, -2]`
    Generators(Vec<i32>),
}

impl RelatorInput {
    pub fn to_word(&self) -> Result<Word> {
        match self {
            Self::Letters(text) => Word::parse(text),
            Self::Generators(generators) => Word::from_generators(generators),
        }
    }
}

impl From<&str> for RelatorInput {
    fn from(text: &str) -> Self {
        Self::Letters(text.to_string())
    }
}

impl From<Vec<i32>> for RelatorInput {
    fn from(generators: Vec<i32>) -> Self {
        Self::Generators(generators)
    }
}

/// Ordered, non-empty list of non-empty cyclically reduced relators.
///
/// Construction is the only place the input contract is checked, so every
/// `RelatorSet` handed to a computation is already valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RelatorSet {
    relators: Vec<Word>,
}

impl RelatorSet {
    /// Validate relators without modifying them
    pub fn new(relators: Vec<Word>) -> Result<Self> {
        if relators.is_empty() {
            return Err(WordError::EmptyRelatorSet);
        }
        for (index, relator) in relators.iter().enumerate() {
            if relator.is_empty() {
                return Err(WordError::EmptyRelator { index });
            }
            if !relator.is_cyclically_reduced() {
                return Err(WordError::not_cyclically_reduced(index, relator.to_string()));
            }
        }
        Ok(Self { relators })
    }

    /// Parse heterogeneous inputs, then validate
    pub fn normalize<I, T>(inputs: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<RelatorInput>,
    {
        let words = inputs
            .into_iter()
            .map(|input| Into::<RelatorInput>::into(input).to_word())
            .collect::<Result<Vec<_>>>()?;
        Self::new(words)
    }

    /// Cyclically reduce every word first. Words that reduce to the identity are dropped.
    pub fn reduced(words: Vec<Word>) -> Result<Self> {
        let total = words.len();
        let relators: Vec<Word> = words
            .iter()
            .map(Word::cyclic_reduce)
            .filter(|w| !w.is_empty())
            .collect();
        if relators.len() < total {
            log::debug!(
                "Dropped {} relator(s) that reduce to the identity",
                total - relators.len()
            );
        }
        Self::new(relators)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.relators.len()
    }

    /// Always false for a constructed set; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.relators.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.relators.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.relators
    }

    /// Number of generators of the ambient free group (largest index used)
    #[must_use]
    pub fn rank(&self) -> u32 {
        self.relators.iter().map(Word::rank).max().unwrap_or(0)
    }

    #[must_use]
    pub fn min_len(&self) -> usize {
        self.relators.iter().map(Word::len).min().unwrap_or(0)
    }

    #[must_use]
    pub fn max_len(&self) -> usize {
        self.relators.iter().map(Word::len).max().unwrap_or(0)
    }

    /// Same relators, shortest first (stable for equal lengths)
    #[must_use]
    pub fn sorted_by_len(&self) -> Self {
        let mut relators = self.relators.clone();
        relators.sort_by_key(Word::len);
        Self { relators }
    }

    /// `[r1, r1⁻¹, r2, r2⁻¹, …]`
    #[must_use]
    pub fn interleaved_with_inverses(&self) -> Vec<Word> {
        self.relators
            .iter()
            .flat_map(|r| [r.clone(), r.inverse()])
            .collect()
    }
}

impl<'de> Deserialize<'de> for RelatorSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let inputs = Vec::<RelatorInput>::deserialize(deserializer)?;
        Self::normalize(inputs).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a RelatorSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.relators.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rejects_empty_set() {
        assert_eq!(
            RelatorSet::new(vec![]),
            Err(WordError::EmptyRelatorSet)
        );
    }

    #[test]
    fn test_rejects_empty_relator() {
        let err = RelatorSet::normalize(["ab", ""]).unwrap_err();
        assert_eq!(err, WordError::EmptyRelator { index: 1 });
    }

    #[test]
    fn test_rejects_unreduced_relator_without_repairing() {
        let err = RelatorSet::normalize(["abc", "abA"]).unwrap_err();
        assert_eq!(err, WordError::not_cyclically_reduced(1, "abA"));

        let err = RelatorSet::normalize(["abBc"]).unwrap_err();
        assert!(matches!(err, WordError::NotCyclicallyReduced { index: 0, .. }));
    }

    #[test]
    fn test_reduced_is_explicit_opt_in() {
        let words = vec![Word::parse("abcA").unwrap(), Word::parse("aA").unwrap()];
        let set = RelatorSet::reduced(words).unwrap();
        assert_eq!(set.as_slice(), &[Word::parse("bc").unwrap()]);
    }

    #[test]
    fn test_interleaved_with_inverses() {
        let set = RelatorSet::normalize(["ab", "c"]).unwrap();
        let words: Vec<String> = set
            .interleaved_with_inverses()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(words, vec!["ab", "BA", "c", "C"]);
    }

    #[test]
    fn test_sorted_by_len_is_stable() {
        let set = RelatorSet::normalize(["abc", "de", "fg", "h"]).unwrap();
        let sorted: Vec<String> = set.sorted_by_len().iter().map(ToString::to_string).collect();
        assert_eq!(sorted, vec!["h", "de", "fg", "abc"]);
        assert_eq!(set.min_len(), 1);
        assert_eq!(set.max_len(), 3);
        assert_eq!(set.rank(), 8);
    }
}
