use crate::error::{CancellationError, Result};
use crate::pieces::CyclicCorpus;
use num_rational::Ratio;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use smallcancel_words::RelatorSet;
use std::fmt;

/// Exact ratio `piece length / relator length`, kept in lowest terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceRatio(Ratio<usize>);

impl PieceRatio {
    /// `None` when the denominator is zero
    #[must_use]
    pub fn new(numerator: usize, denominator: usize) -> Option<Self> {
        (denominator != 0).then(|| Self(Ratio::new(numerator, denominator)))
    }

    #[must_use]
    pub fn one() -> Self {
        Self(Ratio::from_integer(1))
    }

    /// Ratio of a piece inside a relator; relator lengths are always positive
    pub(crate) fn of_relator(piece_len: usize, relator_len: usize) -> Self {
        Self(Ratio::new(piece_len, relator_len.max(1)))
    }

    #[must_use]
    pub fn numerator(self) -> usize {
        *self.0.numer()
    }

    #[must_use]
    pub fn denominator(self) -> usize {
        *self.0.denom()
    }

    /// `⌈denominator / numerator⌉`: a ratio of at most `1/L` forces at
    /// least `L + 1` pieces per relator, and this is that lower bound
    #[must_use]
    pub fn piece_count_estimate(self) -> usize {
        Ratio::new(self.denominator(), self.numerator().max(1))
            .ceil()
            .to_integer()
    }

    /// `⌊self × n⌋`
    #[must_use]
    pub fn floor_times(self, n: usize) -> usize {
        (self.0 * n).floor().to_integer()
    }

    #[must_use]
    pub fn as_f64(self) -> f64 {
        self.numerator() as f64 / self.denominator() as f64
    }
}

impl fmt::Display for PieceRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for PieceRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PieceRatio", 2)?;
        state.serialize_field("numerator", self.0.numer())?;
        state.serialize_field("denominator", self.0.denom())?;
        state.end()
    }
}

/// Largest ratio of piece length to the length of a relator containing it.
///
/// Returns exactly 1 as soon as any ratio reaches `1/lambda`. The bound
/// starts at `1/(shortest relator length)`; relators are scanned shortest
/// first, and each relator is scanned from its longest candidate length down,
/// stopping at the first piece, since nothing shorter in that relator can
/// beat it.
pub fn cprime_bound(relators: &RelatorSet, lambda: u32) -> Result<PieceRatio> {
    if lambda == 0 {
        return Err(CancellationError::InvalidLambda);
    }
    let threshold = PieceRatio::of_relator(1, lambda as usize);

    let mut biggest = PieceRatio::of_relator(1, relators.min_len());
    if biggest >= threshold {
        log::debug!("Shortest relator already reaches 1/{lambda}");
        return Ok(PieceRatio::one());
    }

    let sorted = relators.sorted_by_len();
    let corpus = CyclicCorpus::new(&sorted);

    for index in 0..corpus.relator_count() {
        let n = corpus.relator_len(index);
        // only lengths that would beat the current bound
        let shortest_useful = biggest.floor_times(n) + 1;
        for len in (shortest_useful..=n).rev() {
            if (0..n).any(|start| corpus.recurs(index, start, len)) {
                biggest = PieceRatio::of_relator(len, n);
                log::debug!("Relator {index} has a piece of length {len}/{n}");
                if biggest >= threshold {
                    return Ok(PieceRatio::one());
                }
                break;
            }
        }
    }

    Ok(biggest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ratio(n: usize, d: usize) -> PieceRatio {
        PieceRatio::new(n, d).unwrap()
    }

    fn cprime_of(relators: &[&str], lambda: u32) -> PieceRatio {
        let relators = RelatorSet::normalize(relators.iter().copied()).unwrap();
        cprime_bound(&relators, lambda).unwrap()
    }

    #[test]
    fn test_ratio_arithmetic() {
        assert_eq!(ratio(2, 8), ratio(1, 4));
        assert_eq!(ratio(2, 8).numerator(), 1);
        assert!(ratio(1, 7) < ratio(1, 6));
        assert!(ratio(2, 9) > ratio(1, 5));
        assert_eq!(ratio(2, 9).piece_count_estimate(), 5);
        assert_eq!(ratio(1, 5).piece_count_estimate(), 5);
        assert_eq!(PieceRatio::one().piece_count_estimate(), 1);
        assert_eq!(ratio(2, 9).floor_times(9), 2);
        assert_eq!(ratio(1, 4).floor_times(6), 1);
        assert!(PieceRatio::new(1, 0).is_none());
        assert_eq!(ratio(3, 12).to_string(), "1/4");
        assert_eq!(PieceRatio::one().to_string(), "1");
        assert_eq!(ratio(7, 18).as_f64(), 7.0 / 18.0);
    }

    #[test]
    fn test_ratio_serializes_as_parts() {
        let json = serde_json::to_value(ratio(6, 36)).unwrap();
        assert_eq!(json, serde_json::json!({ "numerator": 1, "denominator": 6 }));
    }

    #[test]
    fn test_commutator_keeps_initial_bound() {
        assert_eq!(cprime_of(&["abAB"], 1), ratio(1, 4));
    }

    #[test]
    fn test_surface_relator_is_below_one_sixth() {
        assert_eq!(cprime_of(&["abABcdCD"], 1), ratio(1, 8));
    }

    #[test]
    fn test_single_letter_relator_short_circuits() {
        assert_eq!(cprime_of(&["a"], 1), PieceRatio::one());
    }

    #[test]
    fn test_longest_piece_sets_the_ratio() {
        // "ab" is shared, so the ratio is 2/3
        assert_eq!(cprime_of(&["abc", "abd"], 1), ratio(2, 3));
    }

    #[test]
    fn test_early_exit_at_threshold() {
        assert_eq!(cprime_of(&["abAB"], 4), PieceRatio::one());
        assert_eq!(cprime_of(&["abABcdCD"], 8), PieceRatio::one());
        assert_eq!(cprime_of(&["abABcdCD"], 7), ratio(1, 8));
        assert_eq!(cprime_of(&["abc", "abd"], 2), PieceRatio::one());
    }

    #[test]
    fn test_zero_lambda_is_rejected() {
        let relators = RelatorSet::normalize(["abAB"]).unwrap();
        assert_eq!(
            cprime_bound(&relators, 0),
            Err(CancellationError::InvalidLambda)
        );
    }
}
