use serde::Serialize;
use smallcancel_words::{Letter, RelatorSet, Word};
use std::collections::BTreeSet;

/// Subwords occurring at two distinct places among the relators and their
/// inverses, read cyclically. Closed under inversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PieceSet {
    pieces: BTreeSet<Word>,
}

impl PieceSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.pieces.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.pieces.iter()
    }

    /// A piece of maximal length (the smallest such word in set order)
    #[must_use]
    pub fn longest(&self) -> Option<&Word> {
        self.pieces
            .iter()
            .fold(None, |best: Option<&Word>, piece| match best {
                Some(b) if b.len() >= piece.len() => Some(b),
                _ => Some(piece),
            })
    }
}

impl<'a> IntoIterator for &'a PieceSet {
    type Item = &'a Word;
    type IntoIter = std::collections::btree_set::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.pieces.iter()
    }
}

/// Accumulates pieces together with their inverses
#[derive(Default)]
struct PieceSetBuilder {
    pieces: BTreeSet<Word>,
}

impl PieceSetBuilder {
    fn insert(&mut self, piece: &[Letter]) {
        let piece = Word::from(piece);
        self.pieces.insert(piece.inverse());
        self.pieces.insert(piece);
    }

    fn finish(self) -> PieceSet {
        PieceSet {
            pieces: self.pieces,
        }
    }
}

/// Relators and their inverses, each stored doubled so that every cyclic
/// subword of length at most the relator length is a plain slice.
pub(crate) struct CyclicCorpus {
    /// `[r1 r1, r1⁻¹ r1⁻¹, r2 r2, r2⁻¹ r2⁻¹, …]`
    doubled: Vec<Vec<Letter>>,
}

impl CyclicCorpus {
    pub(crate) fn new(relators: &RelatorSet) -> Self {
        Self {
            doubled: relators
                .interleaved_with_inverses()
                .iter()
                .map(Word::doubled)
                .collect(),
        }
    }

    pub(crate) fn relator_count(&self) -> usize {
        self.doubled.len() / 2
    }

    pub(crate) fn relator_len(&self, index: usize) -> usize {
        self.doubled[2 * index].len() / 2
    }

    /// The subword of relator `index` of length `len` at cyclic offset `start`
    pub(crate) fn window(&self, index: usize, start: usize, len: usize) -> &[Letter] {
        &self.doubled[2 * index][start..start + len]
    }

    /// Whether the window at `start` reoccurs somewhere else.
    ///
    /// Looks at later offsets of the same relator (stopping short of the
    /// window's own repetition in the second copy), at the relator's inverse,
    /// and at every later relator and inverse. Earlier relators were already
    /// searched against this one when they were scanned.
    pub(crate) fn recurs(&self, index: usize, start: usize, len: usize) -> bool {
        let own = &self.doubled[2 * index];
        let n = own.len() / 2;
        let candidate = &own[start..start + len];

        let later_start = start + 1;
        let later_end = (n + start + len - 1).min(own.len());
        let own_later: &[Letter] = if later_start < later_end {
            &own[later_start..later_end]
        } else {
            &[]
        };

        contains_subword(own_later, candidate)
            || self.doubled[2 * index + 1..]
                .iter()
                .any(|other| contains_subword(other, candidate))
    }
}

fn contains_subword(haystack: &[Letter], needle: &[Letter]) -> bool {
    !needle.is_empty()
        && needle.len() <= haystack.len()
        && haystack.windows(needle.len()).any(|window| window == needle)
}

/// Every piece of the relator set, together with its inverse.
///
/// Only relators are scanned for candidates: a piece inside an inverse is
/// the inverse of a piece inside the relator.
pub fn find_pieces(relators: &RelatorSet) -> PieceSet {
    let corpus = CyclicCorpus::new(relators);
    let mut builder = PieceSetBuilder::default();

    for index in 0..corpus.relator_count() {
        let n = corpus.relator_len(index);
        for len in 1..=n {
            for start in 0..n {
                if corpus.recurs(index, start, len) {
                    builder.insert(corpus.window(index, start, len));
                }
            }
        }
    }

    let pieces = builder.finish();
    log::debug!(
        "Found {} pieces in {} relator(s)",
        pieces.len(),
        relators.len()
    );
    pieces
}
