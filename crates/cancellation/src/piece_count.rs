use crate::config::AnalysisConfig;
use crate::error::{CancellationError, Result};
use crate::pieces::{find_pieces, PieceSet};
use smallcancel_graph::ExtendedCount;
use smallcancel_words::{Letter, RelatorSet, Word};
use std::collections::HashMap;

/// Number of pieces needed to spell a relator; `Infinite` when no tiling exists
pub type PieceCount = ExtendedCount;

/// What is known about tiling a suffix of the current relator
#[derive(Debug, Clone, Copy)]
enum Known {
    /// The minimal number of pieces
    Exact(usize),
    /// At least this many pieces are needed
    AtLeast(usize),
}

/// Branch-and-bound search for the fewest pieces spelling a cyclic rotation of a relator
struct PieceSearch<'a> {
    /// Pieces, longest first so that short tilings are found early
    pieces: Vec<&'a [Letter]>,
    config: &'a AnalysisConfig,
    steps: u64,
    /// Keyed by the suffix bounds inside the current doubled relator
    memo: HashMap<(usize, usize), Known>,
    doubled: Vec<Letter>,
}

impl<'a> PieceSearch<'a> {
    fn new(pieces: &'a PieceSet, config: &'a AnalysisConfig) -> Self {
        let mut pieces: Vec<&[Letter]> = pieces.iter().map(Word::letters).collect();
        pieces.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        Self {
            pieces,
            config,
            steps: 0,
            memo: HashMap::new(),
            doubled: Vec::new(),
        }
    }

    /// `min(true count, bound)` for `relator`.
    ///
    /// The first piece may straddle the end of the relator: it is matched at a
    /// cyclic offset so that it covers the relator's first letter. What it
    /// leaves over is then tiled by pieces from left to right, none of which
    /// wraps.
    fn min_for_relator(&mut self, relator: &Word, bound: usize) -> Result<usize> {
        let n = relator.len();
        self.doubled = relator.doubled();
        self.memo.clear();

        let mut best = bound;
        for p in 0..self.pieces.len() {
            let piece = self.pieces[p];
            let len = piece.len();
            if len > n {
                continue;
            }
            for start in (n - len + 1)..=n {
                if best <= 1 {
                    return Ok(best);
                }
                if &self.doubled[start..start + len] != piece {
                    continue;
                }
                let (rest_start, rest_end) = (start + len, start + n);
                if rest_start == rest_end {
                    return Ok(1);
                }
                let rest = self.min_tiling(rest_start, rest_end, best - 1, 1)?;
                best = best.min(1 + rest);
            }
        }
        Ok(best)
    }

    /// `min(true count, bound)` for tiling `doubled[start..end]` with non-wrapping pieces
    fn min_tiling(&mut self, start: usize, end: usize, bound: usize, depth: usize) -> Result<usize> {
        if start == end {
            return Ok(0);
        }
        // a non-empty word needs at least one piece
        if bound <= 1 {
            return Ok(bound);
        }

        self.steps += 1;
        if self.steps > self.config.max_steps {
            return Err(CancellationError::BudgetExhausted {
                steps: self.config.max_steps,
            });
        }
        if depth > self.config.max_depth {
            return Err(CancellationError::DepthExceeded {
                depth: self.config.max_depth,
            });
        }

        if self.config.memoize {
            match self.memo.get(&(start, end)) {
                Some(Known::Exact(count)) => return Ok((*count).min(bound)),
                Some(Known::AtLeast(floor)) if bound <= *floor => return Ok(bound),
                _ => {}
            }
        }

        let mut best = bound;
        for p in 0..self.pieces.len() {
            let piece = self.pieces[p];
            let len = piece.len();
            if len > end - start || &self.doubled[start..start + len] != piece {
                continue;
            }
            let rest = self.min_tiling(start + len, end, best - 1, depth + 1)?;
            best = best.min(1 + rest);
            if best <= 1 {
                break;
            }
        }

        if self.config.memoize {
            let known = if best < bound {
                Known::Exact(best)
            } else {
                Known::AtLeast(bound)
            };
            self.memo.insert((start, end), known);
        }

        Ok(best)
    }
}

/// Fewest pieces whose concatenation spells some cyclic rotation of some relator.
///
/// Returns `quit_at` once every relator is known to need at least `quit_at`
/// pieces, so the result is `min(true value, quit_at)`.
pub fn min_piece_count(
    relators: &RelatorSet,
    quit_at: PieceCount,
    config: &AnalysisConfig,
) -> Result<PieceCount> {
    let pieces = find_pieces(relators);
    min_piece_count_with(relators, &pieces, quit_at, config)
}

/// As [`min_piece_count`], reusing an already computed piece set
pub fn min_piece_count_with(
    relators: &RelatorSet,
    pieces: &PieceSet,
    quit_at: PieceCount,
    config: &AnalysisConfig,
) -> Result<PieceCount> {
    // every piece has at least one letter, so a tiling never needs more than max_len pieces
    let cap = relators.max_len() + 1;
    let bound = match quit_at {
        PieceCount::Finite(q) => q.min(cap),
        PieceCount::Infinite => cap,
    };

    let mut search = PieceSearch::new(pieces, config);
    let mut best = bound;
    for (index, relator) in relators.iter().enumerate() {
        let count = search.min_for_relator(relator, best)?;
        if count < best {
            log::debug!("Relator {index} splits into {count} piece(s)");
            best = count;
        }
    }
    log::debug!("Piece search finished after {} steps", search.steps);

    if best < cap {
        Ok(PieceCount::Finite(best))
    } else {
        Ok(quit_at)
    }
}
