use crate::config::AnalysisConfig;
use crate::decision::{decide, Verdict};
use crate::error::{CancellationError, Result};
use crate::girth::whitehead_girth;
use crate::piece_count::{min_piece_count_with, PieceCount};
use crate::pieces::{find_pieces, PieceSet};
use crate::ratio::{cprime_bound, PieceRatio};
use smallcancel_graph::Girth;
use smallcancel_words::RelatorSet;

/// Runs the small cancellation checks under one configuration
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate().map_err(CancellationError::invalid_config)?;
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn pieces(&self, relators: &RelatorSet) -> PieceSet {
        find_pieces(relators)
    }

    /// Piece ratio with the configured `lambda`
    pub fn cprime(&self, relators: &RelatorSet) -> Result<PieceRatio> {
        cprime_bound(relators, self.config.lambda)
    }

    pub fn girth(&self, relators: &RelatorSet) -> Girth {
        whitehead_girth(relators)
    }

    pub fn min_piece_count(&self, relators: &RelatorSet, quit_at: PieceCount) -> Result<PieceCount> {
        let pieces = find_pieces(relators);
        min_piece_count_with(relators, &pieces, quit_at, &self.config)
    }

    pub fn decide(
        &self,
        relators: &RelatorSet,
        precomputed_cprime: Option<PieceRatio>,
    ) -> Result<Verdict> {
        decide(relators, precomputed_cprime, &self.config)
    }

    pub fn smallcancellation(
        &self,
        relators: &RelatorSet,
        precomputed_cprime: Option<PieceRatio>,
    ) -> Result<bool> {
        Ok(self.decide(relators, precomputed_cprime)?.is_hyperbolic())
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            config: AnalysisConfig::default(),
        }
    }
}
