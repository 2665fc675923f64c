use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::girth::whitehead_girth;
use crate::piece_count::{min_piece_count, PieceCount};
use crate::ratio::{cprime_bound, PieceRatio};
use serde::Serialize;
use smallcancel_graph::Girth;
use smallcancel_words::RelatorSet;
use std::fmt;

/// Piece-count cap for the exact search: no condition below needs more than C(7)
pub const DECISION_PIECE_CAP: usize = 7;

/// A sufficient condition for hyperbolicity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// C′(1/6)
    SixthRatio,
    /// C(7)
    C7,
    /// C(5)-T(4)
    C5T4,
    /// C(4)-T(5)
    C4T5,
    /// C(3)-T(7)
    C3T7,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SixthRatio => "C'(1/6)",
            Self::C7 => "C(7)",
            Self::C5T4 => "C(5)-T(4)",
            Self::C4T5 => "C(4)-T(5)",
            Self::C3T7 => "C(3)-T(7)",
        };
        f.write_str(name)
    }
}

/// Where the piece-count side of a condition came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Evidence {
    /// The piece ratio itself
    Ratio,
    /// `⌈1/C′⌉` used as a lower bound on the piece count
    Estimate,
    /// The exact piece count
    Exact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Certificate {
    pub condition: Condition,
    pub evidence: Evidence,
}

/// Everything computed while looking for a certificate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub cprime: PieceRatio,
    pub girth: Option<Girth>,
    pub piece_estimate: Option<usize>,
    pub piece_count: Option<PieceCount>,
    pub certificate: Option<Certificate>,
}

impl Verdict {
    /// True only when a certificate was found; false means "no certificate", not "not hyperbolic"
    #[must_use]
    pub const fn is_hyperbolic(&self) -> bool {
        self.certificate.is_some()
    }
}

/// C(p)-T(q) combinations checked against a piece count and girth
fn combined_condition(pieces: PieceCount, girth: Girth) -> Option<Condition> {
    if pieces.at_least(5) && girth.at_least(4) {
        Some(Condition::C5T4)
    } else if pieces.at_least(4) && girth.at_least(5) {
        Some(Condition::C4T5)
    } else if pieces.at_least(3) && girth.at_least(7) {
        Some(Condition::C3T7)
    } else {
        None
    }
}

/// Check the known sufficient conditions in order, cheapest first.
///
/// 1. C′ < 1/6.
/// 2. The piece count estimate `⌈1/C′⌉` combined with the girth.
/// 3. The exact piece count (capped at 7) alone, or combined with the girth.
pub fn decide(
    relators: &RelatorSet,
    precomputed_cprime: Option<PieceRatio>,
    config: &AnalysisConfig,
) -> Result<Verdict> {
    let cprime = match precomputed_cprime {
        Some(cprime) => cprime,
        None => cprime_bound(relators, config.lambda)?,
    };
    let mut verdict = Verdict {
        cprime,
        girth: None,
        piece_estimate: None,
        piece_count: None,
        certificate: None,
    };

    if cprime < PieceRatio::of_relator(1, 6) {
        verdict.certificate = Some(Certificate {
            condition: Condition::SixthRatio,
            evidence: Evidence::Ratio,
        });
        return Ok(verdict);
    }

    let girth = whitehead_girth(relators);
    verdict.girth = Some(girth);

    let estimate = cprime.piece_count_estimate();
    verdict.piece_estimate = Some(estimate);
    if let Some(condition) = combined_condition(PieceCount::Finite(estimate), girth) {
        verdict.certificate = Some(Certificate {
            condition,
            evidence: Evidence::Estimate,
        });
        return Ok(verdict);
    }

    // the exact count can beat the estimate
    let count = min_piece_count(relators, PieceCount::Finite(DECISION_PIECE_CAP), config)?;
    verdict.piece_count = Some(count);
    let condition = if count.at_least(DECISION_PIECE_CAP) {
        Some(Condition::C7)
    } else {
        combined_condition(count, girth)
    };
    verdict.certificate = condition.map(|condition| Certificate {
        condition,
        evidence: Evidence::Exact,
    });

    log::debug!(
        "C'={} T={} C={} certificate={:?}",
        cprime,
        girth,
        count,
        verdict.certificate.map(|c| c.condition)
    );

    Ok(verdict)
}
