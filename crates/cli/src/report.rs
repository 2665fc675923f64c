use anyhow::Result;
use serde::Serialize;
use smallcancel_core::{Analyzer, Evidence, Girth, PieceCount, PieceRatio, Verdict};
use smallcancel_graph::WhiteheadBuilder;
use smallcancel_words::RelatorSet;

/// Every metric the analyzer can compute for one relator set
#[derive(Debug, Serialize)]
pub struct Report {
    pub relators: Vec<String>,
    pub rank: u32,
    pub min_len: usize,
    pub max_len: usize,
    pub piece_count: usize,
    pub longest_piece: Option<String>,
    pub cprime: PieceRatio,
    pub whitehead_vertices: usize,
    pub whitehead_edges: usize,
    pub girth: Girth,
    pub min_pieces: PieceCount,
    pub verdict: Verdict,
}

impl Report {
    pub fn build(analyzer: &Analyzer, relators: &RelatorSet) -> Result<Self> {
        let pieces = analyzer.pieces(relators);
        let graph = WhiteheadBuilder::new().build(relators);
        let cprime = analyzer.cprime(relators)?;
        let min_pieces = analyzer.min_piece_count(relators, PieceCount::Infinite)?;
        let verdict = analyzer.decide(relators, Some(cprime))?;

        Ok(Self {
            relators: relators.iter().map(ToString::to_string).collect(),
            rank: relators.rank(),
            min_len: relators.min_len(),
            max_len: relators.max_len(),
            piece_count: pieces.len(),
            longest_piece: pieces.longest().map(ToString::to_string),
            cprime,
            whitehead_vertices: graph.node_count(),
            whitehead_edges: graph.edge_count(),
            girth: graph.girth(),
            min_pieces,
            verdict,
        })
    }
}

/// One line describing the decision
pub fn render_verdict(verdict: &Verdict) -> String {
    let Some(certificate) = verdict.certificate else {
        return "no certificate found".to_string();
    };
    let evidence = match certificate.evidence {
        Evidence::Ratio => "piece ratio",
        Evidence::Estimate => "estimated piece count",
        Evidence::Exact => "exact piece count",
    };
    format!("hyperbolic: {} from {evidence}", certificate.condition)
}

pub fn render_report(report: &Report) -> String {
    let mut out = String::new();
    out.push_str("# Small cancellation report\n\n");
    out.push_str(&format!("- Relators: `{}`\n", report.relators.join(", ")));
    out.push_str(&format!("- Generators: `{}`\n", report.rank));
    out.push_str(&format!(
        "- Relator length: `{}`..=`{}`\n\n",
        report.min_len, report.max_len
    ));

    out.push_str("| metric | value |\n");
    out.push_str("|---|---:|\n");
    out.push_str(&format!("| pieces | `{}` |\n", report.piece_count));
    out.push_str(&format!(
        "| longest piece | `{}` |\n",
        report.longest_piece.as_deref().unwrap_or("n/a")
    ));
    out.push_str(&format!("| C' | `{}` |\n", report.cprime));
    out.push_str(&format!(
        "| Whitehead graph | `{}` vertices, `{}` edges |\n",
        report.whitehead_vertices, report.whitehead_edges
    ));
    out.push_str(&format!("| T (girth) | `{}` |\n", report.girth));
    out.push_str(&format!("| C (min pieces) | `{}` |\n", report.min_pieces));
    out.push('\n');

    out.push_str(&format!("Verdict: {}\n", render_verdict(&report.verdict)));
    out
}
