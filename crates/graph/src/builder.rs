use crate::types::WhiteheadGraph;
use smallcancel_words::RelatorSet;

/// Build the reduced Whitehead graph of a relator set
#[derive(Debug, Clone, Default)]
pub struct WhiteheadBuilder;

impl WhiteheadBuilder {
    pub fn new() -> Self {
        Self
    }

    /// For every cyclic subword `xy` of every relator, join `x` and `y⁻¹`.
    ///
    /// Each cyclic subword of a relator's inverse yields the same edge, so
    /// inverses add nothing. Relators are cyclically reduced, hence `x ≠ y⁻¹`
    /// and no loops appear. Generators that occur in no relator would only
    /// add isolated vertices, which cannot lie on a cycle, so they are left out.
    pub fn build(&self, relators: &RelatorSet) -> WhiteheadGraph {
        let mut graph = WhiteheadGraph::new();

        // Phase 1: both letters of every generator that occurs
        for relator in relators {
            for &letter in relator.letters() {
                graph.add_vertex(letter);
                graph.add_vertex(letter.inverse());
            }
        }

        // Phase 2: cyclic adjacencies
        for relator in relators {
            let letters = relator.letters();
            let n = letters.len();
            for (i, &x) in letters.iter().enumerate() {
                let y = letters[(i + 1) % n];
                graph.add_adjacency(x, y.inverse());
            }
        }

        log::info!(
            "Built Whitehead graph: {} vertices, {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        graph
    }
}
