use crate::types::{Girth, WhiteheadEdge, WhiteheadGraph};
use petgraph::algo::dijkstra;
use petgraph::graph::{EdgeIndex, EdgeReference, NodeIndex};
use petgraph::visit::{EdgeFiltered, EdgeRef};

impl WhiteheadGraph {
    /// Length of the shortest cycle, probing every edge in turn.
    ///
    /// For each edge the endpoints are joined by a shortest path avoiding it;
    /// the cycle through the edge is that path plus the edge itself.
    pub fn girth(&self) -> Girth {
        let mut shortest = Girth::Infinite;

        for edge in self.graph.edge_indices() {
            let Some((from, to)) = self.graph.edge_endpoints(edge) else {
                continue;
            };
            let through_edge = self.cycle_through(edge, from, to);
            if through_edge < shortest {
                log::debug!(
                    "Shorter cycle of length {} through {} -- {}",
                    through_edge,
                    self.graph[from],
                    self.graph[to]
                );
                shortest = through_edge;
            }
        }

        shortest
    }

    fn cycle_through(&self, edge: EdgeIndex, from: NodeIndex, to: NodeIndex) -> Girth {
        Girth::from(self.distance_without(edge, from, to).map(|d| d + 1))
    }

    fn distance_without(&self, edge: EdgeIndex, from: NodeIndex, to: NodeIndex) -> Option<usize> {
        let remaining = EdgeFiltered::from_fn(&self.graph, |e: EdgeReference<'_, WhiteheadEdge>| {
            e.id() != edge
        });
        let distances = dijkstra(&remaining, from, Some(to), |_| 1usize);
        distances.get(&to).copied()
    }
}
