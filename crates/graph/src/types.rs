use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallcancel_words::Letter;
use std::collections::HashMap;
use std::fmt;

/// A non-negative count that may be infinite (no cycle, no decomposition).
///
/// `Infinite` orders after every finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExtendedCount {
    Finite(usize),
    Infinite,
}

/// Length of the shortest cycle of a graph
pub type Girth = ExtendedCount;

impl ExtendedCount {
    /// `self >= q`
    #[must_use]
    pub const fn at_least(self, q: usize) -> bool {
        match self {
            Self::Finite(n) => n >= q,
            Self::Infinite => true,
        }
    }
}

impl From<usize> for ExtendedCount {
    fn from(n: usize) -> Self {
        Self::Finite(n)
    }
}

impl From<Option<usize>> for ExtendedCount {
    fn from(n: Option<usize>) -> Self {
        n.map_or(Self::Infinite, Self::Finite)
    }
}

impl fmt::Display for ExtendedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(n) => write!(f, "{n}"),
            Self::Infinite => write!(f, "inf"),
        }
    }
}

impl Serialize for ExtendedCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Finite(n) => serializer.serialize_u64(*n as u64),
            Self::Infinite => serializer.serialize_str("inf"),
        }
    }
}

impl<'de> Deserialize<'de> for ExtendedCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Finite(usize),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Finite(n) => Ok(Self::Finite(n)),
            Repr::Text(text) if text == "inf" => Ok(Self::Infinite),
            Repr::Text(text) => Err(serde::de::Error::custom(format!(
                "expected a count or \"inf\", got {text:?}"
            ))),
        }
    }
}

/// Edge of the reduced Whitehead graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhiteheadEdge {
    /// Number of cyclic adjacencies merged into this simple edge
    pub multiplicity: usize,
}

/// Reduced (simple) Whitehead graph of a relator set
pub struct WhiteheadGraph {
    /// Undirected graph on the letters `x`, `x⁻¹` of every generator that occurs
    pub graph: UnGraph<Letter, WhiteheadEdge>,

    /// Letter -> NodeIndex mapping for fast lookup
    pub letter_index: HashMap<Letter, NodeIndex>,
}

impl WhiteheadGraph {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            letter_index: HashMap::new(),
        }
    }

    /// Add a vertex for `letter` unless it is already present
    pub fn add_vertex(&mut self, letter: Letter) -> NodeIndex {
        if let Some(&idx) = self.letter_index.get(&letter) {
            return idx;
        }
        let idx = self.graph.add_node(letter);
        self.letter_index.insert(letter, idx);
        idx
    }

    /// Join two letters, merging parallel edges into one with a higher multiplicity
    pub fn add_adjacency(&mut self, a: Letter, b: Letter) {
        let from = self.add_vertex(a);
        let to = self.add_vertex(b);
        match self.graph.find_edge(from, to) {
            Some(edge) => {
                if let Some(weight) = self.graph.edge_weight_mut(edge) {
                    weight.multiplicity += 1;
                }
            }
            None => {
                self.graph
                    .add_edge(from, to, WhiteheadEdge { multiplicity: 1 });
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for WhiteheadGraph {
    fn default() -> Self {
        Self::new()
    }
}
