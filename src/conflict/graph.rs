//! Conflict graph over the candidates of a section pool.

use petgraph::graph::{NodeIndex, UnGraph};

use crate::pool::SectionPool;

/// Undirected graph with one node per pool candidate and an edge between every
/// pair of candidates from different courses that conflict.
///
/// Node `i` is the candidate at arena index `i` of the pool, so lookups need no
/// side table. Candidates of the same course never share a combination and are
/// never connected.
#[derive(Debug, Clone)]
pub struct ConflictGraph {
    graph: UnGraph<usize, ()>,
}

impl ConflictGraph {
    pub fn from_pool(pool: &SectionPool) -> Self {
        let entries = pool.entries();
        let mut graph = UnGraph::with_capacity(entries.len(), 0);
        for idx in 0..entries.len() {
            graph.add_node(idx);
        }

        for (i, a) in entries.iter().enumerate() {
            for (j, b) in entries.iter().enumerate().skip(i + 1) {
                if a.group() == b.group() || a.section().same_section(b.section()) {
                    continue;
                }
                if a.profile().clashes_with(b.profile()) {
                    graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), ());
                }
            }
        }

        Self { graph }
    }

    /// True if candidates `a` and `b` conflict.
    pub fn conflicts(&self, a: usize, b: usize) -> bool {
        self.graph.contains_edge(NodeIndex::new(a), NodeIndex::new(b))
    }

    /// Candidates conflicting with `idx`.
    pub fn neighbors(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.graph.neighbors(NodeIndex::new(idx)).map(|n| n.index())
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of conflicting candidate pairs.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
