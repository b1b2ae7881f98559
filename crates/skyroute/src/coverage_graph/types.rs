//! Data types for the coverage graph.

/// Index of a radar in the caller's zone list; the only identity a radar has.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RadarId(pub usize);

/// Undirected overlap graph over radar indices.
///
/// `adj[k]` lists the neighbors of radar `k` in ascending order. There are no
/// self-loops and `j ∈ adj[i]` iff `i ∈ adj[j]`. Only the builders in this crate
/// construct it, so the invariant holds for every `Graph` a caller sees.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    pub(crate) adj: Vec<Vec<RadarId>>,
}

impl Graph {
    /// Number of radars (nodes).
    #[inline]
    pub fn len(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Neighbors of `id`; empty for an id outside the graph.
    #[inline]
    pub fn neighbors(&self, id: RadarId) -> &[RadarId] {
        self.adj.get(id.0).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn has_edge(&self, a: RadarId, b: RadarId) -> bool {
        self.adj
            .get(a.0)
            .is_some_and(|n| n.binary_search(&b).is_ok())
    }
}
