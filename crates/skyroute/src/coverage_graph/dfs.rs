//! Depth-first reachability with an explicit stack and a per-call visited set.

use super::types::{Graph, RadarId};

/// DFS runner carrying the visited bitmap and the pending stack.
struct DfsRunner<'a> {
    g: &'a Graph,
    visited: Vec<bool>,
    stack: Vec<RadarId>,
}

impl<'a> DfsRunner<'a> {
    fn new(g: &'a Graph) -> Self {
        Self {
            g,
            visited: vec![false; g.len()],
            stack: Vec::new(),
        }
    }

    /// Mark `id` and queue it unless already seen. Out-of-range ids are ignored.
    fn seed(&mut self, id: RadarId) {
        if let Some(seen) = self.visited.get_mut(id.0) {
            if !*seen {
                *seen = true;
                self.stack.push(id);
            }
        }
    }

    /// Walk until the stack is empty or `target` is popped.
    fn run(&mut self, target: Option<RadarId>) -> bool {
        while let Some(cur) = self.stack.pop() {
            if Some(cur) == target {
                return true;
            }
            for &next in self.g.neighbors(cur) {
                if !self.visited[next.0] {
                    self.visited[next.0] = true;
                    self.stack.push(next);
                }
            }
        }
        false
    }
}

/// True if `to` can be reached from `from` along graph edges (`from == to` included).
pub fn path_exists(graph: &Graph, from: RadarId, to: RadarId) -> bool {
    if to.0 >= graph.len() {
        return false;
    }
    let mut dfs = DfsRunner::new(graph);
    dfs.seed(from);
    dfs.run(Some(to))
}

/// Nodes reachable from any of `sources` (sources included), as a bitmap over ids.
pub fn reachable_from(graph: &Graph, sources: &[RadarId]) -> Vec<bool> {
    let mut dfs = DfsRunner::new(graph);
    for &s in sources {
        dfs.seed(s);
    }
    dfs.run(None);
    dfs.visited
}

/// True if some start candidate reaches some finish candidate.
///
/// A radar present in both sets answers immediately. Otherwise one multi-source
/// traversal from all starts replaces the per-pair searches; both give the same
/// answer because reachability is transitive.
pub fn route_exists(graph: &Graph, starts: &[RadarId], finishes: &[RadarId]) -> bool {
    if starts.is_empty() || finishes.is_empty() {
        return false;
    }
    if starts.iter().any(|s| finishes.contains(s)) {
        return true;
    }
    let reached = reachable_from(graph, starts);
    finishes
        .iter()
        .any(|f| reached.get(f.0).copied().unwrap_or(false))
}

/// Component label per radar; labels are dense and follow first appearance by id.
pub fn connected_components(graph: &Graph) -> Vec<usize> {
    let n = graph.len();
    let mut label = vec![usize::MAX; n];
    let mut next_label = 0;
    let mut stack: Vec<RadarId> = Vec::new();
    for s in 0..n {
        if label[s] != usize::MAX {
            continue;
        }
        label[s] = next_label;
        stack.push(RadarId(s));
        while let Some(cur) = stack.pop() {
            for &next in graph.neighbors(cur) {
                if label[next.0] == usize::MAX {
                    label[next.0] = next_label;
                    stack.push(next);
                }
            }
        }
        next_label += 1;
    }
    label
}
