//! Undirected weighted graph over named vertices.
//!
//! Every edge is stored twice, once in each endpoint's adjacency list, so for
//! any entry `a -> (b, w)` there is a matching `b -> (a, w)`. Adjacency lists
//! keep insertion order; traversals break ties between neighbours by that
//! order.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap, HashMap, HashSet, VecDeque};

/// One directed half of an undirected edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    pub vertex: String,
    pub weight: f64,
}

/// A walk through the graph and its total weight.
///
/// An empty `path` with infinite `distance` means "unreachable".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub path: Vec<String>,
    pub distance: f64,
}

impl Route {
    fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            distance: f64::INFINITY,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges walked.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Summary statistics for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphInfo {
    pub vertices: usize,
    pub edges: usize,
    pub connected: bool,
    pub vertex_list: Vec<String>,
}

/// Dijkstra frontier entry, ordered so `BinaryHeap` pops the smallest
/// distance first and breaks ties on the vertex name.
#[derive(Debug, PartialEq)]
struct Frontier<'a> {
    distance: f64,
    vertex: &'a str,
}

impl Eq for Frontier<'_> {}

impl PartialOrd for Frontier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(self.vertex))
    }
}

/// Undirected, weighted adjacency-list graph.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    adjacency: BTreeMap<String, Vec<Neighbor>>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `vertex` with an empty adjacency list. No-op if it already exists.
    pub fn add_vertex(&mut self, vertex: &str) {
        if !self.adjacency.contains_key(vertex) {
            self.adjacency.insert(vertex.to_string(), Vec::new());
        }
    }

    /// Connect `a` and `b`, creating either vertex if needed.
    ///
    /// Parallel edges are kept: adding the same pair twice stores two entries
    /// on each side. Returns `false` without touching the graph when `weight`
    /// is negative or not finite.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: f64) -> bool {
        if !weight.is_finite() || weight < 0.0 {
            return false;
        }
        self.add_vertex(a);
        self.add_vertex(b);
        if let Some(list) = self.adjacency.get_mut(a) {
            list.push(Neighbor {
                vertex: b.to_string(),
                weight,
            });
        }
        if let Some(list) = self.adjacency.get_mut(b) {
            list.push(Neighbor {
                vertex: a.to_string(),
                weight,
            });
        }
        true
    }

    /// Adjacency list of `vertex`, empty when unknown.
    pub fn get_neighbors(&self, vertex: &str) -> &[Neighbor] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains_vertex(&self, vertex: &str) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// All vertices in sorted order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Undirected edge count: half the total adjacency length.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Resolve `vertex` to the key stored in the graph so that all borrowed
    /// names in a traversal share `self`'s lifetime.
    fn key<'a>(&'a self, vertex: &str) -> Option<&'a str> {
        self.adjacency.get_key_value(vertex).map(|(k, _)| k.as_str())
    }

    /// Breadth-first order from `start`. Empty if `start` is unknown.
    pub fn bfs(&self, start: &str) -> Vec<String> {
        let Some(start) = self.key(start) else {
            return Vec::new();
        };

        let mut visited: HashSet<&str> = HashSet::from([start]);
        let mut queue: VecDeque<&str> = VecDeque::from([start]);
        let mut order = Vec::new();

        while let Some(current) = queue.pop_front() {
            order.push(current.to_string());
            for neighbor in self.get_neighbors(current) {
                if visited.insert(neighbor.vertex.as_str()) {
                    queue.push_back(neighbor.vertex.as_str());
                }
            }
        }

        order
    }

    /// Every vertex reachable from `start`, in BFS order.
    pub fn reachable_from(&self, start: &str) -> Vec<String> {
        self.bfs(start)
    }

    /// Depth-first preorder from `start`. Empty if `start` is unknown.
    ///
    /// Uses an explicit stack of `(vertex, next neighbour index)` frames, so
    /// the visiting order matches the recursive formulation without its
    /// stack-depth limit.
    pub fn dfs(&self, start: &str) -> Vec<String> {
        let Some(start) = self.key(start) else {
            return Vec::new();
        };

        let mut visited: HashSet<&str> = HashSet::from([start]);
        let mut order = vec![start.to_string()];
        let mut stack: Vec<(&str, usize)> = vec![(start, 0)];

        while let Some(&(vertex, cursor)) = stack.last() {
            let Some(next) = self.get_neighbors(vertex).get(cursor) else {
                stack.pop();
                continue;
            };
            let top = stack.len() - 1;
            stack[top].1 += 1;
            let next = next.vertex.as_str();
            if visited.insert(next) {
                order.push(next.to_string());
                stack.push((next, 0));
            }
        }

        order
    }

    /// Shortest weighted path from `start` to `end`.
    ///
    /// Stops as soon as `end` is settled. Returns an empty path with infinite
    /// distance when either endpoint is unknown or `end` is unreachable.
    pub fn dijkstra(&self, start: &str, end: &str) -> Route {
        let (Some(start), Some(end)) = (self.key(start), self.key(end)) else {
            return Route::unreachable();
        };

        let mut distances: HashMap<&str, f64> = HashMap::from([(start, 0.0)]);
        let mut previous: HashMap<&str, &str> = HashMap::new();
        let mut settled: HashSet<&str> = HashSet::new();
        let mut frontier = BinaryHeap::from([Frontier {
            distance: 0.0,
            vertex: start,
        }]);

        while let Some(Frontier { distance, vertex }) = frontier.pop() {
            if !settled.insert(vertex) {
                continue;
            }
            if vertex == end {
                break;
            }
            for neighbor in self.get_neighbors(vertex) {
                let next = neighbor.vertex.as_str();
                if settled.contains(next) {
                    continue;
                }
                let candidate = distance + neighbor.weight;
                let best = distances.get(next).copied().unwrap_or(f64::INFINITY);
                if candidate < best {
                    distances.insert(next, candidate);
                    previous.insert(next, vertex);
                    frontier.push(Frontier {
                        distance: candidate,
                        vertex: next,
                    });
                }
            }
        }

        let Some(&distance) = distances.get(end) else {
            return Route::unreachable();
        };

        let mut path = vec![end.to_string()];
        let mut current = end;
        while let Some(&prev) = previous.get(current) {
            path.push(prev.to_string());
            current = prev;
        }
        path.reverse();

        Route { path, distance }
    }

    /// Up to `max_paths` simple paths from `start` to `end`, shortest first.
    ///
    /// See [`find_all_paths_bounded`](Self::find_all_paths_bounded); this
    /// variant places no cap on the number of prefixes explored.
    pub fn find_all_paths(&self, start: &str, end: &str, max_paths: usize) -> Vec<Route> {
        self.find_all_paths_bounded(start, end, max_paths, None)
    }

    /// Enumerate simple paths by breadth-first expansion of path prefixes.
    ///
    /// Prefixes are popped in FIFO order; a prefix ending at `end` is recorded,
    /// any other is extended by each neighbour not already on it. Expansion
    /// stops once `max_paths` paths are recorded, the frontier empties, or
    /// `max_explored` prefixes have been popped. The recorded paths are then
    /// stably sorted by distance.
    ///
    /// `start == end` yields the single trivial path of distance 0.
    pub fn find_all_paths_bounded(
        &self,
        start: &str,
        end: &str,
        max_paths: usize,
        max_explored: Option<usize>,
    ) -> Vec<Route> {
        let (Some(start), Some(end)) = (self.key(start), self.key(end)) else {
            return Vec::new();
        };

        if start == end {
            return vec![Route {
                path: vec![start.to_string()],
                distance: 0.0,
            }];
        }

        let mut found: Vec<Route> = Vec::new();
        let mut queue: VecDeque<(&str, Vec<&str>, f64)> =
            VecDeque::from([(start, vec![start], 0.0)]);
        let mut explored = 0usize;

        while found.len() < max_paths {
            if let Some(limit) = max_explored
                && explored >= limit
            {
                tracing::warn!(
                    start,
                    end,
                    explored,
                    found = found.len(),
                    "path enumeration hit the explored-prefix cap"
                );
                break;
            }
            let Some((current, prefix, distance)) = queue.pop_front() else {
                break;
            };
            explored += 1;

            if current == end {
                found.push(Route {
                    path: prefix.iter().map(|v| (*v).to_string()).collect(),
                    distance,
                });
                continue;
            }

            for neighbor in self.get_neighbors(current) {
                let next = neighbor.vertex.as_str();
                if prefix.contains(&next) {
                    continue;
                }
                let mut extended = prefix.clone();
                extended.push(next);
                queue.push_back((next, extended, distance + neighbor.weight));
            }
        }

        tracing::debug!(start, end, explored, found = found.len(), "enumerated paths");
        found.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        found
    }

    /// True when every vertex is reachable from an arbitrary one. An empty
    /// graph counts as connected.
    pub fn is_connected(&self) -> bool {
        match self.adjacency.keys().next() {
            Some(first) => self.bfs(first).len() == self.adjacency.len(),
            None => true,
        }
    }

    pub fn get_graph_info(&self) -> GraphInfo {
        GraphInfo {
            vertices: self.vertex_count(),
            edges: self.edge_count(),
            connected: self.is_connected(),
            vertex_list: self.vertices().map(str::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(route: &Route) -> Vec<&str> {
        route.path.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_add_vertex_idempotent() {
        let mut graph = WeightedGraph::new();
        graph.add_vertex("A");
        graph.add_vertex("A");
        assert_eq!(graph.vertex_count(), 1);
        assert!(graph.get_neighbors("A").is_empty());
    }

    #[test]
    fn test_add_edge_rejects_bad_weight() {
        let mut graph = WeightedGraph::new();
        assert!(!graph.add_edge("A", "B", -1.0));
        assert!(!graph.add_edge("A", "B", f64::NAN));
        assert!(!graph.add_edge("A", "B", f64::INFINITY));
        assert_eq!(graph.vertex_count(), 0);
        assert!(graph.add_edge("A", "B", 0.0));
    }

    #[test]
    fn test_dfs_follows_insertion_order() {
        // A - B - D
        //  \
        //   C
        let mut graph = WeightedGraph::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("A", "C", 1.0);
        graph.add_edge("B", "D", 1.0);
        assert_eq!(graph.dfs("A"), vec!["A", "B", "D", "C"]);
        assert_eq!(graph.bfs("A"), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_dfs_deep_chain_does_not_overflow() {
        let mut graph = WeightedGraph::new();
        for i in 0..50_000 {
            graph.add_edge(&format!("v{i}"), &format!("v{}", i + 1), 1.0);
        }
        assert_eq!(graph.dfs("v0").len(), 50_001);
    }

    #[test]
    fn test_dijkstra_tie_breaks_on_vertex_name() {
        // Two equal-cost routes A-B-D and A-C-D; B settles before C.
        let mut graph = WeightedGraph::new();
        graph.add_edge("A", "C", 1.0);
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("C", "D", 1.0);
        graph.add_edge("B", "D", 1.0);
        let route = graph.dijkstra("A", "D");
        assert_eq!(path(&route), vec!["A", "B", "D"]);
        assert_eq!(route.distance, 2.0);
        assert_eq!(route.hops(), 2);
    }

    #[test]
    fn test_dijkstra_same_vertex() {
        let mut graph = WeightedGraph::new();
        graph.add_vertex("A");
        let route = graph.dijkstra("A", "A");
        assert_eq!(path(&route), vec!["A"]);
        assert_eq!(route.distance, 0.0);
    }

    #[test]
    fn test_find_all_paths_explored_cap() {
        // Complete graph on 6 vertices: many prefixes before reaching the cap.
        let mut graph = WeightedGraph::new();
        let names = ["A", "B", "C", "D", "E", "F"];
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                graph.add_edge(a, b, 1.0);
            }
        }
        let unbounded = graph.find_all_paths("A", "F", 1000);
        let capped = graph.find_all_paths_bounded("A", "F", 1000, Some(10));
        assert!(capped.len() < unbounded.len());
        // The first popped prefixes are identical, so the capped result is a
        // prefix-compatible subset: its shortest entry is the direct edge.
        assert_eq!(path(&capped[0]), vec!["A", "F"]);
    }

    #[test]
    fn test_find_all_paths_zero_cap_returns_nothing() {
        let mut graph = WeightedGraph::new();
        graph.add_edge("A", "B", 1.0);
        assert!(graph.find_all_paths("A", "B", 0).is_empty());
    }

    #[test]
    fn test_empty_graph_is_connected() {
        let graph = WeightedGraph::new();
        assert!(graph.is_connected());
        let info = graph.get_graph_info();
        assert_eq!(info.vertices, 0);
        assert_eq!(info.edges, 0);
    }
}
