//! Route queries over the campus graph from a "you are here" location.

use campus_core::config::NavigationConfig;
use campus_core::graph::{GraphInfo, Route, WeightedGraph};
use campus_core::storage::{BuildingInfo, CampusMap};
use std::collections::BTreeMap;

/// A building and its shortest walking distance from the current location.
#[derive(Debug, Clone, PartialEq)]
pub struct Distance {
    pub building: String,
    pub distance: f64,
}

/// Campus graph plus the building catalogue and the user's position.
#[derive(Debug, Clone)]
pub struct CampusNavigator {
    graph: WeightedGraph,
    buildings: BTreeMap<String, BuildingInfo>,
    current: Option<String>,
    max_paths: usize,
    max_explored: Option<usize>,
}

impl CampusNavigator {
    pub fn from_map(map: &CampusMap, config: &NavigationConfig) -> Self {
        Self {
            graph: map.build_graph(),
            buildings: map.buildings.clone(),
            current: None,
            max_paths: config.max_paths,
            max_explored: config.explored_limit(),
        }
    }

    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    /// Move to `building`. Returns `false` and keeps the old location when the
    /// building is not on the map.
    pub fn set_current_location(&mut self, building: &str) -> bool {
        if !self.graph.contains_vertex(building) {
            tracing::debug!(building, "ignoring unknown location");
            return false;
        }
        self.current = Some(building.to_string());
        true
    }

    pub fn current_location(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Every building on the map, sorted by name.
    pub fn buildings(&self) -> Vec<&str> {
        self.graph.vertices().collect()
    }

    pub fn building_info(&self, building: &str) -> Option<&BuildingInfo> {
        self.buildings.get(building)
    }

    /// Shortest route from the current location; `None` when no location is set.
    pub fn shortest_path(&self, destination: &str) -> Option<Route> {
        let current = self.current.as_deref()?;
        Some(self.graph.dijkstra(current, destination))
    }

    /// Buildings reachable from the current location in BFS order, the current
    /// location first.
    pub fn reachable_buildings(&self) -> Vec<String> {
        self.current
            .as_deref()
            .map(|c| self.graph.reachable_from(c))
            .unwrap_or_default()
    }

    /// DFS tour of the campus from the current location.
    pub fn explore_dfs(&self) -> Vec<String> {
        self.current
            .as_deref()
            .map(|c| self.graph.dfs(c))
            .unwrap_or_default()
    }

    /// Alternative routes from the current location, shortest first.
    pub fn routes_to(&self, destination: &str) -> Vec<Route> {
        match self.current.as_deref() {
            Some(current) => self.routes_between(current, destination),
            None => Vec::new(),
        }
    }

    /// Alternative routes between two buildings, shortest first, limited by
    /// the configured `max_paths` and explored-prefix cap.
    pub fn routes_between(&self, from: &str, to: &str) -> Vec<Route> {
        self.graph
            .find_all_paths_bounded(from, to, self.max_paths, self.max_explored)
    }

    /// Walking distance to every other reachable building.
    pub fn distances_from_current(&self) -> Vec<Distance> {
        let Some(current) = self.current.as_deref() else {
            return Vec::new();
        };
        self.distances_from(current)
    }

    /// Walking distance from `origin` to every other reachable building, in
    /// BFS order.
    pub fn distances_from(&self, origin: &str) -> Vec<Distance> {
        self.graph
            .reachable_from(origin)
            .into_iter()
            .filter(|b| b != origin)
            .map(|building| {
                let distance = self.graph.dijkstra(origin, &building).distance;
                Distance { building, distance }
            })
            .collect()
    }

    pub fn campus_info(&self) -> GraphInfo {
        self.graph.get_graph_info()
    }
}
