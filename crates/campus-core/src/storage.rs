//! Read/write campus map files from disk.
//!
//! The map is the building list plus the route list (`{from, to, distance}`)
//! from which the navigator's [`WeightedGraph`] is built.

use crate::error::{CoreError, Result};
use crate::graph::WeightedGraph;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Descriptive data for one building.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingInfo {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
}

/// One walkway between two buildings, in metres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

impl RouteRecord {
    fn is_valid(&self) -> bool {
        self.distance.is_finite() && self.distance >= 0.0
    }
}

/// Serialized campus: buildings keyed by name, plus routes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampusMap {
    #[serde(default)]
    pub buildings: BTreeMap<String, BuildingInfo>,
    #[serde(default)]
    pub routes: Vec<RouteRecord>,
}

impl CampusMap {
    /// Reject the first route whose distance is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        match self.routes.iter().find(|r| !r.is_valid()) {
            Some(route) => Err(CoreError::InvalidRoute {
                from: route.from.clone(),
                to: route.to.clone(),
                distance: route.distance,
            }),
            None => Ok(()),
        }
    }

    /// Replay buildings and routes into a fresh graph.
    ///
    /// Routes naming buildings that are not listed still create those
    /// vertices. Invalid routes are skipped with a warning.
    pub fn build_graph(&self) -> WeightedGraph {
        let mut graph = WeightedGraph::new();
        for name in self.buildings.keys() {
            graph.add_vertex(name);
        }
        let mut skipped = 0usize;
        for route in &self.routes {
            if !graph.add_edge(&route.from, &route.to, route.distance) {
                tracing::warn!(
                    from = %route.from,
                    to = %route.to,
                    distance = route.distance,
                    "skipping route with invalid distance"
                );
                skipped += 1;
            }
        }
        tracing::debug!(
            buildings = graph.vertex_count(),
            routes = self.routes.len() - skipped,
            skipped,
            "built campus graph"
        );
        graph
    }
}

/// Load a campus map from a JSON file.
pub fn load_map(path: &Path) -> Result<CampusMap> {
    let json = fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
    let map: CampusMap = serde_json::from_str(&json)?;
    tracing::debug!(
        path = %path.display(),
        buildings = map.buildings.len(),
        routes = map.routes.len(),
        "loaded campus map"
    );
    Ok(map)
}

/// Save a campus map as pretty JSON, creating parent directories if needed.
pub fn save_map(path: &Path, map: &CampusMap) -> Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir).map_err(|e| CoreError::io(dir, e))?;
    }
    let json = serde_json::to_string_pretty(map)?;
    fs::write(path, json).map_err(|e| CoreError::io(path, e))?;
    Ok(())
}
