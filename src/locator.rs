use crate::utility::capitalize;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const VERTEX_PREFIX: &str = "RoadVertices";
pub const EDGE_PREFIX: &str = "RoadEdges";
pub const RESTAURANT_PREFIX: &str = "Restaurants";

/// The paths probed for one city/prefix pair, highest priority first.
pub fn candidate_paths(base_path: &Path, city_code: &str, prefix: &str) -> [PathBuf; 3] {
    let poi = base_path.join("POI");
    [
        base_path.join(format!("{}{}.txt", prefix, city_code)),
        poi.join(format!("{}{}.txt", prefix, city_code)),
        poi.join(format!("{}{}.txt", prefix, capitalize(city_code))),
    ]
}

/// Returns the first candidate that exists. Absence is reported with a warning, not an error.
pub fn find_file(base_path: &Path, city_code: &str, prefix: &str) -> Option<PathBuf> {
    let candidates = candidate_paths(base_path, city_code, prefix);
    let found = candidates.iter().find(|path| path.exists()).cloned();
    if found.is_none() {
        warn!("Could not find {} file for {}", prefix, city_code);
    }
    found
}
