pub(crate) mod graph;
pub(crate) mod params;

pub use graph::CityBundle;
pub use params::{LoadOptions, ParsePolicy, VisualizationParameters};

use serde::Deserialize;
use std::collections::HashMap;

/// Integer label of a road network node, unique within one city.
pub type VertexId = i64;

/// Raw (longitude, latitude) pair, in whatever unit the source file uses.
pub type Coordinate = (f64, f64);

/// A road segment after its endpoint ids were resolved to coordinates.
pub type Edge = (Coordinate, Coordinate);

pub type VertexMap = HashMap<VertexId, Coordinate>;

/*
{
"code":"AMS",
"name":"Amsterdam"
}
*/
/// A city as the driver knows it: the code used in file names and the name shown on the plot.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub code: String,
    pub name: String,
}

impl City {
    pub fn new(code: &str, name: &str) -> Self {
        City {
            code: code.to_string(),
            name: name.to_string(),
        }
    }
}
