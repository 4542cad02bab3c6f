use crate::data_structures::{Coordinate, Edge, VertexMap};

/// Everything loaded for one city during a single visualization pass.
#[derive(Debug, Clone, Default)]
pub struct CityBundle {
    pub vertices: VertexMap,
    pub edges: Vec<Edge>,
    /// The subset of `edges` that gets drawn. Equal to `edges` when no sampling happened.
    pub sampled_edges: Vec<Edge>,
    pub restaurants: Vec<Coordinate>,
}

impl CityBundle {
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn num_restaurants(&self) -> usize {
        self.restaurants.len()
    }

    /// Every point that ends up on the panel, used to size the axes.
    pub fn points(&self) -> impl Iterator<Item = &Coordinate> + '_ {
        self.vertices.values().chain(self.restaurants.iter())
    }

    /// Two-line panel caption: the city name, then the raw (unsampled) counts.
    pub fn caption(&self, city_name: &str) -> String {
        format!("{}\n{}", city_name, self.counts())
    }

    pub fn counts(&self) -> String {
        format!(
            "{} vertices, {} edges, {} restaurants",
            self.num_vertices(),
            self.num_edges(),
            self.num_restaurants()
        )
    }
}
