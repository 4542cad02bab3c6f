use crate::data_structures::{CityBundle, LoadOptions};
use crate::error::PlotResult;
use crate::loader::{load_edges, load_restaurants, load_vertices};
use crate::locator::{find_file, EDGE_PREFIX, RESTAURANT_PREFIX, VERTEX_PREFIX};
use crate::sampling::sample_edges;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Loads one city with an unseeded sampler.
pub fn load_city_data(options: &LoadOptions, city_code: &str) -> PlotResult<Option<CityBundle>> {
    load_city_data_with_rng(options, city_code, &mut StdRng::from_entropy())
}

/// Loads one city. `Ok(None)` means the vertex or edge file is missing and the city
/// should be skipped; a missing restaurant file only leaves the restaurant list empty.
pub fn load_city_data_with_rng<R: Rng + ?Sized>(
    options: &LoadOptions,
    city_code: &str,
    rng: &mut R,
) -> PlotResult<Option<CityBundle>> {
    let base = options.base_path.as_path();
    let vertex_file = find_file(base, city_code, VERTEX_PREFIX);
    let edge_file = find_file(base, city_code, EDGE_PREFIX);
    let restaurant_file = find_file(base, city_code, RESTAURANT_PREFIX);

    let vertex_file = match vertex_file {
        Some(path) => path,
        None => return Ok(None),
    };
    info!("Loading vertices from {}", vertex_file.display());
    let vertices = load_vertices(&vertex_file, options.parse_policy)?;
    info!("Loaded {} vertices", vertices.len());

    let edge_file = match edge_file {
        Some(path) => path,
        None => return Ok(None),
    };
    info!("Loading edges from {}", edge_file.display());
    let edges = load_edges(&edge_file, &vertices, options.parse_policy)?;
    info!("Loaded {} edges", edges.len());

    let sampled_edges = if options.sample_edges && edges.len() > options.max_edges {
        let sampled = sample_edges(&edges, options.max_edges, rng);
        info!("Sampled {} edges for visualization", sampled.len());
        sampled
    } else {
        edges.clone()
    };

    let restaurants = match restaurant_file {
        Some(path) => {
            info!("Loading restaurants from {}", path.display());
            let restaurants = load_restaurants(&path, options.parse_policy)?;
            info!("Loaded {} restaurants", restaurants.len());
            restaurants
        }
        None => Vec::new(),
    };

    Ok(Some(CityBundle {
        vertices,
        edges,
        sampled_edges,
        restaurants,
    }))
}
