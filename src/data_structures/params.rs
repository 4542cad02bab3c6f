use crate::data_structures::City;
use serde::Deserialize;
use std::path::PathBuf;

/// What happens to a line whose numeric field does not parse.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Abort the whole run with a parse error.
    Strict,
    /// Skip the line, log the reason, keep going.
    Lenient,
}

impl Default for ParsePolicy {
    fn default() -> Self {
        ParsePolicy::Strict
    }
}

/// Knobs of a single city load.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub base_path: PathBuf,
    pub sample_edges: bool,
    pub max_edges: usize,
    pub parse_policy: ParsePolicy,
}

impl LoadOptions {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        LoadOptions {
            base_path: base_path.into(),
            ..LoadOptions::default()
        }
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            base_path: PathBuf::from("data"),
            sample_edges: true,
            max_edges: 10000,
            parse_policy: ParsePolicy::Strict,
        }
    }
}

/// Settings of a whole run. Every field may be omitted from `visualization.json`.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct VisualizationParameters {
    pub base_path: PathBuf,
    pub cities: Vec<City>,
    pub sample_edges: bool,
    pub max_edges: usize,
    pub output_file: PathBuf,
    /// Width and height of the image in pixels.
    pub figure_size: (u32, u32),
    /// Seeds the edge sampler. Without it every run draws a different sample.
    pub seed: Option<u64>,
    pub parse_policy: ParsePolicy,
    /// Open the saved image with the platform viewer.
    pub show: bool,
}

impl VisualizationParameters {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            base_path: self.base_path.clone(),
            sample_edges: self.sample_edges,
            max_edges: self.max_edges,
            parse_policy: self.parse_policy,
        }
    }
}

impl Default for VisualizationParameters {
    fn default() -> Self {
        VisualizationParameters {
            base_path: PathBuf::from("data"),
            cities: vec![
                City::new("AMS", "Amsterdam"),
                City::new("BER", "Berlin"),
                City::new("OSLO", "Oslo"),
            ],
            sample_edges: true,
            max_edges: 5000,
            output_file: PathBuf::from("city_comparison_with_full_network.png"),
            figure_size: (5400, 1800),
            seed: None,
            parse_policy: ParsePolicy::Strict,
            show: true,
        }
    }
}
