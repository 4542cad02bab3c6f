use crate::aggregator::load_city_data_with_rng;
use crate::data_structures::{City, CityBundle, VisualizationParameters};
use crate::error::PlotResult;
use crate::plot::render;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{info, warn};

/// One slot of the figure. `bundle` is `None` when the city had to be skipped.
#[derive(Debug, Clone)]
pub struct Panel {
    pub city: City,
    pub bundle: Option<CityBundle>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub output_file: PathBuf,
    pub rendered: Vec<String>,
    pub skipped: Vec<String>,
}

impl RunSummary {
    fn of(panels: &[Panel], output_file: &Path) -> RunSummary {
        let (rendered, skipped): (Vec<&Panel>, Vec<&Panel>) =
            panels.iter().partition(|p| p.bundle.is_some());
        RunSummary {
            output_file: output_file.to_path_buf(),
            rendered: rendered.iter().map(|p| p.city.code.clone()).collect(),
            skipped: skipped.iter().map(|p| p.city.code.clone()).collect(),
        }
    }
}

/// A seeded sampler when `seed` is configured, otherwise one seeded from entropy.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Loads every configured city in order. Missing files skip a city; parse errors abort.
pub fn collect_panels<R: Rng + ?Sized>(
    params: &VisualizationParameters,
    rng: &mut R,
) -> PlotResult<Vec<Panel>> {
    let options = params.load_options();
    let mut panels = Vec::with_capacity(params.cities.len());
    for city in &params.cities {
        let bundle = load_city_data_with_rng(&options, &city.code, rng)?;
        if bundle.is_none() {
            warn!("Skipping {} due to missing data", city.code);
        }
        panels.push(Panel {
            city: city.clone(),
            bundle,
        });
    }
    Ok(panels)
}

/// Loads, draws and saves the figure, then opens it if asked to.
pub fn run(params: &VisualizationParameters) -> PlotResult<RunSummary> {
    let mut rng = make_rng(params.seed);
    let panels = collect_panels(params, &mut rng)?;

    render(&panels, params)?;
    info!("Visualization saved to {}", params.output_file.display());

    if params.show {
        show_image(&params.output_file);
    }
    Ok(RunSummary::of(&panels, &params.output_file))
}

/// Hands the image to the platform viewer. A missing viewer is only worth a warning.
pub fn show_image(path: &Path) {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(&["/C", "start", ""]);
        cmd
    } else {
        Command::new("xdg-open")
    };

    if let Err(e) = command.arg(path).spawn() {
        warn!("Could not open {}: {}", path.display(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(code: &str, loaded: bool) -> Panel {
        Panel {
            city: City::new(code, code),
            bundle: if loaded { Some(CityBundle::default()) } else { None },
        }
    }

    #[test]
    fn summary_splits_rendered_and_skipped() {
        let panels = vec![panel("AMS", true), panel("BER", false), panel("OSLO", true)];
        let summary = RunSummary::of(&panels, Path::new("out.png"));
        assert_eq!(summary.rendered, ["AMS", "OSLO"]);
        assert_eq!(summary.skipped, ["BER"]);
        assert_eq!(summary.output_file, PathBuf::from("out.png"));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let a: u64 = make_rng(Some(11)).gen();
        let b: u64 = make_rng(Some(11)).gen();
        assert_eq!(a, b);
    }
}
