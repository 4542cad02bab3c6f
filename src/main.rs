use city_network_plot::driver::run;
use city_network_plot::observability::init_tracing;
use city_network_plot::{load_optional_json, VisualizationParameters};
use std::path::Path;
use tracing::info;

/// Optional overrides, read from the working directory.
const CONFIG_FILE: &str = "visualization.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let params = match load_optional_json::<VisualizationParameters>(Path::new(CONFIG_FILE))? {
        Some(params) => {
            info!("Using settings from {}", CONFIG_FILE);
            params
        }
        None => VisualizationParameters::default(),
    };

    let summary = run(&params)?;
    info!(
        "Rendered {:?}, skipped {:?}",
        summary.rendered, summary.skipped
    );
    Ok(())
}
