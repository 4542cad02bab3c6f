//! Plots road networks and restaurant locations of a handful of cities side by side.

pub mod aggregator;
pub mod data_structures;
pub mod driver;
pub mod error;
mod float_helper;
pub mod loader;
pub mod locator;
pub mod observability;
pub mod plot;
pub mod sampling;
mod utility;

pub use data_structures::*;
pub use error::{PlotError, PlotResult};
pub use float_helper::{Bounds, NonNanF64};
pub use utility::load_optional_json;
