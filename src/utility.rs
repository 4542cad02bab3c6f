use crate::error::{PlotError, PlotResult};
use serde::de::DeserializeOwned;
use std::path::Path;

// Macro which expands into color definition
#[macro_export]
macro_rules! predefined_color {
    ($name:ident, $r:expr, $g:expr, $b:expr, $doc:expr) => {
        #[doc = $doc]
        pub const $name: plotters::style::RGBColor = plotters::style::RGBColor($r, $g, $b);
    };

    ($name:ident, $r:expr, $g:expr, $b:expr, $a: expr, $doc:expr) => {
        #[doc = $doc]
        pub const $name: plotters::style::RGBAColor = plotters::style::RGBAColor($r, $g, $b, $a);
    }
}

// Loads a JSON file and decodes it into T. A missing file is not an error, it yields None.
pub fn load_optional_json<T: DeserializeOwned>(path: &Path) -> PlotResult<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let bytes = std::fs::read(path).map_err(|e| PlotError::io(path, e))?;
    Ok(Some(serde_json::from_slice(&bytes)?))
}

// "OSLO" -> "Oslo"
pub fn capitalize(code: &str) -> String {
    let mut chars = code.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
