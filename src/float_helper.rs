use crate::data_structures::Coordinate;
use std::cmp::Ordering;
use std::ops::Range;

// f64 has no total order because of NaN. Coordinates come straight from text files and
// "nan" parses fine, so min/max over them goes through this wrapper which refuses NaN.

#[derive(PartialEq, PartialOrd, Copy, Clone, Debug)]
pub struct NonNanF64(pub f64);

impl NonNanF64 {
    pub fn new(val: f64) -> Option<NonNanF64> {
        if val.is_nan() {
            None
        } else {
            Some(NonNanF64(val))
        }
    }
}

impl Eq for NonNanF64 {}

impl Ord for NonNanF64 {
    fn cmp(&self, other: &NonNanF64) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

/// Axis ranges of a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    pub lon: Range<f64>,
    pub lat: Range<f64>,
}

impl Bounds {
    /// Bounding box of the finite-ordered points, widened by `padding` (a fraction of the extent).
    /// Falls back to the unit square when no point is usable.
    pub fn of<'a>(points: impl Iterator<Item = &'a Coordinate>, padding: f64) -> Bounds {
        let mut lons = Vec::new();
        let mut lats = Vec::new();
        for &(lon, lat) in points {
            if let (Some(lon), Some(lat)) = (NonNanF64::new(lon), NonNanF64::new(lat)) {
                lons.push(lon);
                lats.push(lat);
            }
        }

        Bounds {
            lon: padded(&lons, padding),
            lat: padded(&lats, padding),
        }
    }
}

fn padded(values: &[NonNanF64], padding: f64) -> Range<f64> {
    let (min, max) = match (values.iter().min(), values.iter().max()) {
        (Some(min), Some(max)) => (min.0, max.0),
        _ => return 0.0..1.0,
    };
    let extent = max - min;
    if extent == 0.0 || !extent.is_finite() {
        // single point (or infinities): give the axis some room so plotters has a range
        let center = if min.is_finite() { min } else { 0.0 };
        let half = 0.01 * center.abs().max(1.0);
        return (center - half)..(center + half);
    }
    (min - extent * padding)..(max + extent * padding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_rejected() {
        assert!(NonNanF64::new(f64::NAN).is_none());
        assert_eq!(NonNanF64::new(1.5), Some(NonNanF64(1.5)));
    }

    #[test]
    fn bounds_are_padded() {
        let points = vec![(0.0, 10.0), (10.0, 20.0)];
        let bounds = Bounds::of(points.iter(), 0.1);
        assert_eq!(bounds.lon, -1.0..11.0);
        assert_eq!(bounds.lat, 9.0..21.0);
    }

    #[test]
    fn nan_points_do_not_poison_bounds() {
        let points = vec![(f64::NAN, 1.0), (1.0, 1.0), (3.0, 5.0)];
        let bounds = Bounds::of(points.iter(), 0.0);
        assert_eq!(bounds.lon, 1.0..3.0);
        assert_eq!(bounds.lat, 1.0..5.0);
    }

    #[test]
    fn degenerate_extent_gets_widened() {
        let points = vec![(4.9, 52.37)];
        let bounds = Bounds::of(points.iter(), 0.02);
        assert!(bounds.lon.start < 4.9 && bounds.lon.end > 4.9);
        assert!(bounds.lat.start < 52.37 && bounds.lat.end > 52.37);
    }

    #[test]
    fn empty_input_uses_unit_square() {
        let bounds = Bounds::of(std::iter::empty(), 0.02);
        assert_eq!(bounds, Bounds { lon: 0.0..1.0, lat: 0.0..1.0 });
    }
}
