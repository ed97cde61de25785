//! Shared helpers for resolver tests

use crate::geokeys::{GeoKeyTable, GeoKeyValue};

/// Builds a table from (key, int) pairs
pub fn int_table(entries: &[(u16, i32)]) -> GeoKeyTable {
    GeoKeyTable::from_entries(
        entries
            .iter()
            .map(|(key, value)| (*key, GeoKeyValue::Int(*value))),
    )
}

/// Builds a table mixing int and single-double entries
pub fn table(ints: &[(u16, i32)], doubles: &[(u16, f64)]) -> GeoKeyTable {
    let int_entries = ints
        .iter()
        .map(|(key, value)| (*key, GeoKeyValue::Int(*value)));
    let double_entries = doubles
        .iter()
        .map(|(key, value)| (*key, GeoKeyValue::Doubles(vec![*value])));
    GeoKeyTable::from_entries(int_entries.chain(double_entries))
}

/// Builds a flat tie-point array from (pixel_x, pixel_y, lon, lat) tuples
///
/// The k and z slots are zero, matching common producer output.
pub fn tie_points(points: &[(f64, f64, f64, f64)]) -> Vec<f64> {
    let mut values = Vec::with_capacity(points.len() * 6);
    for (x, y, lon, lat) in points {
        values.extend_from_slice(&[*x, *y, 0.0, *lon, *lat, 0.0]);
    }
    values
}

/// A 4x4 row-major ModelTransformation matrix from its 2-D affine part
pub fn transformation(m00: f64, m01: f64, m02: f64, m10: f64, m11: f64, m12: f64) -> Vec<f64> {
    vec![
        m00, m01, 0.0, m02,
        m10, m11, 0.0, m12,
        0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]
}
