//! Tie-point analysis
//!
//! A tie-point tag holds one pixel/geographic correspondence per six
//! doubles. A single tie point anchors the raster directly; several tie
//! points either form a regular grid suitable for interpolation or, when
//! the grid test fails, degrade to ground control points for a
//! polynomial warp.

use log::debug;

use crate::geokeys::{GeoKeyTable, TagSet};
use crate::model::{
    AffinePlacement, GcpMethod, GcpPoint, GeocodingModel, ProjectionKind, TiePointGrid,
};
use crate::resolver::datum;

// Relative tolerance of the grid regularity test: consecutive gaps may
// deviate from the mean gap by at most mean/100000.
const EQUIDISTANCE_TOLERANCE_DIVISOR: f64 = 100_000.0;

/// Resolves a geocoding from the tie-point tag
///
/// Dispatches on the tie-point count: one point places the raster with
/// an identity projection, several points go through the regularity test
/// and fall back to ground control points. A tag without a complete
/// six-double tuple yields `None`.
pub fn analyze(table: &GeoKeyTable, tags: &TagSet) -> GeocodingModel {
    let tie_points = match tags.tie_points.as_deref() {
        Some(values) if values.len() >= 6 => values,
        _ => return GeocodingModel::None,
    };

    let num_tie_points = tie_points.len() / 6;
    if num_tie_points == 1 {
        single_point_placement(table, tags, tie_points)
    } else if can_interpolate(tie_points) {
        interpolated_grid(table, tie_points)
    } else {
        debug!("tie points are not a regular grid, trying GCP polynomial");
        gcp_polynomial(table, tie_points)
    }
}

/// Places the raster from exactly one tie point
///
/// Pixel sizes come from the ModelPixelScale tag, defaulting to one map
/// unit per pixel. The result is map-projected with the identity
/// projection, never tie-point interpolated.
fn single_point_placement(table: &GeoKeyTable, tags: &TagSet, tie_points: &[f64]) -> GeocodingModel {
    let pixel_size = match tags.valid_pixel_scale() {
        Some(scale) => (scale[0], scale[1]),
        None => (1.0, 1.0),
    };

    let mut geo_x = tie_points[3];
    if is_global_shifted_180(tags, geo_x) {
        // global lat/lon raster with longitudes 0..360; recover -180..180
        debug!("global raster with 0..360 longitudes, shifting by -180");
        geo_x -= 180.0;
    }

    let placement = AffinePlacement {
        pixel_origin: (tie_points[0], tie_points[1]),
        geo_origin: (geo_x, tie_points[4]),
        pixel_size,
        orientation_degrees: 0.0,
    };

    GeocodingModel::MapProjected {
        projection: ProjectionKind::Identity,
        placement,
        datum: datum::resolve(table),
    }
}

/// Whether a single-tie-point raster spans the globe with a 0..360
/// longitude range
///
/// Requires the caller-supplied image width; without it the test is
/// never positive. The raster is global when the pixel scale covers at
/// least 360 degrees of longitude, and shifted when the tie-point
/// longitude sits within one pixel of zero.
fn is_global_shifted_180(tags: &TagSet, tie_point_lon: f64) -> bool {
    let width = match tags.image_width {
        Some(width) if width > 0 => width as f64,
        _ => return false,
    };
    let scale = match tags.valid_pixel_scale() {
        Some(scale) => scale,
        None => return false,
    };

    let width_in_degree = scale[0] * width;
    let is_global = width_in_degree.ceil() >= 360.0;
    let delta_x = (360.0 / width).ceil();
    is_global && tie_point_lon.abs() < delta_x
}

/// Whether the tie points form a regular rectangular grid
///
/// Any NaN disqualifies the set, as does either pixel axis failing the
/// equidistance test over its distinct coordinates.
fn can_interpolate(tie_points: &[f64]) -> bool {
    if tie_points.iter().any(|value| value.is_nan()) {
        return false;
    }
    let xs = distinct_sorted(tie_points, 0);
    let ys = distinct_sorted(tie_points, 1);
    is_equidistant(&xs) && is_equidistant(&ys)
}

/// Distinct values of one pixel axis, ascending
///
/// `offset` selects the axis: 0 for x, 1 for y.
fn distinct_sorted(tie_points: &[f64], offset: usize) -> Vec<f64> {
    let mut values: Vec<f64> = tie_points
        .chunks_exact(6)
        .map(|tuple| tuple[offset])
        .collect();
    values.sort_by(f64::total_cmp);
    values.dedup();
    values
}

/// Tests a sorted distinct value set for equal spacing
///
/// The expected gap is (max-min)/(count-1); every consecutive gap must
/// lie within the relative tolerance around it. A set with a single
/// value is trivially equidistant, avoiding the division by zero.
fn is_equidistant(values: &[f64]) -> bool {
    if values.len() <= 1 {
        return true;
    }
    let min = values[0];
    let max = values[values.len() - 1];
    let diff = (max - min) / (values.len() - 1) as f64;
    let tolerance = diff / EQUIDISTANCE_TOLERANCE_DIVISOR;
    let max_diff = diff + tolerance;
    let min_diff = diff - tolerance;

    values.windows(2).all(|pair| {
        let gap = pair[1] - pair[0];
        gap >= min_diff && gap <= max_diff
    })
}

/// Builds the latitude/longitude grid pair from a regular tie-point set
///
/// Grid dimensions are the distinct coordinate counts per axis; each tie
/// point lands at the cell indexed by its coordinate ranks. Cells no tie
/// point covers stay zero.
fn interpolated_grid(table: &GeoKeyTable, tie_points: &[f64]) -> GeocodingModel {
    let xs = distinct_sorted(tie_points, 0);
    let ys = distinct_sorted(tie_points, 1);
    let width = xs.len();
    let height = ys.len();

    let x_min = xs[0];
    let y_min = ys[0];
    let x_diff = axis_spacing(&xs);
    let y_diff = axis_spacing(&ys);

    let mut lats = vec![0.0f32; width * height];
    let mut lons = vec![0.0f32; width * height];
    for tuple in tie_points.chunks_exact(6) {
        // exact values out of the same array, so the ranks always exist
        let idx_x = xs.binary_search_by(|v| v.total_cmp(&tuple[0])).unwrap_or(0);
        let idx_y = ys.binary_search_by(|v| v.total_cmp(&tuple[1])).unwrap_or(0);
        let array_idx = idx_y * width + idx_x;
        lons[array_idx] = tuple[3] as f32;
        lats[array_idx] = tuple[4] as f32;
    }

    debug!("tie-point grid {}x{}, origin ({}, {}), spacing ({}, {})",
           width, height, x_min, y_min, x_diff, y_diff);

    let offset = (x_min, y_min);
    let spacing = (x_diff, y_diff);
    GeocodingModel::TiePointInterpolated {
        lat_grid: TiePointGrid::new("latitude", width, height, offset, spacing, lats),
        lon_grid: TiePointGrid::new("longitude", width, height, offset, spacing, lons),
        datum: datum::resolve(table),
    }
}

fn axis_spacing(values: &[f64]) -> f64 {
    if values.len() > 1 {
        (values[values.len() - 1] - values[0]) / (values.len() - 1) as f64
    } else {
        0.0
    }
}

/// Emits ground control points and picks a polynomial degree
///
/// Tuples containing NaN in any of their six fields are skipped, not
/// emitted; names keep the original tie-point index. The highest degree
/// whose term count the usable points cover wins. Too few usable points
/// for even a degree-1 fit means no geocoding.
fn gcp_polynomial(table: &GeoKeyTable, tie_points: &[f64]) -> GeocodingModel {
    let mut points = Vec::with_capacity(tie_points.len() / 6);
    for (index, tuple) in tie_points.chunks_exact(6).enumerate() {
        if tuple.iter().any(|value| value.is_nan()) {
            debug!("skipping tie point {} containing NaN", index);
            continue;
        }
        points.push(GcpPoint::new(index, (tuple[0], tuple[1]), (tuple[3], tuple[4])));
    }

    match GcpMethod::for_point_count(points.len()) {
        Some(method) => {
            debug!("{} usable GCPs, fitting polynomial degree {}", points.len(), method.degree());
            GeocodingModel::GroundControlPolynomial {
                points,
                method,
                datum: datum::resolve(table),
            }
        }
        None => {
            debug!("only {} usable GCPs, not enough for a degree-1 fit", points.len());
            GeocodingModel::None
        }
    }
}
