//! Tests for tie-point analysis

use crate::geokeys::constants::{epsg, geo_keys, model_types};
use crate::geokeys::{GeoKeyTable, TagSet};
use crate::model::{Datum, GcpMethod, GeocodingModel, ProjectionKind};
use crate::resolver::tiepoints;
use crate::resolver::tests::test_utils::{int_table, tie_points};

fn geographic_table() -> GeoKeyTable {
    int_table(&[(geo_keys::GT_MODEL_TYPE, model_types::GEOGRAPHIC)])
}

/// A 2x2 regular grid of tie points
fn regular_grid() -> Vec<f64> {
    tie_points(&[
        (0.0, 0.0, 10.0, 54.0),
        (100.0, 0.0, 11.0, 54.0),
        (0.0, 100.0, 10.0, 53.0),
        (100.0, 100.0, 11.0, 53.0),
    ])
}

#[test]
fn test_single_tie_point_yields_identity_projection() {
    let tags = TagSet::new()
        .with_tie_points(tie_points(&[(0.5, 0.5, 10.0, 54.0)]))
        .with_pixel_scale(vec![0.01, 0.01, 0.0]);

    match tiepoints::analyze(&geographic_table(), &tags) {
        GeocodingModel::MapProjected { projection, placement, .. } => {
            assert_eq!(projection, ProjectionKind::Identity);
            assert_eq!(placement.pixel_origin, (0.5, 0.5));
            assert_eq!(placement.geo_origin, (10.0, 54.0));
            assert_eq!(placement.pixel_size, (0.01, 0.01));
        }
        other => panic!("expected MapProjected, got {:?}", other),
    }
}

#[test]
fn test_single_tie_point_without_scale_uses_unit_pixels() {
    let tags = TagSet::new().with_tie_points(tie_points(&[(0.0, 0.0, 10.0, 54.0)]));

    match tiepoints::analyze(&geographic_table(), &tags) {
        GeocodingModel::MapProjected { placement, .. } => {
            assert_eq!(placement.pixel_size, (1.0, 1.0));
        }
        other => panic!("expected MapProjected, got {:?}", other),
    }
}

#[test]
fn test_regular_grid_yields_interpolation() {
    let tags = TagSet::new().with_tie_points(regular_grid());

    match tiepoints::analyze(&geographic_table(), &tags) {
        GeocodingModel::TiePointInterpolated { lat_grid, lon_grid, .. } => {
            assert_eq!(lat_grid.name, "latitude");
            assert_eq!(lon_grid.name, "longitude");
            assert_eq!((lat_grid.width, lat_grid.height), (2, 2));
            assert_eq!(lat_grid.offset, (0.0, 0.0));
            assert_eq!(lat_grid.spacing, (100.0, 100.0));

            // cell (1, 0) is the tie point at pixel (100, 0)
            assert_eq!(lon_grid.value_at(1, 0), Some(11.0));
            assert_eq!(lat_grid.value_at(1, 0), Some(54.0));
            // cell (0, 1) is the tie point at pixel (0, 100)
            assert_eq!(lat_grid.value_at(0, 1), Some(53.0));
        }
        other => panic!("expected TiePointInterpolated, got {:?}", other),
    }
}

#[test]
fn test_equidistance_tolerance() {
    // x coordinates 10,20,30,40: every gap matches the mean gap
    let regular = tie_points(&[
        (10.0, 0.0, 1.0, 1.0),
        (20.0, 0.0, 2.0, 1.0),
        (30.0, 0.0, 3.0, 1.0),
        (40.0, 0.0, 4.0, 1.0),
    ]);
    let tags = TagSet::new().with_tie_points(regular);
    assert!(matches!(
        tiepoints::analyze(&geographic_table(), &tags),
        GeocodingModel::TiePointInterpolated { .. }
    ));

    // one gap of 15 breaks the regularity, so this routes to GCPs
    let irregular = tie_points(&[
        (10.0, 0.0, 1.0, 1.0),
        (20.0, 0.0, 2.0, 1.0),
        (30.0, 0.0, 3.0, 1.0),
        (45.0, 0.0, 4.0, 1.0),
    ]);
    let tags = TagSet::new().with_tie_points(irregular);
    assert!(matches!(
        tiepoints::analyze(&geographic_table(), &tags),
        GeocodingModel::GroundControlPolynomial { .. }
    ));
}

#[test]
fn test_single_distinct_axis_value_is_trivially_equidistant() {
    // all tie points share y=0: one distinct value must not divide by zero
    let tags = TagSet::new().with_tie_points(tie_points(&[
        (0.0, 0.0, 10.0, 54.0),
        (50.0, 0.0, 10.5, 54.0),
        (100.0, 0.0, 11.0, 54.0),
    ]));

    match tiepoints::analyze(&geographic_table(), &tags) {
        GeocodingModel::TiePointInterpolated { lat_grid, .. } => {
            assert_eq!((lat_grid.width, lat_grid.height), (3, 1));
            assert_eq!(lat_grid.spacing.1, 0.0);
        }
        other => panic!("expected TiePointInterpolated, got {:?}", other),
    }
}

#[test]
fn test_nan_routes_to_gcp_and_is_skipped() {
    let mut points = regular_grid();
    // a fifth point with NaN longitude breaks interpolation
    points.extend_from_slice(&[50.0, 50.0, 0.0, f64::NAN, 53.5, 0.0]);
    let tags = TagSet::new().with_tie_points(points);

    match tiepoints::analyze(&geographic_table(), &tags) {
        GeocodingModel::GroundControlPolynomial { points, method, .. } => {
            assert_eq!(points.len(), 4);
            assert_eq!(method, GcpMethod::Polynomial1);
            // names keep the original tie-point index
            assert_eq!(points[3].name, "gcp_3");
        }
        other => panic!("expected GroundControlPolynomial, got {:?}", other),
    }
}

#[test]
fn test_gcp_names_stay_stable_across_skips() {
    let mut points = tie_points(&[(0.0, 0.0, 1.0, 1.0)]);
    points.extend_from_slice(&[f64::NAN, 0.0, 0.0, 2.0, 1.0, 0.0]);
    points.extend(tie_points(&[
        (20.0, 0.0, 3.0, 1.0),
        (30.0, 10.0, 4.0, 1.0),
    ]));
    let tags = TagSet::new().with_tie_points(points);

    match tiepoints::analyze(&geographic_table(), &tags) {
        GeocodingModel::GroundControlPolynomial { points, .. } => {
            let names: Vec<&str> = points.iter().map(|p| p.name.as_str()).collect();
            assert_eq!(names, ["gcp_0", "gcp_2", "gcp_3"]);
        }
        other => panic!("expected GroundControlPolynomial, got {:?}", other),
    }
}

#[test]
fn test_too_few_usable_points_yields_none() {
    // three points, one NaN: two usable is below the degree-1 term count
    let mut points = tie_points(&[(0.0, 0.0, 1.0, 1.0), (10.0, 5.0, 2.0, 1.5)]);
    points.extend_from_slice(&[25.0, 0.0, 0.0, f64::NAN, 1.0, 0.0]);
    let tags = TagSet::new().with_tie_points(points);

    assert_eq!(tiepoints::analyze(&geographic_table(), &tags), GeocodingModel::None);
}

#[test]
fn test_polynomial_degree_scales_with_point_count() {
    // ten usable points on an irregular x axis allow a degree-3 fit
    let mut coords = Vec::new();
    for i in 0..10 {
        let x = (i as f64) * 10.0 + if i == 9 { 7.0 } else { 0.0 };
        coords.push((x, (i % 3) as f64 * 40.0, i as f64, 50.0 + i as f64));
    }
    let tags = TagSet::new().with_tie_points(tie_points(&coords));

    match tiepoints::analyze(&geographic_table(), &tags) {
        GeocodingModel::GroundControlPolynomial { method, .. } => {
            assert_eq!(method, GcpMethod::Polynomial3);
            assert_eq!(method.degree(), 3);
        }
        other => panic!("expected GroundControlPolynomial, got {:?}", other),
    }
}

#[test]
fn test_datum_flows_into_tie_point_result() {
    let table = int_table(&[
        (geo_keys::GT_MODEL_TYPE, model_types::GEOGRAPHIC),
        (geo_keys::GEOGRAPHIC_TYPE, epsg::GCS_WGS_72),
    ]);
    let tags = TagSet::new().with_tie_points(regular_grid());

    assert_eq!(tiepoints::analyze(&table, &tags).datum(), Some(Datum::Wgs72));
}

#[test]
fn test_global_longitude_shift() {
    // 0.5 degrees per pixel over 722 pixels spans the globe; the tie
    // point longitude -0.5 is within one pixel of zero
    let tags = TagSet::new()
        .with_tie_points(tie_points(&[(0.0, 0.0, -0.5, 90.0)]))
        .with_pixel_scale(vec![0.5, 0.5, 0.0])
        .with_image_width(722);

    match tiepoints::analyze(&geographic_table(), &tags) {
        GeocodingModel::MapProjected { placement, .. } => {
            assert_eq!(placement.geo_origin.0, -180.5);
        }
        other => panic!("expected MapProjected, got {:?}", other),
    }
}

#[test]
fn test_no_shift_without_image_width() {
    let tags = TagSet::new()
        .with_tie_points(tie_points(&[(0.0, 0.0, -0.5, 90.0)]))
        .with_pixel_scale(vec![0.5, 0.5, 0.0]);

    match tiepoints::analyze(&geographic_table(), &tags) {
        GeocodingModel::MapProjected { placement, .. } => {
            assert_eq!(placement.geo_origin.0, -0.5);
        }
        other => panic!("expected MapProjected, got {:?}", other),
    }
}

#[test]
fn test_no_shift_for_regional_raster() {
    // 0.01 degrees over 1000 pixels is 10 degrees, nowhere near global
    let tags = TagSet::new()
        .with_tie_points(tie_points(&[(0.0, 0.0, -0.5, 54.0)]))
        .with_pixel_scale(vec![0.01, 0.01, 0.0])
        .with_image_width(1000);

    match tiepoints::analyze(&geographic_table(), &tags) {
        GeocodingModel::MapProjected { placement, .. } => {
            assert_eq!(placement.geo_origin.0, -0.5);
        }
        other => panic!("expected MapProjected, got {:?}", other),
    }
}

#[test]
fn test_empty_tie_point_tag_yields_none() {
    let tags = TagSet::new().with_tie_points(vec![1.0, 2.0, 3.0]);
    assert_eq!(tiepoints::analyze(&geographic_table(), &tags), GeocodingModel::None);
}
