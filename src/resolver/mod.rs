//! Geo-referencing resolution
//!
//! The resolver inspects a decoded GeoKey directory and the baseline geo
//! tags and produces one `GeocodingModel`: the mapping between pixel and
//! ground coordinates for a raster image. Resolution is a pure function
//! of its inputs; it allocates only local data, never blocks and never
//! fails — unsupported or malformed metadata terminates in
//! `GeocodingModel::None`.

pub mod affine;
pub mod builders;
pub mod datum;
pub mod tiepoints;
pub mod utm;

#[cfg(test)]
mod tests;

use log::debug;

use crate::geokeys::constants::{geo_keys, model_types, raster_types};
use crate::geokeys::{get_code_name, GeoKeyTable, TagSet};
use crate::model::{AffinePlacement, Datum, GeocodingModel, ProjectionKind};
use crate::projection::{ProjectionRegistry, TransformKind, WellKnownRegistry};

/// Resolves the geocoding for one image with the built-in projection
/// defaults
///
/// See [`resolve_with_registry`] for supplying a different parameter
/// source.
pub fn resolve(table: &GeoKeyTable, tags: &TagSet) -> GeocodingModel {
    resolve_with_registry(table, tags, &WellKnownRegistry)
}

/// Resolves the geocoding for one image
///
/// Routes on the GTModelTypeGeoKey: projected metadata goes through the
/// UTM fast path or the user-defined projection builders, geographic
/// metadata through the identity or tie-point paths. A missing or
/// unsupported model type yields `GeocodingModel::None`.
pub fn resolve_with_registry(
    table: &GeoKeyTable,
    tags: &TagSet,
    registry: &dyn ProjectionRegistry,
) -> GeocodingModel {
    if let Some(citation) = table.get_ascii(geo_keys::GT_CITATION) {
        debug!("CRS citation: {}", citation);
    }
    if let Some(citation) = table.get_ascii(geo_keys::PCS_CITATION) {
        debug!("PCS citation: {}", citation);
    }

    match table.get_int(geo_keys::GT_MODEL_TYPE) {
        Some(model_types::PROJECTED) => resolve_projected(table, tags, registry),
        Some(model_types::GEOGRAPHIC) => resolve_geographic(table, tags),
        Some(other) => {
            debug!("unsupported model type {} ({}), no geocoding",
                   other, get_code_name("model_type", other as u16));
            GeocodingModel::None
        }
        None => {
            debug!("no GTModelTypeGeoKey, no geocoding");
            GeocodingModel::None
        }
    }
}

/// Resolves the projected path
///
/// A PCS code inside the WGS 84 UTM ranges resolves directly; the
/// user-defined marker dispatches to the projection builders via the
/// ProjCoordTransGeoKey. Anything else is unsupported.
fn resolve_projected(
    table: &GeoKeyTable,
    tags: &TagSet,
    registry: &dyn ProjectionRegistry,
) -> GeocodingModel {
    let pcs_code = match table.get_int(geo_keys::PROJECTED_CS_TYPE) {
        Some(code) => code,
        None => {
            debug!("projected model without ProjectedCSTypeGeoKey, no geocoding");
            return GeocodingModel::None;
        }
    };

    if let Some(projection) = utm::classify_pcs(pcs_code) {
        // the supported UTM ranges are the EPSG WGS84/UTM family
        return GeocodingModel::MapProjected {
            projection,
            placement: projected_placement(table, tags),
            datum: Datum::Wgs84,
        };
    }

    if pcs_code == geo_keys::USER_DEFINED && is_user_defined_projection(table) {
        let kind = table
            .get_int(geo_keys::PROJ_COORD_TRANS)
            .and_then(TransformKind::from_coord_trans_code);
        if let Some(kind) = kind {
            let projection = builders::build_projection(table, kind, registry);
            return GeocodingModel::MapProjected {
                projection,
                placement: projected_placement(table, tags),
                datum: datum::resolve(table),
            };
        }
    }

    debug!("unsupported PCS code {}, no geocoding", pcs_code);
    GeocodingModel::None
}

fn is_user_defined_projection(table: &GeoKeyTable) -> bool {
    table.get_int(geo_keys::PROJECTION) == Some(geo_keys::USER_DEFINED)
}

/// Resolves the geographic path
///
/// A ModelTransformation tag places the raster analytically with the
/// identity projection; otherwise the tie points decide. Neither tag
/// present means no geocoding.
fn resolve_geographic(table: &GeoKeyTable, tags: &TagSet) -> GeocodingModel {
    if let Some(matrix) = tags.transformation.as_deref() {
        let offset = raster_pixel_offset(table);
        let mut placement = AffinePlacement::at_pixel(offset, offset);
        affine::apply_transformation(&mut placement, matrix);
        GeocodingModel::MapProjected {
            projection: ProjectionKind::Identity,
            placement,
            datum: Datum::Wgs84,
        }
    } else if tags.tie_points.is_some() {
        tiepoints::analyze(table, tags)
    } else {
        debug!("geographic model without transformation or tie points, no geocoding");
        GeocodingModel::None
    }
}

/// Placement of a projected raster
///
/// Priority order: ModelTransformation, then tie point plus pixel scale,
/// then pixel-center defaults.
fn projected_placement(table: &GeoKeyTable, tags: &TagSet) -> AffinePlacement {
    if let Some(matrix) = tags.transformation.as_deref() {
        let offset = raster_pixel_offset(table);
        let mut placement = AffinePlacement::at_pixel(offset, offset);
        affine::apply_transformation(&mut placement, matrix);
        return placement;
    }

    let mut placement = AffinePlacement::at_pixel(0.5, 0.5);
    if let Some(scale) = tags.valid_pixel_scale() {
        placement.pixel_size = (scale[0], scale[1]);
    }
    if let Some(tie_points) = tags.tie_points.as_deref() {
        if tie_points.len() >= 6 {
            placement.pixel_origin = (tie_points[0], tie_points[1]);
            placement.geo_origin = (tie_points[3], tie_points[4]);
        }
    }
    placement
}

/// Reference pixel offset implied by the GTRasterTypeGeoKey
///
/// Pixel-is-area is the GeoTIFF default and anchors at the pixel center
/// (0.5); pixel-is-point anchors at the sample position itself.
fn raster_pixel_offset(table: &GeoKeyTable) -> f64 {
    match table.get_int(geo_keys::GT_RASTER_TYPE) {
        Some(raster_types::PIXEL_IS_POINT) => 0.0,
        _ => 0.5,
    }
}
