//! Per-projection parameter assembly
//!
//! Each supported transformation method has a fixed parameter field
//! order. The builder seeds the vector from the registry's defaults and
//! overwrites exactly the fields the GeoKey directory provides. Where
//! GeoTIFF allows two keys for the same field (natural origin vs
//! projection center, false origin vs natural origin), the override
//! table lists the primary key first and the fallback second, so the
//! precedence is explicit per field.

use log::debug;

use crate::geokeys::constants::geo_keys;
use crate::geokeys::{get_key_name, GeoKeyTable};
use crate::model::ProjectionKind;
use crate::projection::{ProjectionRegistry, TransformKind};

/// One parameter field override: target index, primary key, optional fallback
struct FieldOverride {
    index: usize,
    primary: u16,
    fallback: Option<u16>,
}

impl FieldOverride {
    const fn key(index: usize, primary: u16) -> Self {
        FieldOverride { index, primary, fallback: None }
    }

    const fn key_or(index: usize, primary: u16, fallback: u16) -> Self {
        FieldOverride { index, primary, fallback: Some(fallback) }
    }
}

// Field orders follow the transformation methods' parameter vectors:
// [0] semi-major axis, [1] semi-minor axis, [2] origin/center latitude,
// [3] origin/center longitude, then method-specific fields.

const TRANSVERSE_MERCATOR_FIELDS: [FieldOverride; 7] = [
    FieldOverride::key(0, geo_keys::GEOG_SEMI_MAJOR_AXIS),
    FieldOverride::key(1, geo_keys::GEOG_SEMI_MINOR_AXIS),
    FieldOverride::key_or(2, geo_keys::PROJ_NAT_ORIGIN_LAT, geo_keys::PROJ_CENTER_LAT),
    FieldOverride::key_or(3, geo_keys::PROJ_NAT_ORIGIN_LONG, geo_keys::PROJ_CENTER_LONG),
    FieldOverride::key(4, geo_keys::PROJ_SCALE_AT_NAT_ORIGIN),
    FieldOverride::key(5, geo_keys::PROJ_FALSE_EASTING),
    FieldOverride::key(6, geo_keys::PROJ_FALSE_NORTHING),
];

const LAMBERT_CONF_CONIC_FIELDS: [FieldOverride; 7] = [
    FieldOverride::key(0, geo_keys::GEOG_SEMI_MAJOR_AXIS),
    FieldOverride::key(1, geo_keys::GEOG_SEMI_MINOR_AXIS),
    FieldOverride::key_or(2, geo_keys::PROJ_FALSE_ORIGIN_LAT, geo_keys::PROJ_NAT_ORIGIN_LAT),
    FieldOverride::key_or(3, geo_keys::PROJ_FALSE_ORIGIN_LONG, geo_keys::PROJ_NAT_ORIGIN_LONG),
    FieldOverride::key(4, geo_keys::PROJ_STD_PARALLEL_1),
    FieldOverride::key(5, geo_keys::PROJ_STD_PARALLEL_2),
    FieldOverride::key(6, geo_keys::PROJ_SCALE_AT_NAT_ORIGIN),
];

const POLAR_STEREOGRAPHIC_FIELDS: [FieldOverride; 7] = [
    FieldOverride::key(0, geo_keys::GEOG_SEMI_MAJOR_AXIS),
    FieldOverride::key(1, geo_keys::GEOG_SEMI_MINOR_AXIS),
    FieldOverride::key_or(2, geo_keys::PROJ_CENTER_LAT, geo_keys::PROJ_NAT_ORIGIN_LAT),
    FieldOverride::key_or(3, geo_keys::PROJ_CENTER_LONG, geo_keys::PROJ_NAT_ORIGIN_LONG),
    FieldOverride::key(4, geo_keys::PROJ_SCALE_AT_NAT_ORIGIN),
    FieldOverride::key(5, geo_keys::PROJ_FALSE_EASTING),
    FieldOverride::key(6, geo_keys::PROJ_FALSE_NORTHING),
];

const ALBERS_EQUAL_AREA_FIELDS: [FieldOverride; 9] = [
    FieldOverride::key(0, geo_keys::GEOG_SEMI_MAJOR_AXIS),
    FieldOverride::key(1, geo_keys::GEOG_SEMI_MINOR_AXIS),
    FieldOverride::key(2, geo_keys::PROJ_NAT_ORIGIN_LAT),
    FieldOverride::key(3, geo_keys::PROJ_NAT_ORIGIN_LONG),
    FieldOverride::key(4, geo_keys::PROJ_STD_PARALLEL_1),
    FieldOverride::key(5, geo_keys::PROJ_STD_PARALLEL_2),
    FieldOverride::key(6, geo_keys::PROJ_SCALE_AT_NAT_ORIGIN),
    FieldOverride::key(7, geo_keys::PROJ_FALSE_EASTING),
    FieldOverride::key(8, geo_keys::PROJ_FALSE_NORTHING),
];

/// Assembles the parameter vector for a user-defined projection
///
/// Seeds from the registry's defaults for the method and overwrites each
/// field for which the directory carries the primary key, or failing
/// that the fallback key.
pub fn build_projection(
    table: &GeoKeyTable,
    kind: TransformKind,
    registry: &dyn ProjectionRegistry,
) -> ProjectionKind {
    let mut params = registry.default_params(kind);
    debug_assert_eq!(params.len(), kind.param_count());

    let fields: &[FieldOverride] = match kind {
        TransformKind::TransverseMercator => &TRANSVERSE_MERCATOR_FIELDS,
        TransformKind::LambertConformalConic => &LAMBERT_CONF_CONIC_FIELDS,
        TransformKind::PolarStereographic => &POLAR_STEREOGRAPHIC_FIELDS,
        TransformKind::AlbersEqualArea => &ALBERS_EQUAL_AREA_FIELDS,
    };

    for field in fields {
        let value = table
            .get_double(field.primary)
            .or_else(|| field.fallback.and_then(|key| table.get_double(key)));
        if let Some(value) = value {
            debug!("projection param [{}] <- {} = {}",
                   field.index, get_key_name(field.primary), value);
            params[field.index] = value;
        }
    }

    kind.into_projection(params)
}
