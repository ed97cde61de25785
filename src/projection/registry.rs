//! Default projection parameters

use crate::geokeys::constants::coord_trans;
use crate::model::ProjectionKind;

/// WGS 84 ellipsoid semi-major axis in meters
const WGS84_SEMI_MAJOR: f64 = 6_378_137.0;
/// WGS 84 ellipsoid semi-minor axis in meters
const WGS84_SEMI_MINOR: f64 = 6_356_752.3;

/// The user-defined transformation methods the resolver supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    TransverseMercator,
    LambertConformalConic,
    PolarStereographic,
    AlbersEqualArea,
}

impl TransformKind {
    /// Maps a ProjCoordTransGeoKey code to a supported method
    pub fn from_coord_trans_code(code: i32) -> Option<TransformKind> {
        match code {
            coord_trans::TRANSVERSE_MERCATOR => Some(TransformKind::TransverseMercator),
            coord_trans::LAMBERT_CONF_CONIC => Some(TransformKind::LambertConformalConic),
            coord_trans::POLAR_STEREOGRAPHIC => Some(TransformKind::PolarStereographic),
            coord_trans::ALBERS_EQUAL_AREA => Some(TransformKind::AlbersEqualArea),
            _ => None,
        }
    }

    /// Length of this method's parameter vector
    pub fn param_count(&self) -> usize {
        match self {
            TransformKind::AlbersEqualArea => 9,
            _ => 7,
        }
    }

    /// Wraps an assembled parameter vector in the matching projection kind
    pub fn into_projection(self, params: Vec<f64>) -> ProjectionKind {
        match self {
            TransformKind::TransverseMercator => ProjectionKind::TransverseMercator(params),
            TransformKind::LambertConformalConic => ProjectionKind::LambertConformalConic(params),
            TransformKind::PolarStereographic => ProjectionKind::PolarStereographic(params),
            TransformKind::AlbersEqualArea => ProjectionKind::AlbersEqualArea(params),
        }
    }
}

/// Source of per-projection default parameter vectors
///
/// The builders seed their output from these defaults and overwrite only
/// the fields the GeoKey directory provides.
pub trait ProjectionRegistry {
    /// Default parameter vector for the given method, in the method's
    /// fixed field order
    fn default_params(&self, kind: TransformKind) -> Vec<f64>;
}

/// Built-in defaults seeded on the WGS 84 ellipsoid
///
/// Origins default to 0, scale factors to 1; the conic methods use the
/// conventional standard parallels 33/45 (Lambert) and 29.5/45.5
/// (Albers). Files normally override every field that matters to them.
#[derive(Debug, Clone, Copy, Default)]
pub struct WellKnownRegistry;

impl ProjectionRegistry for WellKnownRegistry {
    fn default_params(&self, kind: TransformKind) -> Vec<f64> {
        let a = WGS84_SEMI_MAJOR;
        let b = WGS84_SEMI_MINOR;
        match kind {
            // semi-major, semi-minor, origin lat, origin long,
            // scale at origin, false easting, false northing
            TransformKind::TransverseMercator => vec![a, b, 0.0, 0.0, 1.0, 0.0, 0.0],
            // semi-major, semi-minor, origin lat, origin long,
            // std parallel 1, std parallel 2, scale at origin
            TransformKind::LambertConformalConic => vec![a, b, 0.0, 0.0, 33.0, 45.0, 1.0],
            // semi-major, semi-minor, center lat, center long,
            // scale at origin, false easting, false northing
            TransformKind::PolarStereographic => vec![a, b, 90.0, 0.0, 1.0, 0.0, 0.0],
            // semi-major, semi-minor, origin lat, origin long, std parallel 1,
            // std parallel 2, scale at origin, false easting, false northing
            TransformKind::AlbersEqualArea => {
                vec![a, b, 0.0, 0.0, 29.5, 45.5, 1.0, 0.0, 0.0]
            }
        }
    }
}
