//! The resolved geocoding union

use crate::model::datum::Datum;
use crate::model::gcp::{GcpMethod, GcpPoint};
use crate::model::grid::TiePointGrid;
use crate::model::placement::AffinePlacement;
use crate::model::projection::ProjectionKind;

/// The geocoding resolved for one image
///
/// Exactly one variant is produced per resolution. `None` means no
/// geocoding could be derived from the metadata; it is a valid terminal
/// state, not an error, since geocoding is an optional enhancement to a
/// raster product.
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodingModel {
    /// Analytic map projection with an affine raster placement
    MapProjected {
        projection: ProjectionKind,
        placement: AffinePlacement,
        datum: Datum,
    },
    /// Bilinear interpolation over a rectangular tie-point grid pair
    TiePointInterpolated {
        lat_grid: TiePointGrid,
        lon_grid: TiePointGrid,
        datum: Datum,
    },
    /// Polynomial best-fit warp over ground control points
    GroundControlPolynomial {
        points: Vec<GcpPoint>,
        method: GcpMethod,
        datum: Datum,
    },
    /// No geocoding could be resolved
    None,
}

impl GeocodingModel {
    /// Whether any geocoding was resolved
    pub fn is_resolved(&self) -> bool {
        !matches!(self, GeocodingModel::None)
    }

    /// The datum of the resolved geocoding, if any
    pub fn datum(&self) -> Option<Datum> {
        match self {
            GeocodingModel::MapProjected { datum, .. }
            | GeocodingModel::TiePointInterpolated { datum, .. }
            | GeocodingModel::GroundControlPolynomial { datum, .. } => Some(*datum),
            GeocodingModel::None => None,
        }
    }
}
