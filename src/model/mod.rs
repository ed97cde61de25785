//! Geocoding data model
//!
//! The output side of resolution: datum, placement, projection kind and
//! the final `GeocodingModel` union, plus the tie-point grid and ground
//! control point records the interpolated and polynomial strategies emit.

mod datum;
mod gcp;
mod geocoding;
mod grid;
mod placement;
mod projection;

pub use self::datum::Datum;
pub use self::gcp::{GcpMethod, GcpPoint};
pub use self::geocoding::GeocodingModel;
pub use self::grid::TiePointGrid;
pub use self::placement::AffinePlacement;
pub use self::projection::{Hemisphere, ProjectionKind};
