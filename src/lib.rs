pub mod geokeys;
pub mod model;
pub mod projection;
pub mod resolver;

pub use crate::geokeys::{GeoKeyTable, GeoKeyValue, TagSet};
pub use crate::model::{
    AffinePlacement, Datum, GcpMethod, GcpPoint, GeocodingModel, Hemisphere, ProjectionKind,
    TiePointGrid,
};
pub use crate::projection::{ProjectionRegistry, TransformKind, WellKnownRegistry};
pub use crate::resolver::{resolve, resolve_with_registry};
