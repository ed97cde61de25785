//! Projection parameter registry
//!
//! Default parameter vectors for the supported map projections. The
//! registry is an explicit dependency of the projection builders rather
//! than a process-wide singleton, so alternative parameter sources can be
//! supplied per call.

mod registry;

pub use self::registry::{ProjectionRegistry, TransformKind, WellKnownRegistry};
