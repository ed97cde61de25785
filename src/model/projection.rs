//! Projection classification

/// UTM hemisphere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
}

/// The analytic projection a `MapProjected` result is expressed in
///
/// The user-defined variants carry their assembled parameter vector in
/// the fixed field order of the corresponding transformation method
/// (semi-major axis, semi-minor axis, origin, then method-specific
/// fields). The parameters feed an external projection-math
/// implementation; this crate only assembles them.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionKind {
    /// Identity mapping, used for plain lat/lon placement
    Identity,
    /// WGS 84 UTM zone, derived from the PCS code
    Utm { zone: u8, hemisphere: Hemisphere },
    /// Transverse Mercator, 7 parameters
    TransverseMercator(Vec<f64>),
    /// Lambert conformal conic, 7 parameters
    LambertConformalConic(Vec<f64>),
    /// Polar/general stereographic, 7 parameters
    PolarStereographic(Vec<f64>),
    /// Albers equal-area conic, 9 parameters
    AlbersEqualArea(Vec<f64>),
}
