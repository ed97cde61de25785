//! Geodetic datum classification

/// Datum resolved from the GeographicTypeGeoKey
///
/// Only WGS 84 and WGS 72 are modeled. Any other geographic CS code is
/// recorded as `Unsupported` so callers can tell a real WGS 84 file from
/// the fallback; `effective()` performs the documented collapse to WGS 84.
/// User-defined datums are never modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Datum {
    Wgs84,
    Wgs72,
    /// Unrecognized GeographicTypeGeoKey code, geocoded as WGS 84
    Unsupported(u16),
}

impl Datum {
    /// The datum actually used for geocoding
    ///
    /// Unrecognized codes fall back to WGS 84.
    pub fn effective(&self) -> Datum {
        match self {
            Datum::Unsupported(_) => Datum::Wgs84,
            datum => *datum,
        }
    }
}
