//! Ground control point records

/// One ground control point: a pixel/geographic correspondence
///
/// Named `gcp_<index>` after the tie point's position in the tie-point
/// tag, so names stay stable when malformed entries are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct GcpPoint {
    /// Point name, `gcp_<index>`
    pub name: String,
    /// Raster position (x, y)
    pub pixel_pos: (f64, f64),
    /// Geographic position (longitude, latitude) in degrees
    pub geo_pos: (f64, f64),
}

impl GcpPoint {
    pub fn new(index: usize, pixel_pos: (f64, f64), geo_pos: (f64, f64)) -> Self {
        GcpPoint {
            name: format!("gcp_{}", index),
            pixel_pos,
            geo_pos,
        }
    }
}

/// Polynomial warp method chosen for a GCP set
///
/// The term count is the number of coefficients of a full 2-D polynomial
/// of the given degree, (d+1)(d+2)/2. A method is applicable when at
/// least that many usable points are available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GcpMethod {
    Polynomial1,
    Polynomial2,
    Polynomial3,
}

impl GcpMethod {
    /// Polynomial degree of this method
    pub fn degree(&self) -> u8 {
        match self {
            GcpMethod::Polynomial1 => 1,
            GcpMethod::Polynomial2 => 2,
            GcpMethod::Polynomial3 => 3,
        }
    }

    /// Minimum number of points required to fit this method
    pub fn term_count(&self) -> usize {
        match self {
            GcpMethod::Polynomial1 => 3,
            GcpMethod::Polynomial2 => 6,
            GcpMethod::Polynomial3 => 10,
        }
    }

    /// Highest-degree method the given point count supports
    pub fn for_point_count(count: usize) -> Option<GcpMethod> {
        if count >= GcpMethod::Polynomial3.term_count() {
            Some(GcpMethod::Polynomial3)
        } else if count >= GcpMethod::Polynomial2.term_count() {
            Some(GcpMethod::Polynomial2)
        } else if count >= GcpMethod::Polynomial1.term_count() {
            Some(GcpMethod::Polynomial1)
        } else {
            None
        }
    }
}
