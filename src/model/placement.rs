//! Affine raster placement

/// Placement of a raster in map coordinates
///
/// The common output shape of the projected paths and of the geographic
/// identity path: a reference pixel, the map position of that pixel, the
/// pixel size in map units and a rotation. Shear beyond the single
/// rotation angle is not representable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffinePlacement {
    /// Reference pixel position (x, y) in raster coordinates
    pub pixel_origin: (f64, f64),
    /// Map position (easting/longitude, northing/latitude) of the reference pixel
    pub geo_origin: (f64, f64),
    /// Pixel size (x, y) in map units, y positive for a north-up raster
    pub pixel_size: (f64, f64),
    /// Rotation of the raster against the map grid, in degrees
    pub orientation_degrees: f64,
}

impl AffinePlacement {
    /// Placement with the given reference pixel, no offset, unit pixels
    pub fn at_pixel(pixel_x: f64, pixel_y: f64) -> Self {
        AffinePlacement {
            pixel_origin: (pixel_x, pixel_y),
            geo_origin: (0.0, 0.0),
            pixel_size: (1.0, 1.0),
            orientation_degrees: 0.0,
        }
    }
}

impl Default for AffinePlacement {
    fn default() -> Self {
        AffinePlacement::at_pixel(0.0, 0.0)
    }
}
