//! Baseline GeoTIFF geo tags
//!
//! Besides the GeoKey directory, a GeoTIFF carries up to three baseline
//! tags that anchor the raster spatially: ModelPixelScaleTag (33550),
//! ModelTiepointTag (33922) and ModelTransformationTag (34264). The TIFF
//! layer decodes each into a flat double array; this type is the bundle
//! the resolver consumes.

/// Decoded baseline geo tags for one image
///
/// Every field is optional; the resolver picks a strategy from whichever
/// combination is present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagSet {
    /// ModelPixelScaleTag values: x_scale, y_scale, z_scale
    pub pixel_scale: Option<Vec<f64>>,
    /// ModelTiepointTag values: i,j,k,x,y,z per tie point
    pub tie_points: Option<Vec<f64>>,
    /// ModelTransformationTag values: 16 doubles, row-major 4x4
    pub transformation: Option<Vec<f64>>,
    /// Scene raster width in pixels, when the caller knows it
    ///
    /// Only consulted by the global 0..360 longitude test; resolution
    /// works without it.
    pub image_width: Option<u32>,
}

impl TagSet {
    /// Creates an empty tag set
    pub fn new() -> Self {
        TagSet::default()
    }

    pub fn with_pixel_scale(mut self, values: Vec<f64>) -> Self {
        self.pixel_scale = Some(values);
        self
    }

    pub fn with_tie_points(mut self, values: Vec<f64>) -> Self {
        self.tie_points = Some(values);
        self
    }

    pub fn with_transformation(mut self, values: Vec<f64>) -> Self {
        self.transformation = Some(values);
        self
    }

    pub fn with_image_width(mut self, width: u32) -> Self {
        self.image_width = Some(width);
        self
    }

    /// Pixel scale values that are present and usable
    ///
    /// A scale tag with NaN or infinite x/y entries is treated as absent,
    /// the same way a malformed key is.
    pub fn valid_pixel_scale(&self) -> Option<&[f64]> {
        let values = self.pixel_scale.as_deref()?;
        if values.len() < 2 {
            return None;
        }
        if values[0].is_finite() && values[1].is_finite() {
            Some(values)
        } else {
            None
        }
    }

    /// Number of complete 6-double tie points in the tie-point tag
    pub fn tie_point_count(&self) -> usize {
        self.tie_points.as_ref().map_or(0, |values| values.len() / 6)
    }
}
