//! ModelTransformation decomposition
//!
//! The ModelTransformationTag stores a row-major 4x4 matrix of which six
//! entries describe the 2-D raster-to-map affine: indices 0, 1, 3 form
//! the first row (m00, m01, m02) and indices 4, 5, 7 the second
//! (m10, m11, m12). The decomposition keeps pixel size, translation and
//! a single rotation angle; residual shear is not representable in an
//! `AffinePlacement` and is dropped.

use log::debug;

use crate::model::AffinePlacement;

/// Applies a ModelTransformation matrix to a placement
///
/// Overwrites the placement's map origin, pixel size and orientation,
/// leaving the reference pixel untouched. The pixel-size y component is
/// negated: raster rows grow downward while map northing grows upward,
/// so a north-up raster stores a negative m11. A matrix with fewer than
/// eight values is ignored.
pub fn apply_transformation(placement: &mut AffinePlacement, matrix: &[f64]) {
    if matrix.len() < 8 {
        debug!("ModelTransformation holds {} values, expected 16; ignored", matrix.len());
        return;
    }

    let m00 = matrix[0];
    let m02 = matrix[3];
    let m10 = matrix[4];
    let m11 = matrix[5];
    let m12 = matrix[7];

    placement.pixel_size = (m00, -m11);
    placement.geo_origin = (m02, m12);
    placement.orientation_degrees = orientation_degrees(m00, m10);
}

/// Rotation implied by the first column of the affine matrix
///
/// Only this single angle survives decomposition; shear beyond it is
/// silently dropped.
fn orientation_degrees(m00: f64, m10: f64) -> f64 {
    let norm = (m00 * m00 + m10 * m10).sqrt();
    (m00 / norm).acos().to_degrees()
}
