//! Tie-point grid records

/// A rectangular grid of geographic values anchored to the raster
///
/// Produced in pairs ("latitude", "longitude") by the tie-point
/// interpolation strategy. `offset` is the raster position of grid cell
/// (0,0), `spacing` the raster distance between neighboring cells.
/// Cells no tie point covered hold 0.0.
#[derive(Debug, Clone, PartialEq)]
pub struct TiePointGrid {
    /// Grid name, "latitude" or "longitude"
    pub name: String,
    /// Number of grid columns
    pub width: usize,
    /// Number of grid rows
    pub height: usize,
    /// Raster position (x, y) of cell (0,0)
    pub offset: (f64, f64),
    /// Raster distance (x, y) between neighboring cells
    pub spacing: (f64, f64),
    /// Row-major cell values
    pub data: Vec<f32>,
}

impl TiePointGrid {
    pub fn new(
        name: &str,
        width: usize,
        height: usize,
        offset: (f64, f64),
        spacing: (f64, f64),
        data: Vec<f32>,
    ) -> Self {
        debug_assert_eq!(data.len(), width * height);
        TiePointGrid {
            name: name.to_string(),
            width,
            height,
            offset,
            spacing,
            data,
        }
    }

    /// Value at grid cell (x, y)
    pub fn value_at(&self, x: usize, y: usize) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.data[y * self.width + x])
        } else {
            None
        }
    }
}
