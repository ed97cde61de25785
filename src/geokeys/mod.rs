//! GeoTIFF GeoKey directory and baseline tag handling
//!
//! This module provides the input side of geo-referencing resolution:
//! a typed view over an already-parsed GeoKey directory and the three
//! baseline geo tags (pixel scale, tie points, model transformation).

pub(crate) mod constants;
pub mod names;
pub mod table;
pub mod tags;


pub use names::{get_code_name, get_key_name};
pub use table::{GeoKeyTable, GeoKeyValue};
pub use tags::TagSet;
