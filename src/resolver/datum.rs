//! Datum resolution

use log::debug;

use crate::geokeys::constants::{epsg, geo_keys};
use crate::geokeys::GeoKeyTable;
use crate::model::Datum;

/// Resolves the datum from the GeographicTypeGeoKey
///
/// WGS 72 and WGS 84 are the only recognized geographic CS codes. Any
/// other code is preserved as `Datum::Unsupported`, which geocodes as
/// WGS 84; an absent key is plain WGS 84. There is no error path.
pub fn resolve(table: &GeoKeyTable) -> Datum {
    match table.get_int(geo_keys::GEOGRAPHIC_TYPE) {
        Some(epsg::GCS_WGS_72) => Datum::Wgs72,
        Some(epsg::GCS_WGS_84) => Datum::Wgs84,
        Some(code) => {
            debug!("unrecognized GeographicTypeGeoKey {}, geocoding as WGS 84", code);
            Datum::Unsupported(code as u16)
        }
        None => Datum::Wgs84,
    }
}
