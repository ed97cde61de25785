//! UTM PCS fast path
//!
//! EPSG assigns the WGS 84 UTM zones two contiguous code ranges, one per
//! hemisphere. A PCS code inside either range maps directly to a zone
//! number without consulting any further GeoKeys.

use log::debug;

use crate::geokeys::constants::epsg;
use crate::model::{Hemisphere, ProjectionKind};

/// Classifies a PCS code as a WGS 84 UTM zone
///
/// Returns `None` for codes outside both UTM ranges.
pub fn classify_pcs(pcs_code: i32) -> Option<ProjectionKind> {
    if is_utm_north(pcs_code) {
        let zone = (pcs_code - epsg::PCS_WGS84_UTM_ZONE_1N + 1) as u8;
        debug!("PCS {} classified as UTM zone {}N", pcs_code, zone);
        Some(ProjectionKind::Utm {
            zone,
            hemisphere: Hemisphere::North,
        })
    } else if is_utm_south(pcs_code) {
        let zone = (pcs_code - epsg::PCS_WGS84_UTM_ZONE_1S + 1) as u8;
        debug!("PCS {} classified as UTM zone {}S", pcs_code, zone);
        Some(ProjectionKind::Utm {
            zone,
            hemisphere: Hemisphere::South,
        })
    } else {
        None
    }
}

fn is_utm_north(pcs_code: i32) -> bool {
    (epsg::PCS_WGS84_UTM_ZONE_1N..=epsg::PCS_WGS84_UTM_ZONE_60N).contains(&pcs_code)
}

fn is_utm_south(pcs_code: i32) -> bool {
    (epsg::PCS_WGS84_UTM_ZONE_1S..=epsg::PCS_WGS84_UTM_ZONE_60S).contains(&pcs_code)
}
