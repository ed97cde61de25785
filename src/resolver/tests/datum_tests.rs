//! Tests for datum resolution

use crate::geokeys::constants::{epsg, geo_keys};
use crate::geokeys::GeoKeyTable;
use crate::model::Datum;
use crate::resolver::datum;
use crate::resolver::tests::test_utils::int_table;

#[test]
fn test_absent_key_defaults_to_wgs84() {
    let table = GeoKeyTable::default();
    assert_eq!(datum::resolve(&table), Datum::Wgs84);
}

#[test]
fn test_wgs72_code() {
    let table = int_table(&[(geo_keys::GEOGRAPHIC_TYPE, epsg::GCS_WGS_72)]);
    assert_eq!(datum::resolve(&table), Datum::Wgs72);
}

#[test]
fn test_wgs84_code() {
    let table = int_table(&[(geo_keys::GEOGRAPHIC_TYPE, epsg::GCS_WGS_84)]);
    assert_eq!(datum::resolve(&table), Datum::Wgs84);
}

#[test]
fn test_unrecognized_code_is_recorded_and_collapses_to_wgs84() {
    // NAD83 is not modeled; the code is preserved but geocodes as WGS 84
    let table = int_table(&[(geo_keys::GEOGRAPHIC_TYPE, 4269)]);
    let datum = datum::resolve(&table);
    assert_eq!(datum, Datum::Unsupported(4269));
    assert_eq!(datum.effective(), Datum::Wgs84);
}

#[test]
fn test_effective_is_identity_for_supported_datums() {
    assert_eq!(Datum::Wgs72.effective(), Datum::Wgs72);
    assert_eq!(Datum::Wgs84.effective(), Datum::Wgs84);
}
