//! GeoTIFF code constants
//!
//! This module defines the GeoKey ids and code values used throughout the
//! resolution logic, making the code more readable and maintainable by
//! replacing magic numbers with descriptive names.

/// GeoKey ids as defined in the GeoTIFF spec's GeoKey directory
pub mod geo_keys {
    pub const GT_MODEL_TYPE: u16 = 1024;            // Projected / geographic / geocentric
    pub const GT_RASTER_TYPE: u16 = 1025;           // PixelIsArea / PixelIsPoint
    pub const GT_CITATION: u16 = 1026;              // Free-text CRS citation
    pub const GEOGRAPHIC_TYPE: u16 = 2048;          // EPSG geographic CS code
    pub const GEOG_SEMI_MAJOR_AXIS: u16 = 2057;     // Ellipsoid semi-major axis in meters
    pub const GEOG_SEMI_MINOR_AXIS: u16 = 2058;     // Ellipsoid semi-minor axis in meters
    pub const PROJECTED_CS_TYPE: u16 = 3072;        // EPSG projected CS (PCS) code
    pub const PCS_CITATION: u16 = 3073;             // Free-text PCS citation
    pub const PROJECTION: u16 = 3074;               // EPSG projection code or user-defined
    pub const PROJ_COORD_TRANS: u16 = 3075;         // Coordinate transformation method code
    pub const PROJ_STD_PARALLEL_1: u16 = 3078;      // First standard parallel
    pub const PROJ_STD_PARALLEL_2: u16 = 3079;      // Second standard parallel
    pub const PROJ_NAT_ORIGIN_LONG: u16 = 3080;     // Longitude of natural origin
    pub const PROJ_NAT_ORIGIN_LAT: u16 = 3081;      // Latitude of natural origin
    pub const PROJ_FALSE_EASTING: u16 = 3082;       // False easting in meters
    pub const PROJ_FALSE_NORTHING: u16 = 3083;      // False northing in meters
    pub const PROJ_FALSE_ORIGIN_LONG: u16 = 3084;   // Longitude of false origin
    pub const PROJ_FALSE_ORIGIN_LAT: u16 = 3085;    // Latitude of false origin
    pub const PROJ_CENTER_LONG: u16 = 3088;         // Longitude of projection center
    pub const PROJ_CENTER_LAT: u16 = 3089;          // Latitude of projection center
    pub const PROJ_SCALE_AT_NAT_ORIGIN: u16 = 3092; // Scale factor at natural origin
    pub const PROJ_SCALE_AT_CENTER: u16 = 3093;     // Scale factor at projection center

    /// Marker value meaning "user defined" for any GeoKey
    pub const USER_DEFINED: i32 = 32767;
}

/// GTModelTypeGeoKey values
pub mod model_types {
    pub const PROJECTED: i32 = 1;   // Projection coordinate system
    pub const GEOGRAPHIC: i32 = 2;  // Geographic lat/long system
    pub const GEOCENTRIC: i32 = 3;  // Geocentric X,Y,Z system
}

/// GTRasterTypeGeoKey values
pub mod raster_types {
    pub const PIXEL_IS_AREA: i32 = 1;  // Pixel covers an area, origin at corner
    pub const PIXEL_IS_POINT: i32 = 2; // Pixel is a point sample, origin at center
}

/// ProjCoordTransGeoKey values for the supported transformation methods
pub mod coord_trans {
    pub const TRANSVERSE_MERCATOR: i32 = 1;
    pub const LAMBERT_CONF_CONIC: i32 = 8;
    pub const ALBERS_EQUAL_AREA: i32 = 11;
    pub const POLAR_STEREOGRAPHIC: i32 = 15;
}

/// EPSG codes relevant to datum and UTM classification
pub mod epsg {
    pub const GCS_WGS_72: i32 = 4322;  // WGS 72 geographic CS
    pub const GCS_WGS_84: i32 = 4326;  // WGS 84 geographic CS

    // WGS84 UTM zone ranges, contiguous per hemisphere
    pub const PCS_WGS84_UTM_ZONE_1N: i32 = 32601;
    pub const PCS_WGS84_UTM_ZONE_60N: i32 = 32660;
    pub const PCS_WGS84_UTM_ZONE_1S: i32 = 32701;
    pub const PCS_WGS84_UTM_ZONE_60S: i32 = 32760;
}
