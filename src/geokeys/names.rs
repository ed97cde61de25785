//! GeoKey and code name lookup
//!
//! Human-readable names for GeoKey ids and code values, embedded from
//! `geokey_names.toml` and used in diagnostic output. Lookups never fail;
//! unknown ids format as `Unknown-<id>`.

use std::collections::HashMap;
use lazy_static::lazy_static;

lazy_static! {
    // Parse the embedded TOML once at first use
    static ref GEOKEY_NAMES: GeoKeyNames = {
        let content = include_str!("../../geokey_names.toml");
        GeoKeyNames::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse GeoKey name definitions: {}", e);
            GeoKeyNames::default()
        })
    };
}

/// Container for GeoKey id and code value names
#[derive(Debug, Default)]
struct GeoKeyNames {
    // Maps GeoKey ids to key names
    key_names: HashMap<u16, String>,
    // Maps model type codes to names
    model_type_names: HashMap<u16, String>,
    // Maps raster type codes to names
    raster_type_names: HashMap<u16, String>,
    // Maps coordinate transformation codes to names
    coord_trans_names: HashMap<u16, String>,
}

impl GeoKeyNames {
    /// Parse name definitions from a TOML string
    fn from_str(content: &str) -> Result<Self, String> {
        let toml_value: toml::Value = content
            .parse()
            .map_err(|e| format!("Failed to parse TOML: {}", e))?;

        let mut names = GeoKeyNames::default();
        Self::parse_table(&toml_value, "key_ids", &mut names.key_names);
        Self::parse_table(&toml_value, "model_type_codes", &mut names.model_type_names);
        Self::parse_table(&toml_value, "raster_type_codes", &mut names.raster_type_names);
        Self::parse_table(&toml_value, "coord_transformation_codes", &mut names.coord_trans_names);

        Ok(names)
    }

    /// Helper to parse one id-to-name table from TOML
    fn parse_table(toml_value: &toml::Value, table_name: &str, target: &mut HashMap<u16, String>) {
        if let Some(table) = toml_value.get(table_name).and_then(|v| v.as_table()) {
            for (k, v) in table {
                if let (Ok(id), Some(name)) = (k.parse::<u16>(), v.as_str()) {
                    target.insert(id, name.to_string());
                }
            }
        }
    }

    fn key_name(&self, key_id: u16) -> String {
        self.key_names
            .get(&key_id)
            .cloned()
            .unwrap_or_else(|| format!("Unknown-{}", key_id))
    }

    fn code_name(&self, code_type: &str, code: u16) -> String {
        let lookup_result = match code_type {
            "model_type" => self.model_type_names.get(&code),
            "raster_type" => self.raster_type_names.get(&code),
            "coord_trans" => self.coord_trans_names.get(&code),
            _ => None,
        };

        lookup_result.map_or_else(|| format!("{}", code), |s| s.clone())
    }
}

/// Get a GeoKey name by id
pub fn get_key_name(key_id: u16) -> String {
    GEOKEY_NAMES.key_name(key_id)
}

/// Get a code value name from the given table
///
/// Supported tables: `model_type`, `raster_type`, `coord_trans`.
pub fn get_code_name(code_type: &str, code: u16) -> String {
    GEOKEY_NAMES.code_name(code_type, code)
}
