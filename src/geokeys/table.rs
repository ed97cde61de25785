//! Typed GeoKey directory access
//!
//! A GeoKey directory is an ordered mapping from key ids to values. The
//! GeoTIFF spec allows three value kinds: shorts stored inline, doubles
//! stored in the GeoDoubleParamsTag, and strings stored in the
//! GeoAsciiParamsTag. The TIFF layer decodes all three into `GeoKeyValue`
//! entries before handing the table to the resolver.

use std::collections::BTreeMap;
use log::trace;

use crate::geokeys::get_key_name;

/// A decoded GeoKey value
#[derive(Debug, Clone, PartialEq)]
pub enum GeoKeyValue {
    /// Short value stored inline in the key entry
    Int(i32),
    /// One or more doubles from the GeoDoubleParamsTag
    Doubles(Vec<f64>),
    /// String from the GeoAsciiParamsTag, trailing NULs stripped
    Ascii(String),
}

/// Ordered mapping from GeoKey id to decoded value
///
/// Immutable once constructed. Absence of a key is never a fault; all
/// accessors return `Option` and the resolver treats `None` as "key not
/// written by the producer".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoKeyTable {
    entries: BTreeMap<u16, GeoKeyValue>,
}

impl GeoKeyTable {
    /// Builds a table from decoded key entries
    ///
    /// Later duplicates win, matching the last-entry-wins behavior of a
    /// map keyed on the key id.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (u16, GeoKeyValue)>,
    {
        GeoKeyTable {
            entries: entries.into_iter().collect(),
        }
    }

    /// Whether the directory contains the given key
    pub fn contains(&self, key_id: u16) -> bool {
        self.entries.contains_key(&key_id)
    }

    /// Integer value of a key, if present and integer-valued
    pub fn get_int(&self, key_id: u16) -> Option<i32> {
        match self.entries.get(&key_id) {
            Some(GeoKeyValue::Int(value)) => Some(*value),
            Some(other) => {
                trace!("GeoKey {} ({}) holds {:?}, not an integer",
                       key_id, get_key_name(key_id), other);
                None
            }
            None => None,
        }
    }

    /// Double values of a key, if present and double-valued
    pub fn get_doubles(&self, key_id: u16) -> Option<&[f64]> {
        match self.entries.get(&key_id) {
            Some(GeoKeyValue::Doubles(values)) => Some(values.as_slice()),
            _ => None,
        }
    }

    /// First double value of a key
    ///
    /// Most projection parameter keys carry exactly one double; this is
    /// the accessor the projection builders use.
    pub fn get_double(&self, key_id: u16) -> Option<f64> {
        self.get_doubles(key_id).and_then(|values| values.first().copied())
    }

    /// String value of a key, if present and ASCII-valued
    pub fn get_ascii(&self, key_id: u16) -> Option<&str> {
        match self.entries.get(&key_id) {
            Some(GeoKeyValue::Ascii(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Number of keys in the directory
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (u16, &GeoKeyValue)> {
        self.entries.iter().map(|(id, value)| (*id, value))
    }
}
