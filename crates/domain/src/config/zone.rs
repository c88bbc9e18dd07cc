use super::errors::ConfigError;
use crate::record_type::RecordType;
use serde::{Deserialize, Serialize};

/// One seed record for the authoritative table. Seeded records are
/// always static.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneRecord {
    pub name: String,

    pub record_type: String,

    pub result: String,

    #[serde(default)]
    pub ttl: Option<u32>,
}

impl ZoneRecord {
    pub fn parsed_type(&self) -> Result<RecordType, ConfigError> {
        self.record_type.parse().map_err(|_| {
            ConfigError::Validation(format!(
                "zone record {} has unknown type {}",
                self.name, self.record_type
            ))
        })
    }
}

/// Built-in zone used when the config file defines none.
pub fn default_zone() -> Vec<ZoneRecord> {
    [
        ("www.csusm.edu", "A", "144.37.5.45"),
        ("my.csusm.edu", "A", "144.37.5.150"),
        ("amazone.com", "NS", "dns.amazone.com"),
        ("dns.amazone.com", "A", "127.0.0.1"),
    ]
    .into_iter()
    .map(|(name, record_type, result)| ZoneRecord {
        name: name.to_string(),
        record_type: record_type.to_string(),
        result: result.to_string(),
        ttl: None,
    })
    .collect()
}
