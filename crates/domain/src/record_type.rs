use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;

/// Record types understood by the hierarchy.
///
/// The wire codes form a fixed four-entry bidirectional registry.
/// Anything outside it maps to "no type" rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    NS,
}

impl RecordType {
    pub const ALL: [RecordType; 4] = [
        RecordType::A,
        RecordType::AAAA,
        RecordType::CNAME,
        RecordType::NS,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::NS => "NS",
        }
    }

    /// Compact wire code for this type.
    pub fn code(&self) -> u8 {
        match self {
            RecordType::A => 0b1000,
            RecordType::AAAA => 0b0100,
            RecordType::CNAME => 0b0010,
            RecordType::NS => 0b0001,
        }
    }

    /// Reverse mapping. Unknown codes (including 0, the "absent"
    /// placeholder) have no mapping.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0b1000 => Some(RecordType::A),
            0b0100 => Some(RecordType::AAAA),
            0b0010 => Some(RecordType::CNAME),
            0b0001 => Some(RecordType::NS),
            _ => None,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "CNAME" => Ok(RecordType::CNAME),
            "NS" => Ok(RecordType::NS),
            _ => Err(DomainError::UnknownType(s.to_string())),
        }
    }
}
