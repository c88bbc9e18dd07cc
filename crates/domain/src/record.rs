use crate::record_type::RecordType;

/// One name-to-result binding held by a record table.
///
/// `rank` is 1-based and contiguous; the table recomputes it after
/// every eviction. A `ttl` of `None` means the record never expires;
/// `is_static` records never expire regardless of their ttl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub rank: u32,
    pub name: String,
    pub rtype: RecordType,
    pub result: String,
    pub ttl: Option<u32>,
    pub is_static: bool,
}

impl ResourceRecord {
    pub fn matches(&self, name: &str, rtype: RecordType) -> bool {
        self.name == name && self.rtype == rtype
    }

    /// Whether the eviction sweep may ever remove this record.
    pub fn is_expirable(&self) -> bool {
        !self.is_static && self.ttl.is_some()
    }
}
