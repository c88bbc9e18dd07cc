use minidns_domain::{RecordType, ResourceRecord};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// In-memory record table shared between a role's request loop and
/// its eviction sweep.
///
/// Every operation holds the lock for its whole duration, so insert,
/// lookup, snapshot and eviction are mutually exclusive: a lookup can
/// never observe a table mid-eviction. The table is owned by exactly
/// one process; roles exchange state only through wire messages.
pub struct RrTable {
    records: Mutex<Vec<ResourceRecord>>,
}

impl RrTable {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    fn records(&self) -> MutexGuard<'_, Vec<ResourceRecord>> {
        self.records.lock().expect("RR table lock poisoned")
    }

    /// Appends a record with the next sequential rank. Duplicates are
    /// never rejected; lookup resolves them by insertion order.
    pub fn insert(
        &self,
        name: &str,
        rtype: RecordType,
        result: &str,
        ttl: Option<u32>,
        is_static: bool,
    ) -> ResourceRecord {
        let mut records = self.records();
        let record = ResourceRecord {
            rank: records.len() as u32 + 1,
            name: name.to_string(),
            rtype,
            result: result.to_string(),
            ttl,
            is_static,
        };
        records.push(record.clone());
        debug!(name, %rtype, result, is_static, "Record inserted");
        record
    }

    /// First structural match on (name, type), if any.
    pub fn lookup(&self, name: &str, rtype: RecordType) -> Option<ResourceRecord> {
        self.records()
            .iter()
            .find(|record| record.matches(name, rtype))
            .cloned()
    }

    /// Ordered copy of the table for external reporting.
    pub fn snapshot(&self) -> Vec<ResourceRecord> {
        self.records().clone()
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    /// One sweep pass, invoked only by the TTL sweep job.
    ///
    /// Two phases, in this order: decrement the ttl of every
    /// non-static expirable record, then drop the ones that reached
    /// zero. A record inserted with ttl 1 therefore survives exactly
    /// one full sweep interval. Survivors are re-ranked 1..N in their
    /// original relative order. Returns the number of records removed.
    pub fn evict_expired(&self) -> usize {
        let mut records = self.records();

        for record in records.iter_mut() {
            if record.is_expirable() {
                if let Some(ttl) = record.ttl.as_mut() {
                    *ttl = ttl.saturating_sub(1);
                }
            }
        }

        let before = records.len();
        records.retain(|record| !record.is_expirable() || record.ttl.is_some_and(|ttl| ttl > 0));
        let removed = before - records.len();

        if removed > 0 {
            for (index, record) in records.iter_mut().enumerate() {
                record.rank = index as u32 + 1;
            }
        }
        removed
    }
}

impl Default for RrTable {
    fn default() -> Self {
        Self::new()
    }
}
