use crate::ports::Forwarder;
use crate::rr_table::RrTable;
use minidns_domain::{DnsMessage, DomainError, RecordType, ResourceRecord};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tracing::debug;

/// How a client lookup was satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// Served from the client's own cache; no message was sent.
    CacheHit(ResourceRecord),
    /// Answered by the resolver and freshly cached.
    Answered(ResourceRecord),
    NotFound,
}

/// Resolution logic of the client role: local cache first, then one
/// query to the local resolver.
pub struct ClientEngine {
    table: Arc<RrTable>,
    forwarder: Arc<dyn Forwarder>,
    next_txid: AtomicU32,
}

impl ClientEngine {
    pub fn new(table: Arc<RrTable>, forwarder: Arc<dyn Forwarder>) -> Self {
        Self {
            table,
            forwarder,
            next_txid: AtomicU32::new(1),
        }
    }

    /// Resolves one user request. An omitted query type defaults to A.
    ///
    /// The transaction id is a per-client monotonic counter: it
    /// advances by exactly one per request, whether or not the cache
    /// answered.
    pub async fn resolve(
        &self,
        name: &str,
        qtype: Option<RecordType>,
    ) -> Result<ResolveOutcome, DomainError> {
        let rtype = qtype.unwrap_or(RecordType::A);
        let transaction_id = self.next_txid.fetch_add(1, Ordering::Relaxed);

        if let Some(record) = self.table.lookup(name, rtype) {
            debug!(name, %rtype, "Client cache hit");
            return Ok(ResolveOutcome::CacheHit(record));
        }

        debug!(name, %rtype, transaction_id, "Client cache miss, querying resolver");
        let query = DnsMessage::query(transaction_id, name, Some(rtype));
        let reply = self.forwarder.forward(&query).await?;

        match reply.answer {
            Some(answer) if !answer.is_not_found() => {
                let record = match answer.rtype {
                    Some(rtype) => {
                        self.table
                            .insert(&answer.name, rtype, &answer.result, answer.ttl, false)
                    }
                    // A typeless answer cannot be cached or looked up
                    // again; treat it like a miss.
                    None => return Ok(ResolveOutcome::NotFound),
                };
                Ok(ResolveOutcome::Answered(record))
            }
            _ => Ok(ResolveOutcome::NotFound),
        }
    }
}
