use crate::ports::Forwarder;
use crate::rr_table::RrTable;
use minidns_domain::{Answer, DnsMessage, DomainError};
use std::sync::Arc;
use tracing::debug;

/// Resolution logic of the local-resolver role.
///
/// Cache hit answers directly; a miss forwards the original query one
/// hop to the authoritative server, caches a positive answer
/// dynamically, and relays exactly one response either way. Not-found
/// answers are relayed but never cached.
pub struct RecursiveEngine {
    table: Arc<RrTable>,
    forwarder: Arc<dyn Forwarder>,
}

impl RecursiveEngine {
    pub fn new(table: Arc<RrTable>, forwarder: Arc<dyn Forwarder>) -> Self {
        Self { table, forwarder }
    }

    pub async fn handle_query(&self, query: &DnsMessage) -> Result<DnsMessage, DomainError> {
        let question = &query.question;
        if let Some(record) = question
            .qtype
            .and_then(|rtype| self.table.lookup(&question.name, rtype))
        {
            debug!(name = %record.name, rtype = %record.rtype, "Cache hit");
            return Ok(DnsMessage::response(query, Answer::from_record(&record)));
        }

        debug!(name = %question.name, "Cache miss, forwarding upstream");
        let reply = self.forwarder.forward(query).await?;

        match reply.answer {
            Some(answer) if !answer.is_not_found() => {
                // Dynamically cached, so subject to future eviction.
                if let Some(rtype) = answer.rtype {
                    self.table
                        .insert(&answer.name, rtype, &answer.result, answer.ttl, false);
                }
                Ok(DnsMessage::response(query, answer))
            }
            _ => Ok(DnsMessage::response(query, Answer::not_found(question))),
        }
    }
}
