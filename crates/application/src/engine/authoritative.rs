use crate::rr_table::RrTable;
use minidns_domain::{Answer, DnsMessage};
use std::sync::Arc;
use tracing::debug;

/// Resolution logic of the authoritative role: answer from the owned
/// table or report not-found. Never forwards.
pub struct AuthoritativeEngine {
    table: Arc<RrTable>,
}

impl AuthoritativeEngine {
    pub fn new(table: Arc<RrTable>) -> Self {
        Self { table }
    }

    pub fn handle_query(&self, query: &DnsMessage) -> DnsMessage {
        let question = &query.question;
        // A question with no registry-known type is an automatic miss.
        let record = question
            .qtype
            .and_then(|rtype| self.table.lookup(&question.name, rtype));

        let answer = match record {
            Some(record) => {
                debug!(name = %record.name, rtype = %record.rtype, "Authoritative hit");
                Answer::from_record(&record)
            }
            None => {
                debug!(name = %question.name, "Authoritative miss");
                Answer::not_found(question)
            }
        };
        DnsMessage::response(query, answer)
    }
}
