#![allow(dead_code)]

use async_trait::async_trait;
use minidns_application::ports::Forwarder;
use minidns_domain::{Answer, DnsMessage, DomainError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Scripted upstream: answers by question name, counts forwards, and
/// records the last query it saw.
pub struct MockForwarder {
    answers: Mutex<HashMap<String, Answer>>,
    last_query: Mutex<Option<DnsMessage>>,
    forward_count: AtomicUsize,
    should_fail: AtomicBool,
}

impl MockForwarder {
    pub fn new() -> Self {
        Self {
            answers: Mutex::new(HashMap::new()),
            last_query: Mutex::new(None),
            forward_count: AtomicUsize::new(0),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn set_answer(&self, name: &str, answer: Answer) {
        self.answers
            .lock()
            .unwrap()
            .insert(name.to_string(), answer);
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn forward_count(&self) -> usize {
        self.forward_count.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<DnsMessage> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait]
impl Forwarder for MockForwarder {
    async fn forward(&self, query: &DnsMessage) -> Result<DnsMessage, DomainError> {
        self.forward_count.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.clone());

        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::TransportFault("peer unreachable".to_string()));
        }

        let answer = self
            .answers
            .lock()
            .unwrap()
            .get(&query.question.name)
            .cloned()
            .unwrap_or_else(|| Answer::not_found(&query.question));
        Ok(DnsMessage::response(query, answer))
    }
}
