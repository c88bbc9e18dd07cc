//! Query/response message and its line codec.
//!
//! One message per datagram, eight comma-joined UTF-8 fields:
//! `transaction_id,flag,question_name,question_type_code,answer_name,answer_type_code,ttl,result`
//!
//! Absent type codes encode as empty fields. An absent ttl on a
//! present answer encodes as the literal `None` so it stays
//! distinguishable from 0. This module is the single source of truth
//! for wire compatibility between the three roles.

use crate::errors::DomainError;
use crate::record::ResourceRecord;
use crate::record_type::RecordType;

/// Reserved result value signaling a failed lookup. Never a
/// legitimate address and never cached.
pub const RECORD_NOT_FOUND: &str = "Record not found";

const FLAG_QUERY: &str = "0000";
const FLAG_RESPONSE: &str = "0001";

/// Literal used for an absent ttl on a present answer.
const TTL_NONE: &str = "None";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Query,
    Response,
}

impl Flag {
    pub fn as_wire(&self) -> &'static str {
        match self {
            Flag::Query => FLAG_QUERY,
            Flag::Response => FLAG_RESPONSE,
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            FLAG_QUERY => Some(Flag::Query),
            FLAG_RESPONSE => Some(Flag::Response),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    /// `None` when the type was omitted or had no registry mapping.
    /// Engines treat a typeless question as an automatic miss.
    pub qtype: Option<RecordType>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub name: String,
    pub rtype: Option<RecordType>,
    pub ttl: Option<u32>,
    pub result: String,
}

impl Answer {
    pub fn from_record(record: &ResourceRecord) -> Self {
        Self {
            name: record.name.clone(),
            rtype: Some(record.rtype),
            ttl: record.ttl,
            result: record.result.clone(),
        }
    }

    /// Not-found answer echoing the question, ttl 0.
    pub fn not_found(question: &Question) -> Self {
        Self {
            name: question.name.clone(),
            rtype: question.qtype,
            ttl: Some(0),
            result: RECORD_NOT_FOUND.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.result == RECORD_NOT_FOUND
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsMessage {
    pub transaction_id: u32,
    pub flag: Flag,
    pub question: Question,
    pub answer: Option<Answer>,
}

impl DnsMessage {
    pub fn query(transaction_id: u32, name: &str, qtype: Option<RecordType>) -> Self {
        Self {
            transaction_id,
            flag: Flag::Query,
            question: Question {
                name: name.to_string(),
                qtype,
            },
            answer: None,
        }
    }

    /// Response to `query`: same transaction id, same question.
    pub fn response(query: &DnsMessage, answer: Answer) -> Self {
        Self {
            transaction_id: query.transaction_id,
            flag: Flag::Response,
            question: query.question.clone(),
            answer: Some(answer),
        }
    }

    /// Renders the eight positional fields in wire order.
    pub fn encode(&self) -> String {
        let qtype = encode_type(self.question.qtype);
        let (aname, atype, ttl, result) = match &self.answer {
            Some(answer) => (
                answer.name.as_str(),
                encode_type(answer.rtype),
                match answer.ttl {
                    Some(ttl) => ttl.to_string(),
                    None => TTL_NONE.to_string(),
                },
                answer.result.as_str(),
            ),
            None => ("", String::new(), String::new(), ""),
        };
        format!(
            "{},{},{},{},{},{},{},{}",
            self.transaction_id, self.flag.as_wire(), self.question.name, qtype, aname, atype, ttl, result
        )
    }

    /// Parses a wire line back into a message.
    ///
    /// The question fields are mandatory; answer fields may be wholly
    /// absent only in a query. The result field is positional-last, so
    /// commas inside it survive.
    pub fn decode(line: &str) -> Result<Self, DomainError> {
        let fields: Vec<&str> = line.splitn(8, ',').collect();
        if fields.len() < 4 {
            return Err(DomainError::MalformedMessage(format!(
                "expected at least 4 fields, got {}",
                fields.len()
            )));
        }

        let transaction_id = fields[0].parse::<u32>().map_err(|_| {
            DomainError::MalformedMessage(format!("bad transaction id {:?}", fields[0]))
        })?;
        let flag = Flag::from_wire(fields[1])
            .ok_or_else(|| DomainError::MalformedMessage(format!("bad flag {:?}", fields[1])))?;
        let question = Question {
            name: fields[2].to_string(),
            qtype: decode_type(fields[3])?,
        };

        let answer = match flag {
            Flag::Query => None,
            Flag::Response => {
                if fields.len() < 8 || fields[4].is_empty() {
                    return Err(DomainError::MalformedMessage(
                        "response without answer fields".to_string(),
                    ));
                }
                Some(Answer {
                    name: fields[4].to_string(),
                    rtype: decode_type(fields[5])?,
                    ttl: decode_ttl(fields[6])?,
                    result: fields[7].to_string(),
                })
            }
        };

        Ok(Self {
            transaction_id,
            flag,
            question,
            answer,
        })
    }
}

fn encode_type(rtype: Option<RecordType>) -> String {
    match rtype {
        Some(t) => t.code().to_string(),
        None => String::new(),
    }
}

/// Empty field means "no type"; a numeric code outside the registry
/// degrades to "no type" as well. A non-numeric field is garbage.
fn decode_type(field: &str) -> Result<Option<RecordType>, DomainError> {
    if field.is_empty() {
        return Ok(None);
    }
    let code = field
        .parse::<u8>()
        .map_err(|_| DomainError::MalformedMessage(format!("bad type code {:?}", field)))?;
    Ok(RecordType::from_code(code))
}

fn decode_ttl(field: &str) -> Result<Option<u32>, DomainError> {
    if field.is_empty() || field == TTL_NONE {
        return Ok(None);
    }
    field
        .parse::<u32>()
        .map(Some)
        .map_err(|_| DomainError::MalformedMessage(format!("bad ttl {:?}", field)))
}
