//! minidns Domain Layer
pub mod config;
pub mod errors;
pub mod message;
pub mod record;
pub mod record_type;

pub use config::Config;
pub use errors::DomainError;
pub use message::{Answer, DnsMessage, Flag, Question, RECORD_NOT_FOUND};
pub use record::ResourceRecord;
pub use record_type::RecordType;
