use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// The datagram cannot be decoded; callers drop it as garbage.
    #[error("Malformed message: {0}")]
    MalformedMessage(String),

    /// A record-type name has no registry mapping.
    #[error("Unknown record type: {0}")]
    UnknownType(String),

    /// A socket error other than a receive timeout. Fatal: the role
    /// closes its transport and exits.
    #[error("Transport fault: {0}")]
    TransportFault(String),
}
