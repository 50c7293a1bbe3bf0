use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MdnsError {
    #[error("Malformed mDNS message: {0}")]
    MalformedMessage(String),

    #[error("Invalid domain name: {0}")]
    InvalidName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("No alias matches {0}")]
    LookupMiss(String),

    #[error("Failed to send reply to {destination}: {reason}")]
    SendFailure { destination: String, reason: String },

    #[error("Socket closed")]
    SocketClosed,

    #[error("Socket failure: {0}")]
    SocketFailure(String),

    #[error("Alias source error: {0}")]
    AliasSource(String),
}

impl MdnsError {
    /// Errors a worker loop survives. Anything else ends the loop.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, MdnsError::SocketFailure(_) | MdnsError::SocketClosed)
    }
}
