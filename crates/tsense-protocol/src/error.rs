//! Protocol error types.

use thiserror::Error;

/// Errors that can occur when working with the sensor protocol.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// A read or write on the underlying link failed.
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// A status byte outside the recognized set was received.
    #[error("unknown status code: 0x{0:02X}")]
    UnknownStatus(u8),

    /// A reply frame was shorter than its declared shape requires.
    #[error("frame too short: expected {expected} bytes, got {actual}")]
    FrameTooShort {
        /// Expected minimum length.
        expected: usize,
        /// Actual length received.
        actual: usize,
    },

    /// A string field received from the firmware was not valid UTF-8.
    #[error("invalid UTF-8 in string field")]
    InvalidUtf8,

    /// A command payload cannot be represented on the wire.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

/// Result type alias for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;

impl ProtocolError {
    /// Whether this error originated in the transport rather than the
    /// protocol. Transport faults call for a reconnect; protocol faults
    /// indicate a framing or firmware problem on an otherwise healthy link.
    pub fn is_transport(&self) -> bool {
        matches!(self, ProtocolError::Transport(_))
    }
}
