//! Status codes returned by the firmware.

use crate::constants::*;
use crate::error::ProtocolError;

/// Status byte values the firmware can return.
///
/// Every status byte received on the wire must map to one of these members;
/// an unrecognized byte is a decode failure, never silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// Command completed successfully.
    Ok,
    /// Command failed for an unspecified reason.
    Fail,
    /// The queried feature is disabled in configuration.
    Disabled,
    /// The opcode was not recognized.
    InvalidCmd,
    /// The payload was rejected.
    InvalidValue,
    /// The opcode is not implemented on this firmware revision.
    NotImplemented,
}

impl StatusCode {
    /// Whether this status indicates success.
    pub fn is_ok(&self) -> bool {
        matches!(self, StatusCode::Ok)
    }

    /// The protocol name of this status, as the firmware headers spell it.
    pub fn name(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Fail => "FAIL",
            StatusCode::Disabled => "DISABLED",
            StatusCode::InvalidCmd => "INVALID_CMD",
            StatusCode::InvalidValue => "INVALID_VALUE",
            StatusCode::NotImplemented => "NOT_IMPLEMENTED",
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for StatusCode {
    type Error = ProtocolError;

    fn try_from(byte: u8) -> Result<Self, ProtocolError> {
        match byte {
            STATUS_OK => Ok(StatusCode::Ok),
            STATUS_FAIL => Ok(StatusCode::Fail),
            STATUS_DISABLED => Ok(StatusCode::Disabled),
            STATUS_INVALID_CMD => Ok(StatusCode::InvalidCmd),
            STATUS_INVALID_VALUE => Ok(StatusCode::InvalidValue),
            STATUS_NOT_IMPLEMENTED => Ok(StatusCode::NotImplemented),
            other => Err(ProtocolError::UnknownStatus(other)),
        }
    }
}

impl From<StatusCode> for u8 {
    fn from(status: StatusCode) -> Self {
        match status {
            StatusCode::Ok => STATUS_OK,
            StatusCode::Fail => STATUS_FAIL,
            StatusCode::Disabled => STATUS_DISABLED,
            StatusCode::InvalidCmd => STATUS_INVALID_CMD,
            StatusCode::InvalidValue => STATUS_INVALID_VALUE,
            StatusCode::NotImplemented => STATUS_NOT_IMPLEMENTED,
        }
    }
}
