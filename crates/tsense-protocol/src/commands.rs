//! Commands that can be sent to the sensor firmware.

use crate::constants::*;
use crate::error::{ProtocolError, ProtocolResult};

/// The shape of the reply a command produces.
///
/// The protocol carries no length field on the wire; the reply is sized
/// entirely by the command that was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyShape {
    /// No reply at all (the firmware reboots before it could answer).
    NoReply,
    /// A single status byte.
    Status,
    /// A 4-byte little-endian IEEE-754 float followed by a status byte.
    StatusPlusFloat32,
    /// An 8-byte little-endian signed integer followed by a status byte.
    StatusPlusInt64,
    /// Text bytes terminated by the OK status byte.
    StatusTerminatedString,
}

/// Commands that can be sent to the sensor firmware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Reboot the sensor.
    Reset,

    /// Set the WiFi SSID.
    SetWifiSsid {
        /// SSID to store, 2..=32 bytes.
        ssid: String,
    },

    /// Get the currently configured WiFi SSID.
    GetWifiSsid,

    /// Set the WPA key.
    SetWifiKey {
        /// Key to store, 8..=63 bytes.
        key: String,
    },

    /// Clear the stored WiFi configuration.
    ClearWifiConfig,

    /// Read the current temperature in degrees Celsius.
    GetTemperature,

    /// Read the current relative humidity in percent.
    GetHumidity,

    /// Read the time since boot in microseconds.
    GetUptime,
}

impl Command {
    /// Get the opcode byte for this command.
    pub fn opcode(&self) -> u8 {
        match self {
            Command::Reset => CMD_RESET,
            Command::SetWifiSsid { .. } => CMD_SET_WIFI_SSID,
            Command::GetWifiSsid => CMD_GET_WIFI_SSID,
            Command::SetWifiKey { .. } => CMD_SET_WIFI_KEY,
            Command::ClearWifiConfig => CMD_CLEAR_WIFI_CONFIG,
            Command::GetTemperature => CMD_GET_TEMPERATURE,
            Command::GetHumidity => CMD_GET_HUMIDITY,
            Command::GetUptime => CMD_GET_UPTIME,
        }
    }

    /// Get the reply shape this command produces.
    pub fn reply_shape(&self) -> ReplyShape {
        match self {
            Command::Reset => ReplyShape::NoReply,
            Command::SetWifiSsid { .. } => ReplyShape::Status,
            Command::GetWifiSsid => ReplyShape::StatusTerminatedString,
            Command::SetWifiKey { .. } => ReplyShape::Status,
            Command::ClearWifiConfig => ReplyShape::Status,
            Command::GetTemperature => ReplyShape::StatusPlusFloat32,
            Command::GetHumidity => ReplyShape::StatusPlusFloat32,
            Command::GetUptime => ReplyShape::StatusPlusInt64,
        }
    }

    /// Encode the command to its wire representation: the opcode byte,
    /// followed for string-carrying commands by the UTF-8 payload and a NUL
    /// terminator.
    pub fn encode(&self) -> ProtocolResult<Vec<u8>> {
        let mut buf = Vec::with_capacity(1 + MAX_WIFI_KEY_LEN + 1);
        buf.push(self.opcode());

        match self {
            Command::SetWifiSsid { ssid } => {
                check_payload("SSID", ssid, MIN_SSID_LEN, MAX_SSID_LEN)?;
                buf.extend_from_slice(ssid.as_bytes());
                buf.push(0x00);
            }

            Command::SetWifiKey { key } => {
                check_payload("key", key, MIN_WIFI_KEY_LEN, MAX_WIFI_KEY_LEN)?;
                buf.extend_from_slice(key.as_bytes());
                buf.push(0x00);
            }

            Command::Reset
            | Command::GetWifiSsid
            | Command::ClearWifiConfig
            | Command::GetTemperature
            | Command::GetHumidity
            | Command::GetUptime => {}
        }

        Ok(buf)
    }
}

/// Validate a string payload against the firmware's accepted bounds.
///
/// The NUL terminator doubles as the end-of-payload sentinel on the wire, so
/// an interior NUL cannot be represented.
fn check_payload(what: &str, value: &str, min: usize, max: usize) -> ProtocolResult<()> {
    let len = value.len();
    if value.as_bytes().contains(&0x00) {
        return Err(ProtocolError::InvalidPayload(format!(
            "{what} contains a NUL byte"
        )));
    }
    if len < min || len > max {
        return Err(ProtocolError::InvalidPayload(format!(
            "{what} must be {min}..={max} bytes, got {len}"
        )));
    }
    Ok(())
}
