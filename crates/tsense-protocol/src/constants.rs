//! Protocol constants
//!
//! These constants define the command opcodes, status byte values, and payload
//! limits used in the sensor UART protocol.

// ============================================================================
// Command Opcodes (host → firmware)
// ============================================================================

/// Reboot the sensor. No reply is sent.
pub const CMD_RESET: u8 = 0x01;
/// Set the WiFi SSID. Payload: SSID text + NUL.
pub const CMD_SET_WIFI_SSID: u8 = 0x11;
/// Get the configured WiFi SSID. Reply: SSID bytes terminated by the OK status byte.
pub const CMD_GET_WIFI_SSID: u8 = 0x12;
/// Set the WPA key. Payload: key text + NUL.
pub const CMD_SET_WIFI_KEY: u8 = 0x13;
/// Clear the stored WiFi configuration.
pub const CMD_CLEAR_WIFI_CONFIG: u8 = 0x14;
/// Read the current temperature. Reply: f32 little-endian + status byte.
pub const CMD_GET_TEMPERATURE: u8 = 0x20;
/// Read the current relative humidity. Reply: f32 little-endian + status byte.
pub const CMD_GET_HUMIDITY: u8 = 0x21;
/// Read the time since boot. Reply: i64 microseconds little-endian + status byte.
pub const CMD_GET_UPTIME: u8 = 0x30;

// ============================================================================
// Status Bytes (firmware → host)
// ============================================================================

/// Command completed successfully.
pub const STATUS_OK: u8 = 0x00;
/// Command failed for an unspecified reason.
pub const STATUS_FAIL: u8 = 0x01;
/// The queried feature is disabled in configuration.
pub const STATUS_DISABLED: u8 = 0x02;
/// The opcode was not recognized by the firmware.
pub const STATUS_INVALID_CMD: u8 = 0x03;
/// The payload was rejected by the firmware.
pub const STATUS_INVALID_VALUE: u8 = 0x04;
/// The opcode is recognized but not implemented on this firmware revision.
pub const STATUS_NOT_IMPLEMENTED: u8 = 0x05;

// ============================================================================
// Payload Limits
// ============================================================================

// The firmware rejects values outside these bounds with STATUS_INVALID_VALUE;
// checking them host-side avoids streaming a payload that cannot be accepted.

/// Minimum SSID length in bytes.
pub const MIN_SSID_LEN: usize = 2;
/// Maximum SSID length in bytes (802.11 limit, enforced by the firmware).
pub const MAX_SSID_LEN: usize = 32;
/// Minimum WPA key length in bytes.
pub const MIN_WIFI_KEY_LEN: usize = 8;
/// Maximum WPA key length in bytes.
pub const MAX_WIFI_KEY_LEN: usize = 63;
