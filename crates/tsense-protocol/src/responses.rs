//! Replies from the sensor firmware.

use std::io::Read;

use crate::commands::ReplyShape;
use crate::error::{ProtocolError, ProtocolResult};
use crate::frame::{FramedReader, LogSink};
use crate::status::StatusCode;

/// A decoded reply.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// The command produces no reply at all.
    None,

    /// A bare status byte.
    Status(StatusCode),

    /// A sensor reading (temperature or humidity) with its status.
    Reading {
        /// Measured value.
        value: f32,
        /// Trailing status byte.
        status: StatusCode,
    },

    /// Time since boot with its status.
    Uptime {
        /// Microseconds since boot.
        micros: i64,
        /// Trailing status byte.
        status: StatusCode,
    },

    /// A text reply terminated by the OK status byte.
    Text {
        /// The accumulated text.
        text: String,
        /// Terminal status byte (OK by construction of the loop exit).
        status: StatusCode,
    },
}

impl Response {
    /// The status carried by this reply, if it has one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Response::None => None,
            Response::Status(status) => Some(*status),
            Response::Reading { status, .. } => Some(*status),
            Response::Uptime { status, .. } => Some(*status),
            Response::Text { status, .. } => Some(*status),
        }
    }

    /// Read and decode a reply of the given shape.
    pub fn read<R: Read>(
        shape: ReplyShape,
        reader: &mut FramedReader<R>,
        sink: &mut dyn LogSink,
    ) -> ProtocolResult<Response> {
        match shape {
            ReplyShape::NoReply => Ok(Response::None),

            ReplyShape::Status => {
                let status = read_status(reader, sink)?;
                Ok(Response::Status(status))
            }

            ReplyShape::StatusPlusFloat32 => {
                let frame = reader.read_frame(4, sink)?;
                let value = f32::from_le_bytes(frame_bytes(&frame)?);
                let status = read_status(reader, sink)?;
                Ok(Response::Reading { value, status })
            }

            ReplyShape::StatusPlusInt64 => {
                let frame = reader.read_frame(8, sink)?;
                let micros = i64::from_le_bytes(frame_bytes(&frame)?);
                let status = read_status(reader, sink)?;
                Ok(Response::Uptime { micros, status })
            }

            ReplyShape::StatusTerminatedString => {
                // The terminator is any byte equal to STATUS_OK, so a text
                // byte of 0x00 ends the loop early. Inherited protocol
                // ambiguity: the wire gives no way to tell the two apart.
                let mut text = Vec::new();
                let status = loop {
                    let frame = reader.read_frame(1, sink)?;
                    let byte = frame[0];
                    if byte == u8::from(StatusCode::Ok) {
                        break StatusCode::Ok;
                    }
                    text.push(byte);
                };
                let text = String::from_utf8(text).map_err(|_| ProtocolError::InvalidUtf8)?;
                Ok(Response::Text { text, status })
            }
        }
    }
}

/// Read a single status byte, failing closed on unrecognized values.
fn read_status<R: Read>(
    reader: &mut FramedReader<R>,
    sink: &mut dyn LogSink,
) -> ProtocolResult<StatusCode> {
    let frame = reader.read_frame(1, sink)?;
    StatusCode::try_from(frame[0])
}

/// View a frame as a fixed-size array, for the `from_le_bytes` decoders.
fn frame_bytes<const N: usize>(frame: &[u8]) -> ProtocolResult<[u8; N]> {
    frame
        .try_into()
        .map_err(|_| ProtocolError::FrameTooShort {
            expected: N,
            actual: frame.len(),
        })
}
