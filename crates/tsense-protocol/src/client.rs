//! Command client: encode → write → read → decode, one command at a time.

use std::io::{Read, Write};

use crate::commands::Command;
use crate::error::ProtocolResult;
use crate::frame::{FramedReader, LogSink};
use crate::responses::Response;

/// A synchronous client for the sensor protocol.
///
/// Owns the link (anything `Read + Write`, typically a serial port) and a
/// sink for the device's diagnostic log lines. Exactly one command is
/// outstanding at a time; [`send`](CommandClient::send) blocks until the full
/// reply, including any interleaved log lines, has been consumed.
pub struct CommandClient<T, S> {
    link: T,
    sink: S,
}

impl<T: Read + Write, S: LogSink> CommandClient<T, S> {
    /// Create a client over an already-configured link.
    pub fn new(link: T, sink: S) -> Self {
        CommandClient { link, sink }
    }

    /// Send a command and block until its reply has been decoded.
    ///
    /// For commands with no reply (reset), the call returns as soon as the
    /// command bytes have been written; no read is attempted.
    pub fn send(&mut self, cmd: &Command) -> ProtocolResult<Response> {
        let buf = cmd.encode()?;
        log::debug!("sending 0x{:02X}, {} byte(s)", cmd.opcode(), buf.len());
        self.link.write_all(&buf)?;
        self.link.flush()?;

        let mut reader = FramedReader::new(&mut self.link);
        Response::read(cmd.reply_shape(), &mut reader, &mut self.sink)
    }

    /// Access the log sink, e.g. to inspect accumulated lines.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the client, returning the link and the sink.
    pub fn into_parts(self) -> (T, S) {
        (self.link, self.sink)
    }
}
