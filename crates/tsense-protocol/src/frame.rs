//! Frame reading with interleaved log-line extraction.
//!
//! The firmware shares its single UART between reply frames and its own
//! diagnostic log output. A log line starts with a level marker byte and runs
//! to the next newline:
//!
//! ```text
//! 'D' " boot ok\n"  0x00 0x00 0xBC 0x41  0x00
//! \----log line---/  \----reply frame-------/
//! ```
//!
//! [`FramedReader`] reads the stream one leading byte at a time: a marker
//! byte starts a log line, which is drained to its newline and handed to the
//! caller's [`LogSink`]; anything else is the first byte of the reply frame.

use std::io::Read;

use crate::error::ProtocolResult;

/// Log levels the firmware emits, identified by their marker byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Error (`E`).
    Error,
    /// Warning (`W`).
    Warn,
    /// Informational (`I`).
    Info,
    /// Debug (`D`).
    Debug,
    /// Verbose (`V`).
    Verbose,
}

impl LogLevel {
    /// The marker byte that introduces a line at this level.
    pub fn marker(&self) -> u8 {
        match self {
            LogLevel::Error => b'E',
            LogLevel::Warn => b'W',
            LogLevel::Info => b'I',
            LogLevel::Debug => b'D',
            LogLevel::Verbose => b'V',
        }
    }

    /// Classify a leading byte. Returns `None` for bytes that are not log
    /// markers, i.e. bytes that belong to a reply frame.
    pub fn from_marker(byte: u8) -> Option<LogLevel> {
        match byte {
            b'E' => Some(LogLevel::Error),
            b'W' => Some(LogLevel::Warn),
            b'I' => Some(LogLevel::Info),
            b'D' => Some(LogLevel::Debug),
            b'V' => Some(LogLevel::Verbose),
            _ => None,
        }
    }
}

/// Receiver for diagnostic log lines extracted from the byte stream.
///
/// `text` is the raw line content after the marker byte, newline included,
/// exactly as it appeared on the wire. Non-UTF-8 bytes are replaced with
/// U+FFFD: log lines are diagnostics, so they decode leniently, unlike
/// string replies which fail closed.
pub trait LogSink {
    /// Called once per log line, in wire order, before any frame bytes that
    /// followed the line are returned.
    fn log_line(&mut self, level: LogLevel, text: &str);
}

/// Accumulating sink, mainly useful in tests.
impl LogSink for Vec<(LogLevel, String)> {
    fn log_line(&mut self, level: LogLevel, text: &str) {
        self.push((level, text.to_string()));
    }
}

/// Reads reply frames from a byte stream, transparently extracting the log
/// lines interleaved with them.
///
/// The reader holds no buffer across calls; every byte it consumes is either
/// delivered to the sink as part of a log line or returned as part of a
/// frame. Blocking and timeout behavior belong entirely to the underlying
/// source.
#[derive(Debug)]
pub struct FramedReader<R> {
    source: R,
}

impl<R: Read> FramedReader<R> {
    /// Create a reader over a byte source.
    pub fn new(source: R) -> Self {
        FramedReader { source }
    }

    /// Read exactly `len` frame bytes, draining any log lines that precede
    /// the frame into `sink`.
    ///
    /// A `len` of zero succeeds immediately without touching the source.
    pub fn read_frame(&mut self, len: usize, sink: &mut dyn LogSink) -> ProtocolResult<Vec<u8>> {
        if len == 0 {
            return Ok(Vec::new());
        }

        loop {
            let lead = self.read_byte()?;

            if let Some(level) = LogLevel::from_marker(lead) {
                self.drain_log_line(level, sink)?;
                continue;
            }

            let mut frame = Vec::with_capacity(len);
            frame.push(lead);
            if len > 1 {
                let mut rest = vec![0u8; len - 1];
                self.source.read_exact(&mut rest)?;
                frame.extend_from_slice(&rest);
            }
            log::trace!("read {} frame byte(s): {:02X?}", frame.len(), frame);
            return Ok(frame);
        }
    }

    /// Consume a log line (everything up to and including the newline) and
    /// deliver it to the sink.
    fn drain_log_line(&mut self, level: LogLevel, sink: &mut dyn LogSink) -> ProtocolResult<()> {
        let mut line = Vec::new();
        loop {
            let byte = self.read_byte()?;
            line.push(byte);
            if byte == b'\n' {
                break;
            }
        }
        let text = String::from_utf8_lossy(&line);
        sink.log_line(level, &text);
        Ok(())
    }

    fn read_byte(&mut self) -> ProtocolResult<u8> {
        let mut buf = [0u8; 1];
        self.source.read_exact(&mut buf)?;
        Ok(buf[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_zero_length_frame_reads_nothing() {
        // A source that would fail if touched
        struct NoRead;
        impl Read for NoRead {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                panic!("read_frame(0) must not read");
            }
        }

        let mut sink: Vec<(LogLevel, String)> = Vec::new();
        let mut reader = FramedReader::new(NoRead);
        let frame = reader.read_frame(0, &mut sink).unwrap();
        assert!(frame.is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_plain_frame() {
        let mut sink: Vec<(LogLevel, String)> = Vec::new();
        let mut reader = FramedReader::new(Cursor::new(vec![0x00, 0x01, 0x02]));
        let frame = reader.read_frame(3, &mut sink).unwrap();
        assert_eq!(frame, vec![0x00, 0x01, 0x02]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_log_line_before_frame() {
        let mut stream = b"D boot ok\n".to_vec();
        stream.push(0x00);

        let mut sink: Vec<(LogLevel, String)> = Vec::new();
        let mut reader = FramedReader::new(Cursor::new(stream));
        let frame = reader.read_frame(1, &mut sink).unwrap();

        assert_eq!(frame, vec![0x00]);
        assert_eq!(sink, vec![(LogLevel::Debug, " boot ok\n".to_string())]);
    }

    #[test]
    fn test_multiple_log_lines_in_wire_order() {
        let mut stream = Vec::new();
        stream.extend_from_slice(b"I wifi up\n");
        stream.extend_from_slice(b"W rssi low\n");
        stream.extend_from_slice(b"E sensor nack\n");
        stream.extend_from_slice(&[0x07, 0x08]);

        let mut sink: Vec<(LogLevel, String)> = Vec::new();
        let mut reader = FramedReader::new(Cursor::new(stream));
        let frame = reader.read_frame(2, &mut sink).unwrap();

        assert_eq!(frame, vec![0x07, 0x08]);
        assert_eq!(
            sink,
            vec![
                (LogLevel::Info, " wifi up\n".to_string()),
                (LogLevel::Warn, " rssi low\n".to_string()),
                (LogLevel::Error, " sensor nack\n".to_string()),
            ]
        );
    }

    #[test]
    fn test_newline_not_duplicated_into_frame() {
        // The newline ends the log line; the next byte starts the frame.
        let mut stream = b"V tick\n".to_vec();
        stream.extend_from_slice(&[0xAA, 0xBB]);

        let mut sink: Vec<(LogLevel, String)> = Vec::new();
        let mut reader = FramedReader::new(Cursor::new(stream));
        let frame = reader.read_frame(2, &mut sink).unwrap();
        assert_eq!(frame, vec![0xAA, 0xBB]);
        assert_eq!(sink.len(), 1);
        assert!(sink[0].1.ends_with('\n'));
    }

    #[test]
    fn test_frame_body_may_contain_marker_bytes() {
        // Only the leading byte of a frame is classified; 'D' (0x44) inside
        // the frame body is plain data.
        let stream = vec![0x00, b'D', 0x02];

        let mut sink: Vec<(LogLevel, String)> = Vec::new();
        let mut reader = FramedReader::new(Cursor::new(stream));
        let frame = reader.read_frame(3, &mut sink).unwrap();
        assert_eq!(frame, vec![0x00, b'D', 0x02]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_truncated_source_is_a_transport_error() {
        let mut sink: Vec<(LogLevel, String)> = Vec::new();
        let mut reader = FramedReader::new(Cursor::new(vec![0x00]));
        let err = reader.read_frame(4, &mut sink).unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn test_marker_round_trip() {
        for level in [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Verbose,
        ] {
            assert_eq!(LogLevel::from_marker(level.marker()), Some(level));
        }
        assert_eq!(LogLevel::from_marker(0x00), None);
        assert_eq!(LogLevel::from_marker(b'X'), None);
    }
}
