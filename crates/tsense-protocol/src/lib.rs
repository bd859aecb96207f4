//! Temperature Sensor UART Protocol
//!
//! This crate provides types and utilities for communicating with the
//! temperature/humidity sensor firmware over its UART protocol. The host sends
//! single-opcode commands, optionally carrying a NUL-terminated string payload,
//! and receives a fixed-size binary reply terminated (or accompanied) by a
//! one-byte status code.
//!
//! # Protocol Overview
//!
//! The firmware shares one serial channel between protocol data and its own
//! diagnostic log output:
//!
//! - **Commands** (host → firmware): Start with a `CMD_*` opcode byte
//! - **Replies** (firmware → host): Fixed-size frames whose length is
//!   determined by the command that was sent, ending in a `STATUS_*` byte
//! - **Log lines** (firmware → host): Start with a level marker byte
//!   (`E`/`W`/`I`/`D`/`V`) and run to the next newline, interleaved with
//!   reply bytes at arbitrary points
//!
//! [`FramedReader`] separates the two streams; [`CommandClient`] drives the
//! full encode → write → read → decode cycle, one command at a time.
//!
//! # Example
//!
//! ```rust,ignore
//! use tsense_protocol::{Command, CommandClient, LogLevel, LogSink};
//!
//! struct Stderr;
//! impl LogSink for Stderr {
//!     fn log_line(&mut self, level: LogLevel, text: &str) {
//!         eprint!("{}{}", level.marker() as char, text);
//!     }
//! }
//!
//! let mut client = CommandClient::new(port, Stderr);
//! let response = client.send(&Command::GetTemperature)?;
//! ```

mod client;
mod commands;
mod constants;
mod error;
mod frame;
mod responses;
mod status;

pub use client::*;
pub use commands::*;
pub use constants::*;
pub use error::*;
pub use frame::*;
pub use responses::*;
pub use status::*;
