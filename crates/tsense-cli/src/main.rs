//! Serial configuration tool for the temperature sensor.
//!
//! Opens the serial port, sends one command, prints the decoded reply, and
//! exits. Device log lines that arrive interleaved with the reply are echoed
//! to stderr as-is.

use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tsense_protocol::{Command, CommandClient, LogLevel, LogSink, Response};

/// Default baud rate of the sensor's UART console.
const DEFAULT_BAUD: u32 = 74_880;

#[derive(Parser)]
#[command(name = "tsense", version, about = "Serial tool to query and configure the temp sensor")]
struct Cli {
    /// Port the sensor is connected to.
    #[arg(long)]
    port: String,

    /// Baud rate to connect at.
    #[arg(long, default_value_t = DEFAULT_BAUD)]
    baud: u32,

    /// Read timeout in milliseconds.
    #[arg(long, default_value_t = 5000)]
    timeout_ms: u64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Reboot the sensor.
    Reset,
    /// Set the WiFi SSID.
    SetWifiSsid {
        /// SSID to connect to.
        #[arg(long)]
        ssid: String,
    },
    /// Show the currently configured WiFi SSID.
    GetWifi,
    /// Set the WPA key.
    SetWifiKey {
        /// WPA key to use.
        #[arg(long)]
        key: String,
    },
    /// Clear the stored WiFi configuration.
    ClearWifi,
    /// Read the current temperature.
    Temperature,
    /// Read the current relative humidity.
    Humidity,
    /// Show time since the sensor booted.
    Uptime,
}

impl Action {
    fn into_command(self) -> Command {
        match self {
            Action::Reset => Command::Reset,
            Action::SetWifiSsid { ssid } => Command::SetWifiSsid { ssid },
            Action::GetWifi => Command::GetWifiSsid,
            Action::SetWifiKey { key } => Command::SetWifiKey { key },
            Action::ClearWifi => Command::ClearWifiConfig,
            Action::Temperature => Command::GetTemperature,
            Action::Humidity => Command::GetHumidity,
            Action::Uptime => Command::GetUptime,
        }
    }
}

/// Echoes device log lines to stderr exactly as they appeared on the wire.
struct StderrLog;

impl LogSink for StderrLog {
    fn log_line(&mut self, level: LogLevel, text: &str) {
        eprint!("{}{}", level.marker() as char, text);
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let port = serialport::new(&cli.port, cli.baud)
        .data_bits(serialport::DataBits::Eight)
        .stop_bits(serialport::StopBits::One)
        .parity(serialport::Parity::None)
        .timeout(Duration::from_millis(cli.timeout_ms))
        .open()
        .with_context(|| format!("failed to open {} at {} baud", cli.port, cli.baud))?;
    tracing::debug!(port = %cli.port, baud = cli.baud, "serial port open");

    let mut client = CommandClient::new(port, StderrLog);
    let response = client
        .send(&cli.action.into_command())
        .context("command failed")?;
    print_response(&response);

    Ok(())
}

/// Formatting only; all protocol semantics live in tsense-protocol.
fn print_response(response: &Response) {
    match response {
        Response::None => {}

        Response::Status(status) => println!("{status}"),

        Response::Reading { value, status } => {
            println!("{value:.1}");
            println!("{status}");
        }

        Response::Uptime { micros, status } => {
            // Firmware reports microseconds; seconds are friendlier here.
            println!("{:.1} s", *micros as f64 / 1_000_000.0);
            println!("{status}");
        }

        Response::Text { text, status } => {
            println!("{text}");
            println!("{status}");
        }
    }
}
