//! Typed Rust client for the MSM.AZ SMS HTTP gateway.
//!
//! The crate is split the same way as the wire exchange: a domain layer of plain types
//! (configuration, phone/message values, the parsed gateway reply), a transport layer for the
//! query string and the URL-encoded response body, a client layer that runs one send, and a
//! log layer that optionally persists every attempt.
//!
//! ```rust,no_run
//! use msmaz::{SendConfig, SmsSender};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sender = SmsSender::new(SendConfig::from_env()?)?;
//!     match sender.send("994501234567", "hello").await {
//!         Ok(()) => {}
//!         Err(err) if err.is_not_sent() => eprintln!("rejected: {err}"),
//!         Err(err) => return Err(err.into()),
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod log;
mod transport;

pub use client::{SmsError, SmsSender, SmsSenderBuilder};
pub use domain::{
    ConfigError, GatewayResponse, MessageText, PhoneNumber, Recipient, ResponseCode, SendConfig,
    SendSms, SmsLogEntry, ValidationError,
};
pub use log::{SmsLogStore, SqliteSmsLog};
