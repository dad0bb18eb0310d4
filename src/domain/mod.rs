//! Domain layer: configuration and value types (no I/O).

mod config;
mod request;
mod response;
mod validation;
mod value;

pub use config::SendConfig;
pub use request::SendSms;
pub use response::{GatewayResponse, SmsLogEntry};
pub use validation::{ConfigError, ValidationError};
pub use value::{MessageText, PhoneNumber, Recipient, ResponseCode};
