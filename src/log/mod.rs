//! Persistence of send attempts.
//!
//! The sender only needs a way to append one [`SmsLogEntry`] per call; storage is behind the
//! [`SmsLogStore`] trait. [`SqliteSmsLog`] is the bundled implementation.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;

use crate::domain::SmsLogEntry;

mod sqlite;

pub use sqlite::SqliteSmsLog;

/// Boxed, sendable future returned by [`SmsLogStore`] implementations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Error type stores report; it reaches the caller unchanged inside `SmsError::Log`.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Append-only sink for send attempts.
pub trait SmsLogStore: Send + Sync {
    fn record<'a>(&'a self, entry: SmsLogEntry) -> BoxFuture<'a, Result<(), BoxError>>;
}
