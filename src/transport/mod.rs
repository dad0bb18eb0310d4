//! Transport layer: wire-format details (query encoding, response decoding).

mod send_sms;

pub use send_sms::{decode_send_sms_response, encode_send_sms_query};
