use crate::domain::value::{MessageText, Recipient, ResponseCode};

/// Parsed gateway reply: `errno` and `errtext` from the URL-encoded body.
///
/// Absent fields are `None`; decoding never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewayResponse {
    pub code: Option<ResponseCode>,
    pub text: Option<String>,
}

impl GatewayResponse {
    /// Response field carrying the human-readable status (`errtext`).
    pub const TEXT_FIELD: &'static str = "errtext";

    /// Returns `true` only when a code is present and equals the success marker.
    pub fn is_success(&self) -> bool {
        self.code.as_ref().is_some_and(ResponseCode::is_success)
    }
}

/// One persisted send attempt.
///
/// Written after every send (success or failure) when logging is enabled; never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsLogEntry {
    pub phone: String,
    pub message: String,
    pub response_code: Option<String>,
    pub response_text: Option<String>,
}

impl SmsLogEntry {
    pub fn new(phone: &Recipient, message: &MessageText, response: &GatewayResponse) -> Self {
        Self {
            phone: phone.as_str().to_owned(),
            message: message.as_str().to_owned(),
            response_code: response.code.as_ref().map(|code| code.as_str().to_owned()),
            response_text: response.text.clone(),
        }
    }
}
