use url::form_urlencoded;

use crate::domain::{
    GatewayResponse, MessageText, Recipient, ResponseCode, SendConfig, SendSms,
};

const USER_FIELD: &str = "user";
const PASSWORD_FIELD: &str = "password";
const SENDER_FIELD: &str = "from";

pub fn encode_send_sms_query(config: &SendConfig, request: &SendSms) -> Vec<(String, String)> {
    vec![
        (USER_FIELD.to_owned(), config.username.clone()),
        (PASSWORD_FIELD.to_owned(), config.password.clone()),
        (SENDER_FIELD.to_owned(), config.sender.clone()),
        (
            Recipient::FIELD.to_owned(),
            request.phone().as_str().to_owned(),
        ),
        (
            MessageText::FIELD.to_owned(),
            request.message().as_str().to_owned(),
        ),
    ]
}

/// Decode a `key=value&...` body. Unknown keys are ignored and a repeated key keeps its
/// last value. Values are kept byte-for-byte after unescaping, trailing whitespace included.
pub fn decode_send_sms_response(body: &str) -> GatewayResponse {
    let mut response = GatewayResponse::default();

    for (key, value) in form_urlencoded::parse(body.as_bytes()) {
        match key.as_ref() {
            ResponseCode::FIELD => response.code = Some(ResponseCode::new(value.into_owned())),
            GatewayResponse::TEXT_FIELD => response.text = Some(value.into_owned()),
            _ => {}
        }
    }

    response
}
