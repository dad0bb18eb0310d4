use crate::domain::value::{MessageText, Recipient};

/// A single send request: one destination, one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSms {
    phone: Recipient,
    message: MessageText,
}

impl SendSms {
    pub fn new(phone: impl Into<Recipient>, message: impl Into<MessageText>) -> Self {
        Self {
            phone: phone.into(),
            message: message.into(),
        }
    }

    pub fn phone(&self) -> &Recipient {
        &self.phone
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }
}
