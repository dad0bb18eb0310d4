use std::fmt;

use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Destination phone number as sent to the gateway (`gsm`).
///
/// No validation or trimming is applied; the gateway decides what it accepts. If you want
/// E.164 normalization, parse into [`PhoneNumber`] and convert it into [`Recipient`].
pub struct Recipient(String);

impl Recipient {
    /// Query parameter name used by the gateway (`gsm`).
    pub const FIELD: &'static str = "gsm";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Value exactly as it will be sent.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Recipient {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Recipient {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<PhoneNumber> for Recipient {
    /// The gateway expects international digits without the leading `+`.
    fn from(value: PhoneNumber) -> Self {
        let digits = value.e164.trim_start_matches('+').to_owned();
        Self(digits)
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix,
    /// e.g. `Some(country::Id::AZ)` for local Azerbaijani numbers.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty {
                field: Recipient::FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation (with leading `+`).
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`text`).
///
/// Built from either text or an integer; integers are rendered in decimal. The value is
/// not validated, length limits are enforced by the gateway.
pub struct MessageText(String);

impl MessageText {
    /// Query parameter name used by the gateway (`text`).
    pub const FIELD: &'static str = "text";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MessageText {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for MessageText {
    fn from(value: String) -> Self {
        Self(value)
    }
}

macro_rules! message_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for MessageText {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

message_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl fmt::Display for MessageText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Status code reported by the gateway in `errno`.
///
/// The raw text is preserved as-is. Use [`ResponseCode::is_success`] to test it against the
/// success marker; a plain string comparison is not enough because the gateway contract
/// treats every numeric spelling of 100 as success.
pub struct ResponseCode(String);

impl ResponseCode {
    /// Response field carrying the code (`errno`).
    pub const FIELD: &'static str = "errno";

    /// The gateway's "message accepted" code.
    pub const SUCCESS: i32 = 100;

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Code exactly as it appeared in the response body.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the code, if it is a numeric string.
    ///
    /// Accepts surrounding ASCII whitespace, an optional sign, decimal digits, an optional
    /// fraction and an optional exponent. Hex, `inf` and `nan` are not numeric.
    pub fn numeric_value(&self) -> Option<f64> {
        let trimmed = self.0.trim_matches(|c: char| c.is_ascii_whitespace());
        if !is_numeric_literal(trimmed) {
            return None;
        }
        trimmed.parse::<f64>().ok()
    }

    /// Returns `true` if the code is numerically equal to [`ResponseCode::SUCCESS`].
    pub fn is_success(&self) -> bool {
        self.numeric_value() == Some(f64::from(Self::SUCCESS))
    }
}

impl From<&str> for ResponseCode {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<i32> for ResponseCode {
    fn from(value: i32) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_numeric_literal(value: &str) -> bool {
    let bytes = value.as_bytes();
    let mut idx = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        idx += 1;
    }

    let int_start = idx;
    while bytes.get(idx).is_some_and(u8::is_ascii_digit) {
        idx += 1;
    }
    let mut digits = idx - int_start;

    if bytes.get(idx) == Some(&b'.') {
        idx += 1;
        let frac_start = idx;
        while bytes.get(idx).is_some_and(u8::is_ascii_digit) {
            idx += 1;
        }
        digits += idx - frac_start;
    }

    if digits == 0 {
        return false;
    }

    if matches!(bytes.get(idx), Some(b'e' | b'E')) {
        idx += 1;
        if matches!(bytes.get(idx), Some(b'+' | b'-')) {
            idx += 1;
        }
        let exp_start = idx;
        while bytes.get(idx).is_some_and(u8::is_ascii_digit) {
            idx += 1;
        }
        if idx == exp_start {
            return false;
        }
    }

    idx == bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_marker_accepts_numeric_spellings_of_100() {
        for code in [
            "100", " 100", "100 ", "\t100\n", "+100", "0100", "100.0", "100.", "1e2", "1E+2",
        ] {
            assert!(
                ResponseCode::from(code).is_success(),
                "{code:?} should succeed"
            );
        }
        assert!(ResponseCode::from(100).is_success());
    }

    #[test]
    fn success_marker_rejects_everything_else() {
        for code in [
            "1000", "10", "-100", "100abc", "abc", "", "   ", "0x64", "inf", "nan", "1e", ".", "+",
            "1 00",
        ] {
            assert!(!ResponseCode::from(code).is_success(), "{code:?} should fail");
        }
    }

    #[test]
    fn numeric_value_is_none_for_non_numeric_codes() {
        assert_eq!(ResponseCode::from("210").numeric_value(), Some(210.0));
        assert_eq!(ResponseCode::from("OK").numeric_value(), None);
    }

    #[test]
    fn message_text_renders_integers_in_decimal() {
        assert_eq!(MessageText::from(12345).as_str(), "12345");
        assert_eq!(MessageText::from(-7_i64).as_str(), "-7");
        assert_eq!(MessageText::from(0_u8).as_str(), "0");
        assert_eq!(MessageText::from("").as_str(), "");
    }

    #[test]
    fn recipient_keeps_input_untouched() {
        assert_eq!(Recipient::from(" 994 50 ").as_str(), " 994 50 ");
    }

    #[test]
    fn parsed_phone_number_converts_to_gateway_digits() {
        let pn = PhoneNumber::parse(None, " +994 50 123 45 67 ").unwrap();
        assert_eq!(pn.raw(), "+994 50 123 45 67");
        assert_eq!(pn.e164(), "+994501234567");
        assert_eq!(Recipient::from(pn).as_str(), "994501234567");
    }

    #[test]
    fn parsed_phone_number_uses_default_region() {
        let pn = PhoneNumber::parse(Some(country::Id::AZ), "050 123 45 67").unwrap();
        assert_eq!(pn.e164(), "+994501234567");
    }

    #[test]
    fn parsed_phone_number_rejects_empty_and_garbage() {
        assert_eq!(
            PhoneNumber::parse(None, "  "),
            Err(ValidationError::Empty { field: "gsm" })
        );
        assert!(matches!(
            PhoneNumber::parse(None, "not a phone"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
    }
}
