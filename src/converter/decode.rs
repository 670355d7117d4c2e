use super::{radix, Converter};
use crate::base_common::alphabet;
use std::{
    error, fmt,
    num::{IntErrorKind, ParseIntError},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    EmptyInput,
    InvalidDigit { character: char, index: usize },
    Overflow,
    Malformed,
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Cannot decode an empty string"),
            Self::InvalidDigit { character, index } => write!(f, "Invalid digit '{}' at index {}", character, index),
            Self::Overflow => write!(f, "Value does not fit in a signed 64-bit integer"),
            Self::Malformed => write!(f, "Malformed decimal value"),
        }
    }
}

impl From<alphabet::DecodeError> for DecodeError {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => DecodeError::InvalidDigit { character, index },
        }
    }
}

impl From<ParseIntError> for DecodeError {
    fn from(error: ParseIntError) -> Self {
        match error.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => DecodeError::Overflow,
            _ => DecodeError::Malformed,
        }
    }
}

impl Converter {
    pub fn decode(&self, text: &str) -> Result<i64, DecodeError> {
        let (negative, value) = radix::convert(text, &self.alphabet, self.decimal_digits, self.sign_marker)?;
        if negative {
            Ok(format!("-{}", value).parse::<i64>()?)
        } else {
            Ok(value.parse::<i64>()?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DecodeError;
    use crate::{presets, Converter};

    #[test]
    fn decode() {
        assert_eq!(presets::BASE36.decode("ya"), Ok(1234));
        assert_eq!(presets::BASE36.decode("-ya"), Ok(-1234));
        assert_eq!(presets::BASE64.decode("JI"), Ok(1234));
        assert_eq!(presets::BASE64.decode("$JI"), Ok(-1234));
        assert_eq!(presets::BASE16.decode("4D2"), Ok(1234));
    }

    #[test]
    fn decode_custom() {
        let base11 = Converter::new("0123456789-", "$").unwrap();
        assert_eq!(base11.decode("-22"), Ok(1234));
        assert_eq!(base11.decode("$-22"), Ok(-1234));

        let base20 = Converter::new("0123456789abcdefghij", "").unwrap();
        assert_eq!(base20.decode("31e"), Ok(1234));
        assert_eq!(base20.decode("-31e"), Ok(-1234));

        let base7 = Converter::new("cjdhel3", "g").unwrap();
        assert_eq!(base7.decode("hejd"), Ok(1234));
        assert_eq!(base7.decode("ghejd"), Ok(-1234));
    }

    #[test]
    fn decode_zero() {
        assert_eq!(presets::BASE56.decode("2"), Ok(0));
        assert_eq!(presets::BASE56.decode("-"), Ok(0));
        assert_eq!(presets::BASE2.decode("0000"), Ok(0));
    }

    #[test]
    fn decode_extremes() {
        assert_eq!(presets::BASE2.decode(&"1".repeat(63)), Ok(i64::MAX));
        assert_eq!(presets::BASE2.decode(&format!("-1{}", "0".repeat(63))), Ok(i64::MIN));
    }

    #[test]
    fn decode_errors() {
        assert_eq!(presets::BASE36.decode(""), Err(DecodeError::EmptyInput));
        assert_eq!(
            presets::BASE36.decode("yA"),
            Err(DecodeError::InvalidDigit { character: 'A', index: 1 })
        );
        assert_eq!(presets::BASE64.decode("$$"), Err(DecodeError::InvalidDigit { character: '$', index: 1 }));
        assert_eq!(presets::BASE2.decode(&format!("1{}", "0".repeat(63))), Err(DecodeError::Overflow));
        assert_eq!(presets::BASE2.decode(&format!("-1{}1", "0".repeat(62))), Err(DecodeError::Overflow));
        assert_eq!(presets::BASE62.decode(&"z".repeat(20)), Err(DecodeError::Overflow));
    }
}
