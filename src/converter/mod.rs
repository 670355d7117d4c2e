pub mod decode;
pub mod encode;
pub mod radix;

pub use crate::base_common::Alphabet;
use crate::base_common::alphabet;
pub use decode::DecodeError;
use std::{error, fmt, sync::LazyLock};

pub const DECIMAL_ALPHABET: &str = "0123456789";
pub const DEFAULT_SIGN_MARKER: char = '-';

static DECIMAL_DIGITS: LazyLock<Alphabet> = LazyLock::new(|| match Alphabet::new(DECIMAL_ALPHABET) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
});

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    AlphabetEmpty,
    SingleCharacterAlphabet,
    SignMarkerLength { length: usize },
    SignCharInAlphabet { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlphabetEmpty => write!(f, "Alphabet cannot be an empty string"),
            Self::SingleCharacterAlphabet => write!(f, "Alphabet must contain at least two characters"),
            Self::SignMarkerLength { length } => write!(f, "Sign marker must be a single character, got {}", length),
            Self::SignCharInAlphabet { character, index } => {
                write!(f, "Sign character '{}' found in converter base alphabet at index {}", character, index)
            }
        }
    }
}

impl From<alphabet::Error> for Error {
    fn from(error: alphabet::Error) -> Self {
        match error {
            alphabet::Error::Empty => Error::AlphabetEmpty,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Converter {
    alphabet: Alphabet,
    sign_marker: char,
    decimal_digits: &'static Alphabet,
}

impl Converter {
    pub fn new(alphabet: &str, sign_marker: &str) -> Result<Self, Error> {
        let alphabet = Alphabet::new(alphabet)?;
        if alphabet.len() < 2 {
            return Err(Error::SingleCharacterAlphabet);
        }

        let mut characters = sign_marker.chars();
        let sign_marker = match (characters.next(), characters.next()) {
            (None, _) => DEFAULT_SIGN_MARKER,
            (Some(character), None) => character,
            (Some(_), Some(_)) => {
                return Err(Error::SignMarkerLength {
                    length: sign_marker.chars().count(),
                })
            }
        };

        if let Some(index) = alphabet.position(sign_marker) {
            return Err(Error::SignCharInAlphabet {
                character: sign_marker,
                index,
            });
        }

        Ok(Self {
            alphabet,
            sign_marker,
            decimal_digits: &DECIMAL_DIGITS,
        })
    }

    pub fn alphabet(&self) -> &str {
        self.alphabet.as_str()
    }

    pub fn sign_marker(&self) -> char {
        self.sign_marker
    }

    pub fn base(&self) -> usize {
        self.alphabet.len()
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<BaseConverter: base{} ({})>", self.base(), self.alphabet())
    }
}

#[cfg(test)]
mod tests {
    use super::{Converter, Error};

    #[test]
    fn new() {
        assert_eq!(Converter::new("", "").err(), Some(Error::AlphabetEmpty));
        assert_eq!(Converter::new("   ", "$").err(), Some(Error::AlphabetEmpty));
        assert_eq!(Converter::new("x", "").err(), Some(Error::SingleCharacterAlphabet));
        assert_eq!(
            Converter::new("abc", "a").err(),
            Some(Error::SignCharInAlphabet { character: 'a', index: 0 })
        );
        assert_eq!(
            Converter::new("0123456789-", "").err(),
            Some(Error::SignCharInAlphabet { character: '-', index: 10 })
        );
        assert_eq!(Converter::new("abc", "--").err(), Some(Error::SignMarkerLength { length: 2 }));
        assert!(Converter::new("abc", "d").is_ok());
    }

    #[test]
    fn default_sign_marker() {
        let converter = Converter::new("0123456789abcdefghij", "").unwrap();
        assert_eq!(converter.sign_marker(), '-');
        assert_eq!(converter.base(), 20);
    }

    #[test]
    fn describe() {
        let converter = Converter::new("cjdhel3", "g").unwrap();
        assert_eq!(converter.describe(), "<BaseConverter: base7 (cjdhel3)>");
        assert_eq!(format!("{}", converter), "<BaseConverter: base7 (cjdhel3)>");
    }

    #[test]
    fn is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Converter>();
    }
}
