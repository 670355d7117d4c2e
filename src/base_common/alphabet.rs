use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    Empty,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Alphabet cannot be an empty string"),
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Alphabet {
    text: String,
    encode: Vec<char>,
    ascii: [Option<usize>; 128],
}

impl Alphabet {
    pub fn new(text: &str) -> Result<Self, Error> {
        if text.trim().is_empty() {
            return Err(Error::Empty);
        }

        let encode: Vec<char> = text.chars().collect();
        let mut ascii: [Option<usize>; 128] = [None; 128];
        for (index, &character) in encode.iter().enumerate() {
            // first occurrence wins
            if character.is_ascii() && ascii[character as usize].is_none() {
                ascii[character as usize] = Some(index);
            }
        }

        Ok(Self {
            text: text.to_string(),
            encode,
            ascii,
        })
    }

    pub fn encode(&self, value: usize) -> char {
        self.encode[value]
    }

    pub fn decode(&self, character: char, index: usize) -> Result<usize, DecodeError> {
        self.position(character).ok_or(DecodeError::InvalidCharacter { character, index })
    }

    pub fn position(&self, character: char) -> Option<usize> {
        if character.is_ascii() {
            self.ascii[character as usize]
        } else {
            self.encode.iter().position(|&value| value == character)
        }
    }

    pub fn len(&self) -> usize {
        self.encode.len()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}
