use super::{Alphabet, DecodeError};

pub fn convert(text: &str, from: &Alphabet, to: &Alphabet, sign: char) -> Result<(bool, String), DecodeError> {
    let mut characters = text.chars().peekable();
    let negative = match characters.peek() {
        Some(&character) => character == sign,
        None => return Err(DecodeError::EmptyInput),
    };
    if negative {
        characters.next();
    }

    let offset = negative as usize;
    let base = from.len() as u64;
    let mut accumulator: u64 = 0;
    for (index, character) in characters.enumerate() {
        let digit = from.decode(character, index + offset)? as u64;
        accumulator = accumulator
            .checked_mul(base)
            .and_then(|value| value.checked_add(digit))
            .ok_or(DecodeError::Overflow)?;
    }

    Ok((negative, expand(accumulator, to)))
}

fn expand(mut accumulator: u64, to: &Alphabet) -> String {
    if accumulator == 0 {
        return to.encode(0).to_string();
    }

    let base = to.len() as u64;
    let mut digits = Vec::new();
    while accumulator > 0 {
        digits.push(to.encode((accumulator % base) as usize));
        accumulator /= base;
    }
    digits.iter().rev().collect()
}
