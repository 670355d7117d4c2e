use crate::Converter;
use std::sync::LazyLock;

pub const BASE2_ALPHABET: &str = "01";
pub const BASE16_ALPHABET: &str = "0123456789ABCDEF";
pub const BASE36_ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyz";
pub const BASE56_ALPHABET: &str = "23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnpqrstuvwxyz";
pub const BASE62_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub const BASE64_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";

fn build(alphabet: &str, sign_marker: &str) -> Converter {
    match Converter::new(alphabet, sign_marker) {
        Ok(converter) => converter,
        Err(_) => panic!("Could not build converter"),
    }
}

pub static BASE2: LazyLock<Converter> = LazyLock::new(|| build(BASE2_ALPHABET, "-"));
pub static BASE16: LazyLock<Converter> = LazyLock::new(|| build(BASE16_ALPHABET, "-"));
pub static BASE36: LazyLock<Converter> = LazyLock::new(|| build(BASE36_ALPHABET, "-"));
pub static BASE56: LazyLock<Converter> = LazyLock::new(|| build(BASE56_ALPHABET, "-"));
pub static BASE62: LazyLock<Converter> = LazyLock::new(|| build(BASE62_ALPHABET, "-"));
// '-' is a digit here
pub static BASE64: LazyLock<Converter> = LazyLock::new(|| build(BASE64_ALPHABET, "$"));

pub const NAMES: [&str; 6] = ["base2", "base16", "base36", "base56", "base62", "base64"];

pub fn get(name: &str) -> Option<&'static Converter> {
    match name {
        "base2" => Some(&*BASE2),
        "base16" => Some(&*BASE16),
        "base36" => Some(&*BASE36),
        "base56" => Some(&*BASE56),
        "base62" => Some(&*BASE62),
        "base64" => Some(&*BASE64),
        _ => None,
    }
}

pub fn all() -> impl Iterator<Item = (&'static str, &'static Converter)> {
    NAMES.into_iter().filter_map(|name| get(name).map(|converter| (name, converter)))
}

#[cfg(test)]
mod tests {
    #[test]
    fn presets() {
        assert_eq!(super::BASE2.base(), 2);
        assert_eq!(super::BASE16.base(), 16);
        assert_eq!(super::BASE36.base(), 36);
        assert_eq!(super::BASE56.base(), 56);
        assert_eq!(super::BASE62.base(), 62);
        assert_eq!(super::BASE64.base(), 64);
        assert_eq!(super::BASE64.sign_marker(), '$');
        assert_eq!(super::BASE62.sign_marker(), '-');
    }

    #[test]
    fn get() {
        assert_eq!(super::get("base36").map(|converter| converter.encode(1234)), Some("ya".to_string()));
        assert!(super::get("base10").is_none());
        assert_eq!(super::all().count(), super::NAMES.len());
        for (name, converter) in super::all() {
            assert_eq!(name, format!("base{}", converter.base()));
        }
    }
}
