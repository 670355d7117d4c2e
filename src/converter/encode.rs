use super::{radix, Converter};

impl Converter {
    pub fn encode(&self, value: i64) -> String {
        let (negative, magnitude) = match radix::convert(&value.to_string(), self.decimal_digits, &self.alphabet, '-') {
            Ok(result) => result,
            Err(_) => panic!("Could not convert decimal value {}", value),
        };
        if negative {
            let mut output = String::with_capacity(magnitude.len() + self.sign_marker.len_utf8());
            output.push(self.sign_marker);
            output.push_str(&magnitude);
            output
        } else {
            magnitude
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{presets, Converter};

    #[test]
    fn encode() {
        assert_eq!(presets::BASE36.encode(1234), "ya");
        assert_eq!(presets::BASE36.encode(-1234), "-ya");
        assert_eq!(presets::BASE64.encode(1234), "JI");
        assert_eq!(presets::BASE64.encode(-1234), "$JI");
        assert_eq!(presets::BASE16.encode(255), "FF");
        assert_eq!(presets::BASE2.encode(5), "101");
    }

    #[test]
    fn encode_custom() {
        let base11 = Converter::new("0123456789-", "$").unwrap();
        assert_eq!(base11.encode(1234), "-22");
        assert_eq!(base11.encode(-1234), "$-22");

        let base20 = Converter::new("0123456789abcdefghij", "").unwrap();
        assert_eq!(base20.encode(1234), "31e");
        assert_eq!(base20.encode(-1234), "-31e");

        let base7 = Converter::new("cjdhel3", "g").unwrap();
        assert_eq!(base7.encode(1234), "hejd");
        assert_eq!(base7.encode(-1234), "ghejd");
    }

    #[test]
    fn encode_zero() {
        assert_eq!(presets::BASE56.encode(0), "2");
        assert_eq!(presets::BASE64.encode(0), "0");
        assert_eq!(Converter::new("cjdhel3", "g").unwrap().encode(0), "c");
    }

    #[test]
    fn encode_extremes() {
        assert_eq!(presets::BASE2.encode(i64::MAX), "1".repeat(63));
        assert_eq!(presets::BASE2.encode(i64::MIN), format!("-1{}", "0".repeat(63)));
        assert_eq!(presets::BASE16.encode(i64::MIN), "-8000000000000000");
    }

    #[test]
    fn encode_non_ascii_sign_marker() {
        let converter = Converter::new("01", "−").unwrap();
        assert_eq!(converter.encode(-2), "−10");
        assert_eq!(converter.decode("−10"), Ok(-2));
    }

    #[test]
    fn round_trip() {
        let mut values = vec![-10_000_000_000, 10_000_000_000, i64::MIN, i64::MAX];
        values.extend(-100..=100);
        for (name, converter) in presets::all() {
            for &value in &values {
                assert_eq!(converter.decode(&converter.encode(value)), Ok(value), "{} {}", name, value);
            }
        }

        let converters = [
            Converter::new("0123456789-", "$").unwrap(),
            Converter::new("0123456789abcdefghij", "").unwrap(),
            Converter::new("cjdhel3", "g").unwrap(),
        ];
        for converter in &converters {
            for &value in &values {
                assert_eq!(converter.decode(&converter.encode(value)), Ok(value), "{} {}", converter, value);
            }
        }
    }
}
