use crate::chronometer::Chronometer;
use std::fmt::Display;

#[derive(Clone, Copy)]
pub struct Logger {
    chronometer: Chronometer,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            chronometer: Chronometer::new(),
        }
    }

    pub fn log(&self, value: impl Display) {
        println!("{}", self.format(value));
    }

    fn format(&self, value: impl Display) -> String {
        format!("{} ({} elapsed)", value, self.chronometer.elapsed())
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn format() {
        let logger = super::Logger::new();
        let line = logger.format("GET /converters");
        assert!(line.starts_with("GET /converters (00:"));
        assert!(line.ends_with(" elapsed)"));
    }
}
