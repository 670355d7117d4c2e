use crate::Logger;
use baseconv::{presets, Converter};

pub const CUSTOM_CONVERTER_NAME: &str = "custom";

pub struct State {
    custom_converter: Option<Converter>,
    logger: Logger,
}

impl State {
    pub fn new(custom_converter: Option<Converter>, logger: Logger) -> Self {
        Self {
            custom_converter,
            logger,
        }
    }

    pub fn converter(&self, name: &str) -> Option<&Converter> {
        if name == CUSTOM_CONVERTER_NAME {
            self.custom_converter.as_ref()
        } else {
            presets::get(name)
        }
    }

    pub fn converters(&self) -> Vec<(&str, &Converter)> {
        let mut converters: Vec<(&str, &Converter)> = presets::all().collect();
        if let Some(converter) = &self.custom_converter {
            converters.push((CUSTOM_CONVERTER_NAME, converter));
        }
        converters
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}
