pub mod base_common;
pub mod converter;
pub mod presets;

pub use base_common::Alphabet;
pub use converter::{Converter, DecodeError, Error};
