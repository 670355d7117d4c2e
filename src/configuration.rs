use baseconv::Converter;
use std::{env, error, net::IpAddr};

#[derive(Debug, Clone)]
pub struct Configuration {
    host: IpAddr,
    port: u16,
    custom_converter: Option<Converter>,
}

fn var(key: &str, default: Option<String>) -> Result<String, String> {
    match env::var(key) {
        Ok(value) => Ok(value),
        Err(_) => default.ok_or(format!("Missing {}", key)),
    }
}

fn var_map<T, E: error::Error>(key: &str, mut f: impl FnMut(&str) -> Result<T, E>, default: Option<T>) -> Result<T, String> {
    match var(key, None) {
        Ok(value) => f(&value).map_err(|err| format!("Invalid {} {} ({})", key, value, err)),
        Err(err) => default.ok_or(err),
    }
}

impl Configuration {
    pub fn new() -> Self {
        let host = var_map("HOST", |host| host.parse(), Some("127.0.0.1".parse().unwrap())).unwrap();
        let port = var_map("PORT", |port| port.parse(), Some(8000)).unwrap();
        let sign_marker = var("SIGN_MARKER", Some(String::new())).unwrap();
        let custom_converter = var_map("ALPHABET", |alphabet| Converter::new(alphabet, &sign_marker).map(Some), Some(None)).unwrap();
        Self {
            host,
            port,
            custom_converter,
        }
    }

    pub fn host(&self) -> IpAddr {
        self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn custom_converter(&self) -> Option<&Converter> {
        self.custom_converter.as_ref()
    }
}
