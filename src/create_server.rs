use crate::{Error, Server, State};
use baseconv::Converter;
use hyper::{Body, Response, StatusCode};
use serde::Serialize;
use serde_json::json;
use std::{collections::HashMap, sync::Arc};

macro_rules! unwrap {
    ( $x:expr ) => {{
        match $x {
            Ok(result) => result,
            Err(error) => return respond_error(error),
        }
    }};
}

#[derive(Serialize)]
struct ConverterDescription<'a> {
    name: &'a str,
    base: usize,
    alphabet: &'a str,
    sign_marker: String,
    description: String,
}

#[derive(Debug, PartialEq, Serialize)]
struct Encoded {
    value: i64,
    encoded: String,
}

#[derive(Debug, PartialEq, Serialize)]
struct Decoded {
    text: String,
    value: i64,
}

fn parameter<'a>(parameters: &'a HashMap<String, String>, name: &str) -> Result<&'a str, Error> {
    parameters
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| Error::new(format!("Missing {} parameter", name)))
}

fn find_converter<'a>(state: &'a State, parameters: &HashMap<String, String>) -> Result<&'a Converter, Error> {
    let name = parameter(parameters, "name")?;
    state
        .converter(name)
        .ok_or_else(|| Error::new(format!(r#"Unknown converter "{}""#, name)))
}

fn parse_value(value: &str) -> Result<i64, Error> {
    value
        .parse()
        .map_err(|_| Error::new(format!(r#"Invalid value "{}""#, value)))
}

fn parse_values_from_body(body: &[u8]) -> Result<Vec<i64>, Error> {
    serde_json::from_slice(body).map_err(|_| Error::new("Expecting array of integers in JSON body"))
}

fn parse_texts_from_body(body: &[u8]) -> Result<Vec<String>, Error> {
    serde_json::from_slice(body).map_err(|_| Error::new("Expecting array of strings in JSON body"))
}

fn encode(converter: &Converter, value: i64) -> Encoded {
    Encoded {
        value,
        encoded: converter.encode(value),
    }
}

fn decode(converter: &Converter, text: String) -> Result<Decoded, Error> {
    let value = converter.decode(&text)?;
    Ok(Decoded { text, value })
}

fn describe_converters(state: &State) -> serde_json::Value {
    json!(state
        .converters()
        .into_iter()
        .map(|(name, converter)| ConverterDescription {
            name,
            base: converter.base(),
            alphabet: converter.alphabet(),
            sign_marker: converter.sign_marker().to_string(),
            description: converter.describe(),
        })
        .collect::<Vec<_>>())
}

fn respond(status: StatusCode, value: serde_json::Value) -> Response<Body> {
    let mut response = Response::new(Body::from(value.to_string()));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(hyper::header::CONTENT_TYPE, hyper::header::HeaderValue::from_static("application/json"));
    response
}

fn respond_ok(value: serde_json::Value) -> Response<Body> {
    respond(StatusCode::OK, value)
}

fn respond_error(error: Error) -> Response<Body> {
    respond(StatusCode::BAD_REQUEST, json!({"message": error.message()}))
}

pub fn create_server(state: Arc<State>) -> Server<State> {
    let logger = *state.logger();
    let mut server = Server::new(state, logger);

    server.get("/converters", |_parameters, _body, state| async move { respond_ok(describe_converters(&state)) });

    server.get("/converters/{name}/encode/{value}", |parameters, _body, state| async move {
        let converter = unwrap!(find_converter(&state, &parameters));
        let value = unwrap!(parameter(&parameters, "value").and_then(parse_value));
        respond_ok(json!(encode(converter, value)))
    });

    server.get("/converters/{name}/decode/{text}", |parameters, _body, state| async move {
        let converter = unwrap!(find_converter(&state, &parameters));
        let text = unwrap!(parameter(&parameters, "text"));
        let decoded = unwrap!(decode(converter, text.to_string()));
        respond_ok(json!(decoded))
    });

    server.post("/converters/{name}/encode", |parameters, body, state| async move {
        let converter = unwrap!(find_converter(&state, &parameters));
        let values = unwrap!(parse_values_from_body(&body));
        respond_ok(json!(values.into_iter().map(|value| encode(converter, value)).collect::<Vec<_>>()))
    });

    server.post("/converters/{name}/decode", |parameters, body, state| async move {
        let converter = unwrap!(find_converter(&state, &parameters));
        let texts = unwrap!(parse_texts_from_body(&body));
        let decoded = unwrap!(texts.into_iter().map(|text| decode(converter, text)).collect::<Result<Vec<_>, _>>());
        respond_ok(json!(decoded))
    });

    server
}
