#![allow(dead_code)]

use bunner_cors_gate::Headers;
use bunner_cors_gate::constants::header;

pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case(name))
        .map(|h| h.value.as_str())
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    header_value(headers, name).is_some()
}

pub fn header_names(headers: &Headers) -> Vec<&str> {
    headers.iter().map(|h| h.name.as_str()).collect()
}

pub fn has_any_cors_header(headers: &Headers) -> bool {
    [
        header::ACCESS_CONTROL_ALLOW_METHODS,
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
    ]
    .iter()
    .any(|name| has_header(headers, name))
}
