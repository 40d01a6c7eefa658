#![allow(dead_code)]

use bunner_cors_gate::constants::header;
use bunner_cors_gate::{FilterRequest, FilterResponse, HttpRequest, HttpResponse};

/// Request double exposing a method and an optional `Origin` header.
#[derive(Debug, Clone)]
pub struct TestRequest {
    pub method: String,
    pub origin: Option<String>,
    pub http: bool,
}

impl HttpRequest for TestRequest {
    fn method(&self) -> &str {
        &self.method
    }

    fn header(&self, name: &str) -> Option<&str> {
        if name.eq_ignore_ascii_case(header::ORIGIN) {
            self.origin.as_deref()
        } else {
            None
        }
    }
}

impl FilterRequest for TestRequest {
    fn as_http(&self) -> Option<&dyn HttpRequest> {
        if self.http { Some(self) } else { None }
    }
}

/// Response double recording appended headers and the status.
#[derive(Debug, Clone, Default)]
pub struct TestResponse {
    pub headers: Vec<(String, String)>,
    pub status: Option<u16>,
    pub non_http: bool,
}

impl HttpResponse for TestResponse {
    fn append_header(&mut self, name: &str, value: &str) {
        self.headers.push((name.to_string(), value.to_string()));
    }

    fn set_status(&mut self, status: u16) {
        self.status = Some(status);
    }
}

impl FilterResponse for TestResponse {
    fn as_http_mut(&mut self) -> Option<&mut dyn HttpResponse> {
        if self.non_http { None } else { Some(self) }
    }
}
