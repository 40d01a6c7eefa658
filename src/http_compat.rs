//! Pipeline contract for the `http` crate's request and response types.

use crate::context::RequestContext;
use crate::pipeline::{FilterRequest, FilterResponse, HttpRequest, HttpResponse};
use crate::result::CorsResult;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::{Request, Response, StatusCode};

impl<B> HttpRequest for Request<B> {
    fn method(&self) -> &str {
        Request::method(self).as_str()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
    }
}

impl<B> FilterRequest for Request<B> {
    fn as_http(&self) -> Option<&dyn HttpRequest> {
        Some(self)
    }
}

impl<B> HttpResponse for Response<B> {
    fn append_header(&mut self, name: &str, value: &str) {
        append_header(self.headers_mut(), name, value);
    }

    fn set_status(&mut self, status: u16) {
        match StatusCode::from_u16(status) {
            Ok(code) => *self.status_mut() = code,
            Err(_) => tracing::warn!(status, "ignoring invalid status code"),
        }
    }
}

impl<B> FilterResponse for Response<B> {
    fn as_http_mut(&mut self) -> Option<&mut dyn HttpResponse> {
        Some(self)
    }
}

impl<'a> RequestContext<'a> {
    pub fn from_http<B>(request: &'a Request<B>) -> Self {
        Self::from_request(request)
    }
}

impl CorsResult {
    /// Appends the headers to a bare header map, for hosts that build the
    /// response themselves.
    pub fn apply_to_headers(&self, headers: &mut HeaderMap) {
        for header in &self.headers {
            append_header(headers, &header.name, &header.value);
        }
    }

    pub fn status_code(&self) -> Option<StatusCode> {
        self.status.and_then(|status| StatusCode::from_u16(status).ok())
    }
}

fn append_header(headers: &mut HeaderMap, name: &str, value: &str) {
    match (
        HeaderName::from_bytes(name.as_bytes()),
        HeaderValue::from_str(value),
    ) {
        (Ok(name), Ok(value)) => {
            headers.append(name, value);
        }
        _ => tracing::warn!(name, value, "dropping header that is not valid http"),
    }
}

#[cfg(test)]
#[path = "http_compat_test.rs"]
mod http_compat_test;
