use crate::constants::header;
use crate::pipeline::HttpRequest;

/// Framework-neutral view of the request fields the filter inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str, origin: Option<&'a str>) -> Self {
        Self { method, origin }
    }

    pub fn from_request<R: HttpRequest + ?Sized>(request: &'a R) -> Self {
        Self {
            method: request.method(),
            origin: request.header(header::ORIGIN),
        }
    }
}
