use crate::headers::Headers;
use crate::pipeline::HttpResponse;

/// Headers and response metadata produced for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsResult {
    pub headers: Headers,
    pub status: Option<u16>,
    pub end_response: bool,
}

impl CorsResult {
    /// Appends the headers in order and sets the status, if any.
    pub fn apply<R: HttpResponse + ?Sized>(&self, response: &mut R) {
        for header in &self.headers {
            response.append_header(&header.name, &header.value);
        }
        if let Some(status) = self.status {
            response.set_status(status);
        }
    }
}

/// Overall decision returned by the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// `OPTIONS` request: answer with the result and stop the pipeline.
    Preflight(CorsResult),
    /// Any other method: add the headers and forward.
    Simple(CorsResult),
    /// Policy disabled: forward untouched.
    NotApplicable,
}
