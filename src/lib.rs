//! Allow-list CORS filter for HTTP request pipelines.
//!
//! [`CorsFilter`] checks each request's `Origin` against a configured
//! allow-list, reflects allowed origins back with credentials enabled, and
//! answers `OPTIONS` requests with `200` without forwarding them. Policy is
//! read through a [`PolicyProvider`] on every request, so a [`PolicyStore`]
//! can be updated while the filter is serving.

mod allowed_origins;
mod configuration;
pub mod constants;
mod context;
mod evaluator;
mod filter;
mod headers;
#[cfg(feature = "http")]
mod http_compat;
pub mod pipeline;
mod provider;
mod result;

pub use allowed_origins::AllowedOriginSet;
pub use configuration::{ConfigurationError, PolicyConfiguration};
pub use context::RequestContext;
pub use evaluator::OriginPolicy;
pub use filter::CorsFilter;
pub use headers::{Header, Headers};
pub use pipeline::{
    BoxError, Filter, FilterChain, FilterRequest, FilterResponse, Flow, HttpRequest, HttpResponse,
    Next, Pipeline,
};
pub use provider::{PolicyProvider, PolicySnapshot, PolicyStore, StaticPolicy};
pub use result::{CorsDecision, CorsResult};
