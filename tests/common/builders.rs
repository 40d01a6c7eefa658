#![allow(dead_code)]

use super::exchange::{TestRequest, TestResponse};
use bunner_cors_gate::constants::method;
use bunner_cors_gate::{
    CorsDecision, CorsFilter, Flow, PolicyConfiguration, PolicyProvider, RequestContext,
    StaticPolicy,
};
use std::convert::Infallible;

pub struct FilterBuilder {
    configuration: PolicyConfiguration,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self {
            configuration: PolicyConfiguration::default()
                .enabled(true)
                .with_allowed_methods("GET, OPTIONS"),
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.configuration.enabled = enabled;
        self
    }

    pub fn origins(mut self, origins: impl Into<String>) -> Self {
        self.configuration.allowed_origins = Some(origins.into());
        self
    }

    pub fn methods(mut self, methods: impl Into<String>) -> Self {
        self.configuration.allowed_methods = Some(methods.into());
        self
    }

    pub fn without_methods(mut self) -> Self {
        self.configuration.allowed_methods = None;
        self
    }

    pub fn configuration(&self) -> PolicyConfiguration {
        self.configuration.clone()
    }

    pub fn build(self) -> CorsFilter<StaticPolicy> {
        CorsFilter::new(StaticPolicy::new(self.configuration))
    }
}

/// Outcome of running a request through the filter with a counting chain.
pub struct Outcome {
    pub flow: Flow,
    pub forwarded: usize,
    pub response: TestResponse,
}

pub struct RequestBuilder {
    method: String,
    origin: Option<String>,
    http: bool,
    response: TestResponse,
}

impl RequestBuilder {
    fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            origin: None,
            http: true,
            response: TestResponse::default(),
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn non_http_request(mut self) -> Self {
        self.http = false;
        self
    }

    pub fn non_http_response(mut self) -> Self {
        self.response.non_http = true;
        self
    }

    pub fn check<P: PolicyProvider>(self, filter: &CorsFilter<P>) -> CorsDecision {
        filter.check(&RequestContext::new(&self.method, self.origin.as_deref()))
    }

    pub fn run<P: PolicyProvider>(self, filter: &CorsFilter<P>) -> Outcome {
        let RequestBuilder {
            method,
            origin,
            http,
            mut response,
        } = self;
        let request = TestRequest {
            method,
            origin,
            http,
        };

        let mut forwarded = 0;
        let flow = filter
            .do_filter(
                &request,
                &mut response,
                |_: &TestRequest, _: &mut TestResponse| {
                    forwarded += 1;
                    Ok::<(), Infallible>(())
                },
            )
            .expect("counting chain never fails");

        Outcome {
            flow,
            forwarded,
            response,
        }
    }
}

pub fn filter() -> FilterBuilder {
    FilterBuilder::new()
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}
