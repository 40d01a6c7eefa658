use crate::constants::{CREDENTIALS_TRUE, PREFLIGHT_SUCCESS_STATUS, header, method};
use crate::context::RequestContext;
use crate::evaluator::OriginPolicy;
use crate::headers::{HeaderCollection, Headers};
use crate::pipeline::{BoxError, Filter, FilterChain, FilterRequest, FilterResponse, Flow, Next};
use crate::provider::{PolicyProvider, PolicySnapshot};
use crate::result::{CorsDecision, CorsResult};

/// Allow-list CORS filter placed in front of a request pipeline.
///
/// With the policy enabled, an allowed `Origin` receives
/// `Access-Control-Allow-Methods`, `Access-Control-Allow-Credentials` and
/// `Access-Control-Allow-Origin`, and every `OPTIONS` request is answered
/// with `200` instead of being forwarded. With the policy disabled the filter
/// only forwards.
#[derive(Debug, Clone)]
pub struct CorsFilter<P> {
    policy: OriginPolicy<P>,
}

impl<P: PolicyProvider> CorsFilter<P> {
    pub fn new(provider: P) -> Self {
        Self {
            policy: OriginPolicy::new(provider),
        }
    }

    pub fn policy(&self) -> &OriginPolicy<P> {
        &self.policy
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let snapshot = self.policy.snapshot();
        if !snapshot.is_enabled() {
            tracing::trace!(method = request.method, "cors policy disabled; skipping");
            return CorsDecision::NotApplicable;
        }

        let headers = Self::build_headers(&snapshot, request.origin);

        if request.method == method::OPTIONS {
            CorsDecision::Preflight(CorsResult {
                headers,
                status: Some(PREFLIGHT_SUCCESS_STATUS),
                end_response: true,
            })
        } else {
            CorsDecision::Simple(CorsResult {
                headers,
                status: None,
                end_response: false,
            })
        }
    }

    /// Runs the filter as one stage of a host pipeline.
    ///
    /// Returns [`Flow::Terminated`] for preflight requests, in which case
    /// `chain` is dropped without being invoked.
    pub fn do_filter<Req, Res, C>(
        &self,
        request: &Req,
        response: &mut Res,
        chain: C,
    ) -> Result<Flow, C::Error>
    where
        Req: FilterRequest + ?Sized,
        Res: FilterResponse + ?Sized,
        C: FilterChain<Req, Res>,
    {
        if self.intercept(request, response) {
            return Ok(Flow::Terminated);
        }

        chain.proceed(request, response)?;
        Ok(Flow::Forwarded)
    }

    /// Applies the decision to an HTTP exchange. Returns whether the
    /// response is complete.
    fn intercept<Req, Res>(&self, request: &Req, response: &mut Res) -> bool
    where
        Req: FilterRequest + ?Sized,
        Res: FilterResponse + ?Sized,
    {
        let (Some(http_request), Some(http_response)) =
            (request.as_http(), response.as_http_mut())
        else {
            tracing::trace!("non-http exchange; skipping cors");
            return false;
        };

        match self.check(&RequestContext::from_request(http_request)) {
            CorsDecision::NotApplicable => false,
            CorsDecision::Simple(result) | CorsDecision::Preflight(result) => {
                result.apply(http_response);
                result.end_response
            }
        }
    }

    fn build_headers(snapshot: &PolicySnapshot, origin: Option<&str>) -> Headers {
        let Some(origin) = origin else {
            return Headers::new();
        };

        let origin = origin.trim();
        if !snapshot.is_allowed(origin) {
            tracing::debug!(origin, "cors origin not allowed");
            return Headers::new();
        }

        let mut headers = HeaderCollection::new();
        if let Some(methods) = snapshot.allowed_methods() {
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, methods);
        }
        headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, CREDENTIALS_TRUE);
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);

        tracing::debug!(origin, headers = headers.len(), "cors origin allowed");
        headers.into_headers()
    }
}

impl<P, Req, Res> Filter<Req, Res> for CorsFilter<P>
where
    P: PolicyProvider,
    Req: FilterRequest + ?Sized,
    Res: FilterResponse + ?Sized,
{
    fn do_filter(
        &self,
        request: &Req,
        response: &mut Res,
        next: Next<'_, Req, Res>,
    ) -> Result<(), BoxError> {
        CorsFilter::do_filter(self, request, response, next).map(|_| ())
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;
