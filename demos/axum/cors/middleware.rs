use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use bunner_cors_gate::{CorsDecision, RequestContext};

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let decision = state.cors.check(&RequestContext::from_http(&request));

    match decision {
        CorsDecision::Preflight(result) => {
            let mut response = Response::new(Body::empty());
            result.apply(&mut response);
            response
        }
        CorsDecision::Simple(result) => {
            let mut response = next.run(request).await;
            result.apply(&mut response);
            response
        }
        CorsDecision::NotApplicable => next.run(request).await,
    }
}
