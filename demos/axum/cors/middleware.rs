use axum::{
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use cors_gate::{CorsDecision, CorsResponse, RejectionReason, RequestContext};

use super::AppState;

/// Renders the gate's decision itself so rejections carry a readable body.
pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let decision = state.cors.check(&RequestContext::from_request(&request));

    match decision {
        CorsDecision::PreflightAccepted { headers } => {
            let mut response = Response::with_status(StatusCode::NO_CONTENT.as_u16());
            response.apply_headers(&headers);
            response
        }
        CorsDecision::SimpleAccepted { headers } => {
            let mut response = next.run(request).await;
            response.apply_headers(&headers);
            response
        }
        CorsDecision::Rejected(reason) => rejection_response(&reason),
    }
}

fn rejection_response(reason: &RejectionReason) -> Response {
    let mut response = Response::new(Body::from(reason.to_string()));
    *response.status_mut() =
        StatusCode::from_u16(reason.status()).unwrap_or(StatusCode::BAD_REQUEST);
    response
}
