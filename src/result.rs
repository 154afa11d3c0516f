use crate::constants::status;
use crate::headers::Headers;
use thiserror::Error;

/// Overall decision returned by [`Cors::check`](crate::Cors::check).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// Answer the preflight with `204` and these headers; do not call the handler.
    PreflightAccepted { headers: Headers },
    /// Call the handler and stamp these headers on its response.
    SimpleAccepted { headers: Headers },
    Rejected(RejectionReason),
}

impl CorsDecision {
    /// Status imposed by the gate, or `None` when the handler's status passes through.
    pub fn status(&self) -> Option<u16> {
        match self {
            CorsDecision::PreflightAccepted { .. } => Some(status::NO_CONTENT),
            CorsDecision::SimpleAccepted { .. } => None,
            CorsDecision::Rejected(reason) => Some(reason.status()),
        }
    }

    pub fn headers(&self) -> Option<&Headers> {
        match self {
            CorsDecision::PreflightAccepted { headers }
            | CorsDecision::SimpleAccepted { headers } => Some(headers),
            CorsDecision::Rejected(_) => None,
        }
    }
}

/// Why the gate answered a request itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("request is missing the Origin header")]
    MissingOrigin,
    #[error("origin not allowed")]
    OriginNotAllowed,
    #[error("{}", method_not_allowed_message(.requested_method))]
    MethodNotAllowed { requested_method: Option<String> },
}

impl RejectionReason {
    pub fn status(&self) -> u16 {
        match self {
            RejectionReason::MissingOrigin => status::BAD_REQUEST,
            RejectionReason::OriginNotAllowed => status::FORBIDDEN,
            RejectionReason::MethodNotAllowed { .. } => status::METHOD_NOT_ALLOWED,
        }
    }
}

fn method_not_allowed_message(requested_method: &Option<String>) -> String {
    match requested_method {
        Some(method) => format!("preflight method '{method}' not allowed"),
        None => "preflight is missing the Access-Control-Request-Method header".to_string(),
    }
}
