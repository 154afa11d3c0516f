use crate::constants::status;
use crate::context::{OriginHeader, RequestContext};
use crate::header_builder::HeaderBuilder;
use crate::headers::Headers;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::OriginDecision;
use crate::request::CorsRequest;
use crate::response::CorsResponse;
use crate::result::{CorsDecision, RejectionReason};
use std::convert::Infallible;
use std::future::Future;
use std::ops::ControlFlow;
use tracing::{debug, trace};

/// CORS request gate built from [`CorsOptions`].
///
/// The gate holds no mutable state, so a single instance can be shared across
/// threads and requests.
#[derive(Debug, Clone, Default)]
pub struct Cors {
    options: CorsOptions,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Self {
        Self { options }
    }

    /// Like [`Cors::new`], but rejects entries that [`CorsOptions::validate`] flags.
    pub fn try_new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self::new(options))
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    /// Decides what to do with `request` without touching any response.
    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let origins = &self.options.origins;
        let decision = match request.origin {
            OriginHeader::Missing => {
                debug!(method = request.method, "rejecting request without Origin");
                return CorsDecision::Rejected(RejectionReason::MissingOrigin);
            }
            OriginHeader::Unreadable => origins.resolve_unreadable(),
            OriginHeader::Value(origin) => origins.resolve(origin),
        };

        let Some(decision) = decision else {
            debug!(origin = ?request.origin, method = request.method, "rejecting disallowed origin");
            return CorsDecision::Rejected(RejectionReason::OriginNotAllowed);
        };

        if request.is_preflight() {
            self.process_preflight(request, decision)
        } else {
            self.process_simple(request, decision)
        }
    }

    /// Runs the gate around an infallible downstream handler.
    pub fn handle<Req, Res, N>(&self, request: Req, next: N) -> Res
    where
        Req: CorsRequest,
        Res: CorsResponse,
        N: FnOnce(Req) -> Res,
    {
        match self.try_handle(request, |request| Ok::<_, Infallible>(next(request))) {
            Ok(response) => response,
            Err(never) => match never {},
        }
    }

    /// Runs the gate around a fallible handler. Handler errors are returned untouched.
    pub fn try_handle<Req, Res, E, N>(&self, request: Req, next: N) -> Result<Res, E>
    where
        Req: CorsRequest,
        Res: CorsResponse,
        N: FnOnce(Req) -> Result<Res, E>,
    {
        let headers = match self.gate(&request) {
            ControlFlow::Break(response) => return Ok(response),
            ControlFlow::Continue(headers) => headers,
        };

        let mut response = next(request)?;
        response.apply_headers(&headers);
        Ok(response)
    }

    /// Runs the gate around an async handler. The decision is made before the
    /// handler future is created.
    pub async fn handle_async<Req, Res, E, N, Fut>(&self, request: Req, next: N) -> Result<Res, E>
    where
        Req: CorsRequest,
        Res: CorsResponse,
        N: FnOnce(Req) -> Fut,
        Fut: Future<Output = Result<Res, E>>,
    {
        let headers = match self.gate(&request) {
            ControlFlow::Break(response) => return Ok(response),
            ControlFlow::Continue(headers) => headers,
        };

        let mut response = next(request).await?;
        response.apply_headers(&headers);
        Ok(response)
    }

    /// Either a terminal response or the headers to stamp on the handler's response.
    fn gate<Req, Res>(&self, request: &Req) -> ControlFlow<Res, Headers>
    where
        Req: CorsRequest,
        Res: CorsResponse,
    {
        let context = RequestContext::from_request(request);
        match self.check(&context) {
            CorsDecision::SimpleAccepted { headers } => ControlFlow::Continue(headers),
            CorsDecision::PreflightAccepted { headers } => {
                let mut response = Res::with_status(status::NO_CONTENT);
                response.apply_headers(&headers);
                ControlFlow::Break(response)
            }
            CorsDecision::Rejected(reason) => ControlFlow::Break(Res::with_status(reason.status())),
        }
    }

    fn process_preflight(
        &self,
        request: &RequestContext<'_>,
        decision: OriginDecision<'_>,
    ) -> CorsDecision {
        let origin = decision.header_value();
        let requested_method = request.access_control_request_method;
        let allowed = requested_method
            .map(|method| self.options.methods.allows_method(method))
            .unwrap_or(false);

        if !allowed {
            debug!(
                origin,
                requested_method = requested_method.unwrap_or_default(),
                "rejecting preflight for disallowed method"
            );
            return CorsDecision::Rejected(RejectionReason::MethodNotAllowed {
                requested_method: requested_method.map(str::to_string),
            });
        }

        trace!(origin, "accepting preflight");
        let builder = HeaderBuilder::new(&self.options);
        CorsDecision::PreflightAccepted {
            headers: builder.build(decision),
        }
    }

    fn process_simple(
        &self,
        request: &RequestContext<'_>,
        decision: OriginDecision<'_>,
    ) -> CorsDecision {
        trace!(
            origin = decision.header_value(),
            method = request.method,
            "accepting cross-origin request"
        );
        let builder = HeaderBuilder::new(&self.options);
        CorsDecision::SimpleAccepted {
            headers: builder.build(decision),
        }
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
