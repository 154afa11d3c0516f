use std::future::Future;
use std::pin::Pin;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::service::Service;
use hyper::{Request, Response};

use super::SharedCors;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

pub type CorsBody = Full<Bytes>;

/// Hyper service wrapper that runs every request through the gate before
/// handing it to `inner`.
#[derive(Clone)]
pub struct CorsGate<S> {
    inner: S,
    cors: SharedCors,
}

impl<S> CorsGate<S> {
    pub fn new(cors: SharedCors, inner: S) -> Self {
        Self { inner, cors }
    }
}

impl<S> Service<Request<Incoming>> for CorsGate<S>
where
    S: Service<Request<Incoming>, Response = Response<CorsBody>> + Clone + Send + Sync + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = Response<CorsBody>;
    type Error = S::Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let cors = self.cors.clone();
        let inner = self.inner.clone();

        Box::pin(async move { cors.handle_async(req, |req| inner.call(req)).await })
    }
}
