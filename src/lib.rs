mod allowed_headers;
mod allowed_methods;
pub mod constants;
mod context;
mod cors;
mod header_builder;
mod headers;
mod options;
mod origin;
mod request;
mod response;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use context::{OriginHeader, RequestContext};
pub use cors::Cors;
pub use headers::{Headers, merge_headers};
pub use options::{CorsOptions, ValidationError};
pub use origin::{AllowedOrigins, OriginDecision};
pub use request::{CorsRequest, Request};
pub use response::{CorsResponse, Response};
pub use result::{CorsDecision, RejectionReason};
