use std::sync::Arc;

use cors_gate::{AllowedHeaders, AllowedMethods, AllowedOrigins, Cors, CorsOptions};

pub type SharedCors = Arc<Cors>;
pub type SharedAppState = Arc<AppState>;

pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

pub fn build_state() -> SharedAppState {
    let options = CorsOptions {
        origins: AllowedOrigins::any(),
        methods: AllowedMethods::list(["GET", "POST", "PUT", "DELETE"]),
        headers: AllowedHeaders::list(["Content-Type"]),
    };

    Arc::new(AppState {
        cors: Arc::new(Cors::new(options)),
        greeting: "Welcome to the Hyper CORS gate demo!",
    })
}

pub mod middleware;
