use std::sync::Arc;

use cors_gate::{AllowedHeaders, AllowedMethods, AllowedOrigins, Cors, CorsOptions, ValidationError};

pub type SharedCors = Arc<Cors>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, ValidationError> {
    let options = CorsOptions {
        origins: AllowedOrigins::list(["http://localhost:3000", "http://api.example.com"]),
        methods: AllowedMethods::list(["GET", "POST"]),
        headers: AllowedHeaders::list(["Content-Type", "X-Requested-With"]),
    };

    let cors = Arc::new(Cors::try_new(options)?);

    Ok(AppState {
        cors,
        greeting: "Welcome to the Axum CORS gate demo!",
    })
}

pub mod middleware;
