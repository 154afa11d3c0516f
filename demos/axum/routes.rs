use axum::{
    Json,
    extract::State,
    response::{Html, IntoResponse},
};
use serde_json::{Value, json};

use crate::cors::AppState;

pub async fn greet(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        "<h1>{}</h1><p>Call this endpoint from an allowed origin to see the gate add CORS headers.</p>",
        state.greeting
    ))
}

pub async fn create_item(Json(item): Json<Value>) -> impl IntoResponse {
    Json(json!({ "created": item }))
}
