use axum::{
    Router,
    http::{HeaderName, HeaderValue, header},
    routing::{any, get},
};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::handler::{AppState, healthcheck, save_to_notion};

const ALLOW_METHODS: &str = "GET,OPTIONS,PATCH,DELETE,POST,PUT";
const ALLOW_HEADERS: &str = "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, Content-MD5, Content-Type, Date, X-Api-Version";

fn cors_header(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
}

pub fn routes(state: AppState) -> Router {
    // CorsLayer panics on credentials combined with a wildcard origin.
    let cors = ServiceBuilder::new()
        .layer(cors_header(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true"))
        .layer(cors_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .layer(cors_header(header::ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS))
        .layer(cors_header(header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS));

    Router::new()
        .route("/", get(healthcheck))
        .route("/api/save-to-notion", any(save_to_notion))
        .layer(cors)
        .with_state(state)
}
