use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::routing::post;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::route::driving_route::driving_route_handler;
use crate::route::walking_route::walking_route_handler;
use crate::state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/walking-route", post(walking_route_handler))
        .route("/driving-route", post(driving_route_handler))
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state)
}
