use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ruta_directions::geopoint::GeoPoint;
use ruta_directions::profile::DirectionsProfile;
use ruta_directions::segment::{SegmentFetcher, SegmentResult};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

const ERROR_CONTEXT: &str = "No se pudo calcular ruta caminando";

#[derive(Deserialize)]
pub struct WalkingRouteRequestBody {
    origin: GeoPoint,
    destination: GeoPoint,
}

#[derive(Serialize)]
pub struct WalkingRouteResponse {
    route: Vec<GeoPoint>,
    /// Kilometers
    distance: f64,
    /// Minutes
    duration: u32,
}

impl From<SegmentResult> for WalkingRouteResponse {
    fn from(segment: SegmentResult) -> Self {
        WalkingRouteResponse {
            route: segment.path,
            distance: segment.distance_km,
            duration: segment.duration_min,
        }
    }
}

impl IntoResponse for WalkingRouteResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn walking_route_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<WalkingRouteRequestBody>, JsonRejection>,
) -> Result<WalkingRouteResponse, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        ApiError::BadRequest(format!(
            "Origin and destination are required: {}",
            rejection.body_text()
        ))
    })?;

    let segment = state
        .directions
        .fetch_segment(body.origin, body.destination, DirectionsProfile::FootWalking)
        .await
        .map_err(|err| ApiError::from_directions(err, ERROR_CONTEXT))?;

    info!(
        "Walking route: {} points, {:.3} km, {} min",
        segment.path.len(),
        segment.distance_km,
        segment.duration_min
    );

    Ok(segment.into())
}
