use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ruta_directions::geopoint::GeoPoint;
use ruta_directions::profile::DirectionsProfile;
use ruta_directions::stitcher::{RouteStep, StitchedRoute, stitch_route};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

const ERROR_CONTEXT: &str = "No se pudo calcular la ruta";

#[derive(Deserialize)]
pub struct DrivingRouteRequestBody {
    stops: Vec<GeoPoint>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrivingRouteStep {
    instruction: String,
    /// Already formatted for display, e.g. "En 850 m"
    distance: String,
    #[serde(rename = "type")]
    maneuver_type: u8,
    point_index: usize,
}

impl From<RouteStep> for DrivingRouteStep {
    fn from(step: RouteStep) -> Self {
        DrivingRouteStep {
            instruction: step.instruction,
            distance: step.formatted_distance,
            maneuver_type: step.maneuver.code(),
            point_index: step.point_index,
        }
    }
}

#[derive(Serialize)]
pub struct DrivingRouteResponse {
    route: Vec<GeoPoint>,
    distance: f64,
    duration: u32,
    steps: Vec<DrivingRouteStep>,
}

impl From<StitchedRoute> for DrivingRouteResponse {
    fn from(route: StitchedRoute) -> Self {
        DrivingRouteResponse {
            route: route.path,
            distance: route.distance_km,
            duration: route.duration_min,
            steps: route.steps.into_iter().map(DrivingRouteStep::from).collect(),
        }
    }
}

impl IntoResponse for DrivingRouteResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn driving_route_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<DrivingRouteRequestBody>, JsonRejection>,
) -> Result<DrivingRouteResponse, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        ApiError::BadRequest(format!(
            "Invalid request body: {}",
            rejection.body_text()
        ))
    })?;

    let route = stitch_route(&state.directions, &body.stops, DirectionsProfile::DrivingCar)
        .await
        .map_err(|err| ApiError::from_directions(err, ERROR_CONTEXT))?;

    Ok(route.into())
}
