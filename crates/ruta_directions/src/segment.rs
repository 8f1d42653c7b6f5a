use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::{
    error::DirectionsError, geopoint::GeoPoint, maneuver::ManeuverType, profile::DirectionsProfile,
};

/// One turn-by-turn instruction, anchored in its own segment's path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentStep {
    pub instruction: String,
    /// Meters until the next maneuver
    pub distance: f64,
    /// Seconds until the next maneuver
    pub duration: f64,
    pub maneuver: ManeuverType,
    pub street: Option<String>,
    /// Index into the segment path where the maneuver happens
    pub point_index: usize,
}

/// Routed path between two consecutive stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentResult {
    pub path: Vec<GeoPoint>,
    pub distance_km: f64,
    pub duration_min: u32,
    pub steps: Vec<SegmentStep>,
}

impl SegmentResult {
    /// The two stops joined directly, without steps and with no cost.
    pub fn straight_line(origin: GeoPoint, destination: GeoPoint) -> Self {
        SegmentResult {
            path: vec![origin, destination],
            distance_km: 0.0,
            duration_min: 0,
            steps: vec![],
        }
    }
}

/// Anything able to route a single pair of stops.
pub trait SegmentFetcher {
    fn fetch_segment(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        profile: DirectionsProfile,
    ) -> impl Future<Output = Result<SegmentResult, DirectionsError>> + Send;
}
