use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use ruta_directions::{
    error::DirectionsError,
    geopoint::GeoPoint,
    maneuver::ManeuverType,
    profile::DirectionsProfile,
    segment::{SegmentFetcher, SegmentResult, SegmentStep},
};

/// Answers the n-th request with the n-th canned segment, `None` meaning a
/// provider failure.
pub struct StubFetcher {
    segments: Vec<Option<SegmentResult>>,
    calls: AtomicUsize,
    requests: Mutex<Vec<(GeoPoint, GeoPoint, DirectionsProfile)>>,
}

impl StubFetcher {
    pub fn new(segments: Vec<Option<SegmentResult>>) -> Self {
        Self {
            segments,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(vec![]),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<(GeoPoint, GeoPoint, DirectionsProfile)> {
        self.requests.lock().unwrap().clone()
    }
}

impl SegmentFetcher for StubFetcher {
    async fn fetch_segment(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        profile: DirectionsProfile,
    ) -> Result<SegmentResult, DirectionsError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((origin, destination, profile));

        match self.segments.get(call).cloned().flatten() {
            Some(segment) => Ok(segment),
            None => Err(DirectionsError::RoutingProvider {
                status: 404,
                body: String::from(r#"{"error":{"code":2010}}"#),
            }),
        }
    }
}

pub fn point(lat: f64, lng: f64) -> GeoPoint {
    GeoPoint::new(lat, lng).unwrap()
}

/// Straight path of `len` points, exactly starting at `from` and ending at `to`.
pub fn path_between(from: GeoPoint, to: GeoPoint, len: usize) -> Vec<GeoPoint> {
    let last = len - 1;

    (0..len)
        .map(|i| match i {
            0 => from,
            i if i == last => to,
            i => {
                let t = i as f64 / last as f64;
                point(
                    from.lat + (to.lat - from.lat) * t,
                    from.lng + (to.lng - from.lng) * t,
                )
            }
        })
        .collect()
}

pub fn step(code: u8, point_index: usize, distance: f64) -> SegmentStep {
    let maneuver = ManeuverType::from(code);
    SegmentStep {
        instruction: maneuver.instruction(Some("Calle Juarez")),
        distance,
        duration: distance / 1.4,
        maneuver,
        street: Some(String::from("Calle Juarez")),
        point_index,
    }
}

pub fn segment(
    path: Vec<GeoPoint>,
    distance_km: f64,
    duration_min: u32,
    steps: Vec<SegmentStep>,
) -> SegmentResult {
    SegmentResult {
        path,
        distance_km,
        duration_min,
        steps,
    }
}
