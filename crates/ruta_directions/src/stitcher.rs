use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    error::DirectionsError,
    geopoint::GeoPoint,
    maneuver::{ManeuverType, format_step_distance},
    profile::DirectionsProfile,
    segment::{SegmentFetcher, SegmentResult},
};

/// A navigation step anchored in the stitched path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub instruction: String,
    pub formatted_distance: String,
    pub maneuver: ManeuverType,
    /// Index into [`StitchedRoute::path`]
    pub point_index: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StitchedRoute {
    pub path: Vec<GeoPoint>,
    pub distance_km: f64,
    pub duration_min: u32,
    pub steps: Vec<RouteStep>,
}

pub enum SegmentOutcome {
    Routed(SegmentResult),
    /// The provider could not route this pair, the stops are joined directly
    Failed {
        origin: GeoPoint,
        destination: GeoPoint,
    },
}

/// Left fold of segment outcomes into a [`StitchedRoute`].
///
/// Consecutive segments share their boundary stop, so every segment after the
/// first one drops its first coordinate. The running point offset is the
/// number of points stitched so far: the full length of the first segment
/// plus `len - 1` for every following one.
#[derive(Default)]
pub struct RouteStitcher {
    route: StitchedRoute,
    segments: usize,
    failed_segments: usize,
}

impl RouteStitcher {
    pub fn push(mut self, outcome: SegmentOutcome) -> Self {
        match outcome {
            SegmentOutcome::Routed(segment) => self.push_segment(segment),
            SegmentOutcome::Failed {
                origin,
                destination,
            } => {
                self.failed_segments += 1;
                self.push_segment(SegmentResult::straight_line(origin, destination));
            }
        }

        self
    }

    fn push_segment(&mut self, segment: SegmentResult) {
        let point_offset = self.route.path.len();

        let contributed = if self.segments == 0 {
            &segment.path[..]
        } else {
            segment.path.get(1..).unwrap_or_default()
        };
        self.route.path.extend_from_slice(contributed);

        let last_index = self.route.path.len().saturating_sub(1);

        self.route
            .steps
            .extend(segment.steps.into_iter().map(|step| RouteStep {
                formatted_distance: format_step_distance(step.distance),
                // The arrival step of a later segment points at its last
                // coordinate, which the offset would push one past the end
                point_index: (point_offset + step.point_index).min(last_index),
                instruction: step.instruction,
                maneuver: step.maneuver,
            }));

        self.route.distance_km += segment.distance_km;
        self.route.duration_min += segment.duration_min;
        self.segments += 1;
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    pub fn failed_segments(&self) -> usize {
        self.failed_segments
    }

    pub fn finish(self) -> StitchedRoute {
        self.route
    }
}

pub fn stitch_segments<I>(outcomes: I) -> StitchedRoute
where
    I: IntoIterator<Item = SegmentOutcome>,
{
    outcomes
        .into_iter()
        .fold(RouteStitcher::default(), RouteStitcher::push)
        .finish()
}

/// Routes every consecutive pair of `stops` in order and stitches the legs
/// into one route.
///
/// A leg the provider fails to route is replaced by a straight line between
/// its two stops. The call only fails when fewer than two stops are given or
/// when no leg at all could be routed.
pub async fn stitch_route<F>(
    fetcher: &F,
    stops: &[GeoPoint],
    profile: DirectionsProfile,
) -> Result<StitchedRoute, DirectionsError>
where
    F: SegmentFetcher + Sync,
{
    if stops.len() < 2 {
        return Err(DirectionsError::InvalidInput(String::from(
            "At least 2 stops are required",
        )));
    }

    let mut stitcher = RouteStitcher::default();
    let mut last_error = None;

    // One provider request in flight at a time, legs are stitched in stop order
    for (i, pair) in stops.windows(2).enumerate() {
        let (origin, destination) = (pair[0], pair[1]);

        let outcome = match fetcher.fetch_segment(origin, destination, profile).await {
            Ok(segment) => SegmentOutcome::Routed(segment),
            Err(err) => {
                warn!(
                    "Error fetching segment {} to {}, joining {:.0} m in a straight line: {}",
                    i,
                    i + 1,
                    origin.haversine_distance(&destination),
                    err
                );
                last_error = Some(err);
                SegmentOutcome::Failed {
                    origin,
                    destination,
                }
            }
        };

        stitcher = stitcher.push(outcome);
    }

    if stitcher.failed_segments() == stitcher.segments() {
        if let Some(err) = last_error {
            return Err(DirectionsError::AllSegmentsFailed(Box::new(err)));
        }
    }

    let failed_segments = stitcher.failed_segments();
    let route = stitcher.finish();

    info!(
        "Stitched {} stops: {} points, {} steps, {:.2} km, {} min ({} straight-line legs)",
        stops.len(),
        route.path.len(),
        route.steps.len(),
        route.distance_km,
        route.duration_min,
        failed_segments
    );

    Ok(route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::SegmentStep;

    fn point(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng).unwrap()
    }

    fn step(maneuver: u8, point_index: usize, distance: f64) -> SegmentStep {
        let maneuver = ManeuverType::from(maneuver);
        SegmentStep {
            instruction: maneuver.instruction(None),
            distance,
            duration: distance / 1.4,
            maneuver,
            street: None,
            point_index,
        }
    }

    fn segment(path: Vec<GeoPoint>, steps: Vec<SegmentStep>) -> SegmentResult {
        SegmentResult {
            path,
            distance_km: 0.5,
            duration_min: 6,
            steps,
        }
    }

    #[test]
    fn test_empty_fold() {
        let route = stitch_segments(Vec::<SegmentOutcome>::new());

        assert!(route.path.is_empty());
        assert!(route.steps.is_empty());
        assert_eq!(route.distance_km, 0.0);
        assert_eq!(route.duration_min, 0);
    }

    #[test]
    fn test_single_segment_is_kept_as_is() {
        let path = vec![point(20.0, -100.0), point(20.001, -100.0), point(20.002, -100.0)];
        let route = stitch_segments(vec![SegmentOutcome::Routed(segment(
            path.clone(),
            vec![step(11, 0, 150.0), step(10, 2, 0.0)],
        ))]);

        assert_eq!(route.path, path);
        assert_eq!(route.steps[0].point_index, 0);
        assert_eq!(route.steps[0].formatted_distance, "En 150 m");
        assert_eq!(route.steps[1].point_index, 2);
        assert_eq!(route.steps[1].instruction, "Has llegado a tu destino");
        assert_eq!(route.duration_min, 6);
    }

    #[test]
    fn test_join_point_is_dropped() {
        let a = point(20.0, -100.0);
        let b = point(20.01, -100.0);
        let c = point(20.02, -100.0);

        let route = stitch_segments(vec![
            SegmentOutcome::Routed(segment(vec![a, point(20.005, -100.0), b], vec![])),
            SegmentOutcome::Routed(segment(vec![b, point(20.015, -100.0), c], vec![])),
        ]);

        assert_eq!(route.path.len(), 5);
        assert_eq!(route.path.iter().filter(|p| **p == b).count(), 1);
        assert_eq!(route.path[2], b);
        assert!((route.distance_km - 1.0).abs() < 1e-9);
        assert_eq!(route.duration_min, 12);
    }

    #[test]
    fn test_failed_first_segment_inserts_both_stops() {
        let a = point(20.0, -100.0);
        let b = point(20.01, -100.0);
        let c = point(20.02, -100.0);

        let route = stitch_segments(vec![
            SegmentOutcome::Failed {
                origin: a,
                destination: b,
            },
            SegmentOutcome::Routed(segment(
                vec![b, point(20.015, -100.0), c],
                vec![step(6, 1, 600.0)],
            )),
        ]);

        assert_eq!(route.path, vec![a, b, point(20.015, -100.0), c]);
        // Offset after the fallback leg is 2
        assert_eq!(route.steps[0].point_index, 3);
        assert!((route.distance_km - 0.5).abs() < 1e-9);
        assert_eq!(route.duration_min, 6);
    }

    #[test]
    fn test_arrival_index_stays_inside_path() {
        let a = point(20.0, -100.0);
        let b = point(20.01, -100.0);
        let c = point(20.02, -100.0);

        let route = stitch_segments(vec![
            SegmentOutcome::Routed(segment(vec![a, b], vec![step(10, 1, 0.0)])),
            SegmentOutcome::Routed(segment(vec![b, c], vec![step(10, 1, 0.0)])),
        ]);

        assert_eq!(route.path.len(), 3);
        assert_eq!(route.steps[0].point_index, 1);
        assert_eq!(route.steps[1].point_index, 2);
    }

    #[test]
    fn test_stitcher_counts_failures() {
        let a = point(20.0, -100.0);
        let b = point(20.01, -100.0);

        let stitcher = RouteStitcher::default()
            .push(SegmentOutcome::Routed(segment(vec![a, b], vec![])))
            .push(SegmentOutcome::Failed {
                origin: b,
                destination: a,
            });

        assert_eq!(stitcher.segments(), 2);
        assert_eq!(stitcher.failed_segments(), 1);
        assert_eq!(stitcher.finish().path, vec![a, b, a]);
    }
}
