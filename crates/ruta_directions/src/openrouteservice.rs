use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::{debug, error};

use crate::{
    config::DirectionsConfig,
    error::DirectionsError,
    geopoint::GeoPoint,
    maneuver::{ManeuverType, is_meaningful_street},
    profile::DirectionsProfile,
    segment::{SegmentFetcher, SegmentResult, SegmentStep},
};

pub const ORS_DIRECTIONS_API_PATH: &str = "/v2/directions";

#[derive(Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    features: Vec<DirectionsFeature>,
}

#[derive(Deserialize)]
struct DirectionsFeature {
    geometry: Option<LineStringGeometry>,
    properties: Option<FeatureProperties>,
}

#[derive(Deserialize)]
struct LineStringGeometry {
    /// [lng, lat] or [lng, lat, elevation]
    coordinates: Vec<Vec<f64>>,
}

#[derive(Deserialize)]
struct FeatureProperties {
    summary: Option<RouteSummary>,

    #[serde(default)]
    segments: Vec<RouteSegment>,
}

/// ORS omits zero values from the summary.
#[derive(Deserialize)]
struct RouteSummary {
    /// Meters
    #[serde(default)]
    distance: f64,

    /// Seconds
    #[serde(default)]
    duration: f64,
}

#[derive(Deserialize)]
struct RouteSegment {
    #[serde(default)]
    steps: Vec<RouteStep>,
}

/// Steps without a maneuver code render as the generic instruction.
fn unknown_maneuver() -> u8 {
    u8::MAX
}

#[derive(Deserialize)]
struct RouteStep {
    #[serde(rename = "type", default = "unknown_maneuver")]
    kind: u8,

    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    distance: f64,

    #[serde(default)]
    duration: f64,

    #[serde(default)]
    way_points: Vec<usize>,
}

impl RouteStep {
    fn into_segment_step(self) -> SegmentStep {
        let maneuver = ManeuverType::from(self.kind);
        let instruction = maneuver.instruction(self.name.as_deref());

        // A step without way points is anchored at the start of its segment
        let point_index = match self.way_points.first() {
            Some(index) => *index,
            None => {
                debug!("OpenRouteService: step without way_points, using index 0");
                0
            }
        };

        SegmentStep {
            instruction,
            distance: self.distance,
            duration: self.duration,
            maneuver,
            street: self
                .name
                .map(|name| name.trim().to_string())
                .filter(|name| is_meaningful_street(name)),
            point_index,
        }
    }
}

/// Normalizes a directions response body into a [`SegmentResult`].
pub fn parse_directions_response(body: &str) -> Result<SegmentResult, DirectionsError> {
    let response: DirectionsResponse = serde_json::from_str(body)
        .map_err(|err| DirectionsError::UnexpectedFormat(err.to_string()))?;

    let feature = response
        .features
        .into_iter()
        .next()
        .ok_or_else(|| DirectionsError::UnexpectedFormat(String::from("no route feature")))?;

    let geometry = feature
        .geometry
        .ok_or_else(|| DirectionsError::UnexpectedFormat(String::from("missing geometry")))?;

    let properties = feature
        .properties
        .ok_or_else(|| DirectionsError::UnexpectedFormat(String::from("missing properties")))?;

    let summary = properties
        .summary
        .ok_or_else(|| DirectionsError::UnexpectedFormat(String::from("missing summary")))?;

    if geometry.coordinates.is_empty() {
        return Err(DirectionsError::UnexpectedFormat(String::from(
            "empty geometry",
        )));
    }

    let path = geometry
        .coordinates
        .iter()
        .map(|coordinate| match coordinate.as_slice() {
            [lng, lat, ..] => Ok(GeoPoint::from_lng_lat([*lng, *lat])),
            _ => Err(DirectionsError::UnexpectedFormat(format!(
                "invalid coordinate {:?}",
                coordinate
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let steps = properties
        .segments
        .into_iter()
        .flat_map(|segment| segment.steps)
        .map(RouteStep::into_segment_step)
        .collect();

    Ok(SegmentResult {
        path,
        distance_km: summary.distance / 1000.0,
        duration_min: (summary.duration / 60.0).round() as u32,
        steps,
    })
}

pub struct OpenRouteServiceClient {
    config: DirectionsConfig,
    client: reqwest::Client,
}

impl OpenRouteServiceClient {
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, client })
    }

    fn directions_url(&self, profile: DirectionsProfile) -> String {
        format!(
            "{}{}/{}",
            self.config.base_url.trim_end_matches('/'),
            ORS_DIRECTIONS_API_PATH,
            profile
        )
    }

    async fn request_segment(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        profile: DirectionsProfile,
    ) -> Result<SegmentResult, DirectionsError> {
        let [start_lng, start_lat] = origin.to_lng_lat();
        let [end_lng, end_lat] = destination.to_lng_lat();
        let start = format!("{},{}", start_lng, start_lat);
        let end = format!("{},{}", end_lng, end_lat);

        debug!(
            "OpenRouteService: requesting {} from {} to {}",
            profile, start, end
        );

        let response = self
            .client
            .get(self.directions_url(profile))
            .header(ACCEPT, "application/json, application/geo+json")
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("start", start.as_str()),
                ("end", end.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        debug!("OpenRouteService: response status {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("OpenRouteService: error response {} - {}", status, body);
            return Err(DirectionsError::RoutingProvider {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let segment = parse_directions_response(&body)?;

        debug!(
            "OpenRouteService: {} points, {:.3} km, {} min",
            segment.path.len(),
            segment.distance_km,
            segment.duration_min
        );

        Ok(segment)
    }
}

impl SegmentFetcher for OpenRouteServiceClient {
    async fn fetch_segment(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        profile: DirectionsProfile,
    ) -> Result<SegmentResult, DirectionsError> {
        self.request_segment(origin, destination, profile).await
    }
}
