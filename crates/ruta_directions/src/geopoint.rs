use std::{fmt::Display, str::FromStr};

use geo::{Distance, Haversine};
use serde::{Deserialize, Serialize};

use crate::error::DirectionsError;

/// A WGS84 coordinate in (latitude, longitude) order.
///
/// This is the order used by callers and by every structure of this crate.
/// The provider expects (longitude, latitude), see [`GeoPoint::to_lng_lat`].
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Result<Self, DirectionsError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(DirectionsError::InvalidCoordinate { lat, lng });
        }

        Ok(GeoPoint { lat, lng })
    }

    /// Builds a point from a provider coordinate, which is in (lng, lat) order.
    pub fn from_lng_lat(coordinate: [f64; 2]) -> Self {
        GeoPoint {
            lat: coordinate[1],
            lng: coordinate[0],
        }
    }

    pub fn to_lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    /// Great-circle distance in meters.
    pub fn haversine_distance(&self, other: &GeoPoint) -> f64 {
        let haversine = Haversine;

        haversine.distance(geo_types::Point::from(self), geo_types::Point::from(other))
    }
}

impl TryFrom<[f64; 2]> for GeoPoint {
    type Error = DirectionsError;

    fn try_from(value: [f64; 2]) -> Result<Self, Self::Error> {
        GeoPoint::new(value[0], value[1])
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(point: GeoPoint) -> Self {
        [point.lat, point.lng]
    }
}

impl From<&GeoPoint> for geo_types::Point {
    fn from(point: &GeoPoint) -> Self {
        geo_types::Point::new(point.lng, point.lat)
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Parses `lat,lng`.
impl FromStr for GeoPoint {
    type Err = DirectionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || DirectionsError::InvalidInput(format!("invalid coordinate '{s}'"));

        let (lat, lng) = s.split_once(',').ok_or_else(parse_error)?;
        let lat = lat.trim().parse::<f64>().map_err(|_| parse_error())?;
        let lng = lng.trim().parse::<f64>().map_err(|_| parse_error())?;

        GeoPoint::new(lat, lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range() {
        assert!(GeoPoint::new(90.5, 0.0).is_err());
        assert!(GeoPoint::new(0.0, -180.1).is_err());
        assert!(GeoPoint::new(-90.0, 180.0).is_ok());
    }

    #[test]
    fn test_axis_swap() {
        let point = GeoPoint::new(20.535, -100.82).unwrap();
        assert_eq!(point.to_lng_lat(), [-100.82, 20.535]);
        assert_eq!(GeoPoint::from_lng_lat([-100.82, 20.535]), point);

        let geo: geo_types::Point = (&point).into();
        assert_eq!(geo.x(), -100.82);
        assert_eq!(geo.y(), 20.535);
    }

    #[test]
    fn test_serde_as_lat_lng_array() {
        let point: GeoPoint = serde_json::from_str("[20.53, -100.815]").unwrap();
        assert_eq!(point.lat, 20.53);
        assert_eq!(point.lng, -100.815);
        assert_eq!(serde_json::to_string(&point).unwrap(), "[20.53,-100.815]");

        assert!(serde_json::from_str::<GeoPoint>("[120.0, 0.0]").is_err());
    }

    #[test]
    fn test_from_str() {
        let point: GeoPoint = "20.525, -100.81".parse().unwrap();
        assert_eq!(point, GeoPoint::new(20.525, -100.81).unwrap());

        assert!("20.525".parse::<GeoPoint>().is_err());
        assert!("abc,1".parse::<GeoPoint>().is_err());
    }

    #[test]
    fn test_haversine_distance() {
        let a = GeoPoint::new(0.0, 0.0).unwrap();
        let b = GeoPoint::new(0.0, 1.0).unwrap();

        // One degree of longitude at the equator, mean earth radius
        assert!((a.haversine_distance(&b) - 111_195.08).abs() < 1.0);
        assert_eq!(a.haversine_distance(&b), b.haversine_distance(&a));
        assert_eq!(a.haversine_distance(&a), 0.0);

        let stop = GeoPoint::new(20.535, -100.82).unwrap();
        let next = GeoPoint::new(20.53, -100.815).unwrap();
        let distance = stop.haversine_distance(&next);
        assert!(distance > 700.0 && distance < 760.0);
    }
}
