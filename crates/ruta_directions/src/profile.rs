use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DirectionsProfile {
    /// Passenger walking to or from a stop
    FootWalking,
    /// Driver following the bus stops
    #[default]
    DrivingCar,
}

impl Display for DirectionsProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DirectionsProfile::FootWalking => "foot-walking",
                DirectionsProfile::DrivingCar => "driving-car",
            }
        )
    }
}

impl FromStr for DirectionsProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "foot-walking" | "walking" => Ok(DirectionsProfile::FootWalking),
            "driving-car" | "driving" => Ok(DirectionsProfile::DrivingCar),
            other => Err(format!("Unknown profile '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_provider_path() {
        assert_eq!(DirectionsProfile::FootWalking.to_string(), "foot-walking");
        assert_eq!(DirectionsProfile::DrivingCar.to_string(), "driving-car");
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "walking".parse::<DirectionsProfile>(),
            Ok(DirectionsProfile::FootWalking)
        );
        assert_eq!(
            "driving-car".parse::<DirectionsProfile>(),
            Ok(DirectionsProfile::DrivingCar)
        );
        assert!("cycling".parse::<DirectionsProfile>().is_err());
    }
}
