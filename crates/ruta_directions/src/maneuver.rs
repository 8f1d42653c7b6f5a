use serde::{Deserialize, Serialize};

/// Maneuver type codes returned by OpenRouteService for each step.
///
/// https://giscience.github.io/openrouteservice/api-reference/endpoints/directions/instruction-types
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum ManeuverType {
    TurnLeft,
    TurnRight,
    SharpLeft,
    SharpRight,
    SlightLeft,
    SlightRight,
    Straight,
    EnterRoundabout,
    ExitRoundabout,
    UTurn,
    Arrive,
    Depart,
    KeepLeft,
    KeepRight,
    Other(u8),
}

impl From<u8> for ManeuverType {
    fn from(code: u8) -> Self {
        match code {
            0 => ManeuverType::TurnLeft,
            1 => ManeuverType::TurnRight,
            2 => ManeuverType::SharpLeft,
            3 => ManeuverType::SharpRight,
            4 => ManeuverType::SlightLeft,
            5 => ManeuverType::SlightRight,
            6 => ManeuverType::Straight,
            7 => ManeuverType::EnterRoundabout,
            8 => ManeuverType::ExitRoundabout,
            9 => ManeuverType::UTurn,
            10 => ManeuverType::Arrive,
            11 => ManeuverType::Depart,
            12 => ManeuverType::KeepLeft,
            13 => ManeuverType::KeepRight,
            other => ManeuverType::Other(other),
        }
    }
}

impl From<ManeuverType> for u8 {
    fn from(maneuver: ManeuverType) -> Self {
        maneuver.code()
    }
}

impl ManeuverType {
    pub fn code(&self) -> u8 {
        match self {
            ManeuverType::TurnLeft => 0,
            ManeuverType::TurnRight => 1,
            ManeuverType::SharpLeft => 2,
            ManeuverType::SharpRight => 3,
            ManeuverType::SlightLeft => 4,
            ManeuverType::SlightRight => 5,
            ManeuverType::Straight => 6,
            ManeuverType::EnterRoundabout => 7,
            ManeuverType::ExitRoundabout => 8,
            ManeuverType::UTurn => 9,
            ManeuverType::Arrive => 10,
            ManeuverType::Depart => 11,
            ManeuverType::KeepLeft => 12,
            ManeuverType::KeepRight => 13,
            ManeuverType::Other(code) => *code,
        }
    }

    fn text(&self) -> &'static str {
        match self {
            ManeuverType::TurnLeft => "Gira a la izquierda",
            ManeuverType::TurnRight => "Gira a la derecha",
            ManeuverType::SharpLeft => "Gira fuerte a la izquierda",
            ManeuverType::SharpRight => "Gira fuerte a la derecha",
            ManeuverType::SlightLeft => "Gira ligeramente a la izquierda",
            ManeuverType::SlightRight => "Gira ligeramente a la derecha",
            ManeuverType::Straight => "Continua recto",
            ManeuverType::EnterRoundabout => "Entra a la glorieta",
            ManeuverType::ExitRoundabout => "Sal de la glorieta",
            ManeuverType::UTurn => "Retorno en U",
            ManeuverType::Arrive => "Has llegado a tu destino",
            ManeuverType::Depart => "Inicia el recorrido",
            ManeuverType::KeepLeft => "Mantente a la izquierda",
            ManeuverType::KeepRight => "Mantente a la derecha",
            ManeuverType::Other(_) => "Continua",
        }
    }

    /// Localized instruction for this maneuver, with the street appended
    /// when the provider gave a usable name. Arrival never names a street.
    pub fn instruction(&self, street: Option<&str>) -> String {
        let street = street.map(str::trim).filter(|name| is_meaningful_street(name));

        match (self, street) {
            (ManeuverType::Arrive, _) | (_, None) => String::from(self.text()),
            (_, Some(name)) => format!("{} por {}", self.text(), name),
        }
    }
}

/// ORS uses "-" when a way has no name.
pub(crate) fn is_meaningful_street(name: &str) -> bool {
    !name.is_empty() && name != "-"
}

pub fn format_step_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("En {} m", meters.round())
    } else {
        format!("En {:.1} km", meters / 1000.0)
    }
}
