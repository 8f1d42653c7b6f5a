use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectionsError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Invalid coordinate: latitude {lat}, longitude {lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("OpenRouteService error: {status} - {body}")]
    RoutingProvider { status: u16, body: String },

    #[error("Invalid response format from OpenRouteService: {0}")]
    UnexpectedFormat(String),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("No segment of the route could be computed: {0}")]
    AllSegmentsFailed(Box<DirectionsError>),
}

impl DirectionsError {
    /// Whether the caller is at fault, as opposed to the provider or the network.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            DirectionsError::InvalidInput(_) | DirectionsError::InvalidCoordinate { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}
