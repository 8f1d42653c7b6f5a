use std::time::Duration;

use clap::Args;
use ruta_directions::{
    config::DirectionsConfig, openrouteservice::OpenRouteServiceClient,
    profile::DirectionsProfile,
};

use crate::{output::OutputFormat, parsers};

#[derive(Args)]
pub struct ProviderArgs {
    /// Routing profile: foot-walking or driving-car
    #[arg(short, long, default_value_t = DirectionsProfile::DrivingCar)]
    pub profile: DirectionsProfile,

    /// Timeout for each provider request (e.g., "30s", "PT1M", "10")
    #[arg(short, long, value_parser = parsers::parse_timeout)]
    pub timeout: Option<Duration>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl ProviderArgs {
    pub fn client(&self) -> anyhow::Result<OpenRouteServiceClient> {
        let mut config = DirectionsConfig::from_env()?;

        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }

        Ok(OpenRouteServiceClient::new(config)?)
    }
}
