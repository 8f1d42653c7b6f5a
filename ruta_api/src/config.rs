use anyhow::anyhow;
use ruta_directions::config::DirectionsConfig;

const BIND_ADDR_ENV_VAR: &str = "RUTA_BIND_ADDR";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

pub struct ServerConfig {
    pub bind_addr: String,
    pub directions: DirectionsConfig,
}

impl ServerConfig {
    pub fn env() -> anyhow::Result<Self> {
        let directions =
            DirectionsConfig::from_env().map_err(|e| anyhow!("invalid directions config: {e}"))?;

        let bind_addr = std::env::var(BIND_ADDR_ENV_VAR)
            .ok()
            .filter(|addr| !addr.trim().is_empty())
            .unwrap_or_else(|| String::from(DEFAULT_BIND_ADDR));

        Ok(Self {
            bind_addr,
            directions,
        })
    }
}
