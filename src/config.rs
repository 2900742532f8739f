use log::warn;

/// Server settings read from the environment (`.env` is loaded first by
/// `main`). Missing or malformed values fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8080;

    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("SERVER_HOST").ok(),
            std::env::var("SERVER_PORT").ok(),
        )
    }

    pub fn from_vars(host: Option<String>, port: Option<String>) -> Self {
        let host = host
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_HOST.to_string());

        let port = match port {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!(
                    "SERVER_PORT '{}' is not a valid port, using {}",
                    raw,
                    Self::DEFAULT_PORT
                );
                Self::DEFAULT_PORT
            }),
            None => Self::DEFAULT_PORT,
        };

        Self { host, port }
    }

    pub fn bind_address(&self) -> (&str, u16) {
        (&self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(None, None)
    }
}
