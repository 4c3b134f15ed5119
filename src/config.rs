// config.rs
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub auction_sweep_secs: u64,
}

impl Config {
    pub fn init() -> Config {
        // Nothing here is secret and the catalogue is in-memory, so every
        // variable has a usable default and the service boots on an empty env.
        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8000);

        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| {
                "http://localhost:5173,http://localhost:8000".to_string()
            })
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let auction_sweep_secs = std::env::var("AUCTION_SWEEP_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(30);

        Config {
            port,
            allowed_origins,
            auction_sweep_secs,
        }
    }
}
