use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: String,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("CHECKFORM_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid CHECKFORM_HOST: {e}"))?;

        // PORT is the one override the deployment contract names.
        let port: u16 = env_or("PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid PORT: {e}"))?;

        let static_dir = env_or("CHECKFORM_STATIC_DIR", "static");

        let max_body_size: usize = env_or("CHECKFORM_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid CHECKFORM_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("CHECKFORM_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            static_dir,
            max_body_size,
            log_level,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
