use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub db_url: String,
    /// Master secret for the session cookie key. Must be at least 32 bytes;
    /// when unset the server falls back to an ephemeral key.
    pub session_key: Option<String>,
    pub relay: RelayConfig,
}

#[derive(Clone, Debug)]
pub struct RelayConfig {
    pub port: i32,
    pub api_base_url: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let db_url: String = Self::get_env("POSTGRES_URI");

        EnvConfig {
            port: env::var("PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(5000),
            db_url,
            session_key: env::var("SESSION_KEY").ok(),
            relay: RelayConfig {
                port: env::var("RELAY_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(8000),
                api_base_url: env::var("API_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            },
        }
    }
}
