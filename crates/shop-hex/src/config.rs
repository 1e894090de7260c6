use anyhow::Context;
use serde::Deserialize;
use std::env;

pub const DEFAULT_PORT: u16 = 7000;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server_port: u16,
    pub database_url: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let server_port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            Err(_) => DEFAULT_PORT,
        };
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());
        Ok(Self {
            server_port,
            database_url,
        })
    }
}
