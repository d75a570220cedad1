use std::path::PathBuf;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_WEBHOOK_URL: &str =
    "https://n8n.saintsolution.com.br/webhook/ab40ce52-2fdf-413f-8a30-8fe6125290d0";
pub const DEFAULT_PIX_KEY: &str = "contato@saintsolution.com.br";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "public";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub webhook_url: Url,
    pub pix_key: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = lookup("WEBHOOK_URL").unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_string());
        let webhook_url = Url::parse(&raw_url)
            .map_err(|e| ConfigError::InvalidWebhookUrl(format!("{}: {}", raw_url, e)))?;
        if !matches!(webhook_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidWebhookUrl(raw_url));
        }

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidNumber { name: "PORT", value })?,
            None => DEFAULT_PORT,
        };
        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidNumber { name: "MAX_UPLOAD_BYTES", value })?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            webhook_url,
            pix_key: lookup("PIX_KEY").unwrap_or_else(|| DEFAULT_PIX_KEY.to_string()),
            port,
            static_dir: PathBuf::from(
                lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            ),
            max_upload_bytes,
        })
    }
}
