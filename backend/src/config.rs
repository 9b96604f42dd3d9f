use crate::services::youtube_api::DEFAULT_API_URL;
use crate::services::YouTubeClient;
use anyhow::{anyhow, Context, Result};
use env_logger::{Builder, Env};
use log::info;
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

pub const API_KEY_FILE: &str = "api_key.txt";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub youtube_api_key: String,
    pub youtube_api_url: Url,
    pub frontend_origin: String,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let youtube_api_key =
            load_api_key(Path::new(API_KEY_FILE), env::var("YOUTUBE_API_KEY").ok())?;

        let mut api_url =
            env::var("YOUTUBE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        // Url::join drops the last path segment unless it ends with a slash.
        if !api_url.ends_with('/') {
            api_url.push('/');
        }
        let youtube_api_url = Url::parse(&api_url)
            .with_context(|| format!("YOUTUBE_API_URL is not a valid url: {api_url}"))?;

        let frontend_origin =
            env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:8080".to_string());

        let request_timeout = env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .map(Duration::from_secs)
            .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(AppConfig {
            youtube_api_key,
            youtube_api_url,
            frontend_origin,
            request_timeout,
        })
    }

    pub fn youtube_client(&self) -> Result<YouTubeClient> {
        YouTubeClient::new(
            self.youtube_api_key.clone(),
            self.youtube_api_url.clone(),
            self.request_timeout,
        )
        .map_err(|e| anyhow!("Failed to create YouTube client: {e}"))
    }
}

/// The key file wins over the environment variable when it exists.
pub fn load_api_key(file_path: &Path, env_value: Option<String>) -> Result<String> {
    if file_path.exists() {
        let api_key = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read {}", file_path.display()))?
            .trim()
            .to_string();
        if !api_key.is_empty() {
            return Ok(api_key);
        }
    }

    env_value
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .ok_or_else(|| {
            anyhow!(
                "No YouTube API key: create {} or set YOUTUBE_API_KEY",
                file_path.display()
            )
        })
}

pub fn init_logger() {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    info!("Starting Rocket backend...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn create_cors(frontend_origin: &str) -> Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::some_exact(&[frontend_origin]))
        .allowed_methods(
            vec![Method::Get, Method::Post, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&["Accept", "Content-Type"]))
        .to_cors()
        .map_err(|e| anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}
