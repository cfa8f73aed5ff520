//! ILP REST adapter for no-fly zones and the central area.

use std::fmt;

use tracing::{debug, warn};

use crate::geometry::Region;
use crate::traits::RegionProvider;

/// Environment variable that overrides the service base URL.
pub const BASE_URL_ENV: &str = "ILP_REST_URL";

#[derive(Debug, Clone)]
pub struct IlpRestConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for IlpRestConfig {
    fn default() -> Self {
        Self {
            base_url: "https://ilp-rest-2024.azurewebsites.net".to_string(),
            timeout_secs: 10,
        }
    }
}

impl IlpRestConfig {
    /// Default config with the base URL taken from `ILP_REST_URL` if set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        config
    }
}

#[derive(Debug)]
pub enum RestError {
    Http(reqwest::Error),
}

impl From<reqwest::Error> for RestError {
    fn from(err: reqwest::Error) -> Self {
        RestError::Http(err)
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::Http(err) => write!(f, "ILP REST request failed: {}", err),
        }
    }
}

impl std::error::Error for RestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RestError::Http(err) => Some(err),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IlpRestClient {
    config: IlpRestConfig,
    client: reqwest::blocking::Client,
}

impl IlpRestClient {
    pub fn new(config: IlpRestConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn url(&self, endpoint: &str) -> String {
        let base_url = self.config.base_url.trim_end_matches('/');
        format!("{}/{}", base_url, endpoint)
    }

    fn fetch<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T, RestError> {
        let url = self.url(endpoint);
        debug!(%url, "fetching reference data");

        let response = self
            .client
            .get(url.as_str())
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<T>());

        response.map_err(|err| {
            warn!(%url, error = %err, "reference data request failed");
            RestError::from(err)
        })
    }
}

impl RegionProvider for IlpRestClient {
    type Error = RestError;

    fn no_fly_zones(&self) -> Result<Vec<Region>, Self::Error> {
        self.fetch("noFlyZones")
    }

    fn central_area(&self) -> Result<Region, Self::Error> {
        self.fetch("centralArea")
    }
}
