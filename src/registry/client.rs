//! HTTP civil-registry client

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::RegistryConfig;
use crate::core::models::Cedula;
use crate::utils::error::{AppError, Result};

use super::types::{CivilRegistry, RegistryRecord};

/// Wire shape of a registry response
#[derive(Debug, Deserialize)]
struct RegistryPayload {
    #[serde(default)]
    error: bool,
    data: Option<RegistryData>,
}

#[derive(Debug, Deserialize)]
struct RegistryData {
    name: Option<String>,
    surname: Option<String>,
}

/// Reqwest-backed registry client with a bounded per-request timeout.
///
/// When no base URL is configured the client is disabled and every
/// lookup resolves to not-found without touching the network.
#[derive(Debug, Clone)]
pub struct HttpCivilRegistry {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl HttpCivilRegistry {
    /// Build a client from configuration
    pub fn new(config: &RegistryConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(AppError::HttpClient)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl CivilRegistry for HttpCivilRegistry {
    async fn lookup(&self, cedula: &Cedula) -> Result<Option<RegistryRecord>> {
        let base = match &self.base_url {
            Some(base) => base,
            None => {
                debug!("civil registry disabled, skipping lookup");
                return Ok(None);
            }
        };

        let url = format!("{}/api/v1/cedula", base);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("nacionalidad", cedula.nationality().to_string()),
                ("cedula", cedula.number().to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::dependency(format!("civil registry unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::dependency(format!(
                "civil registry returned status {}",
                response.status()
            )));
        }

        // A malformed or negative payload is "no data", not an outage.
        let payload: RegistryPayload = match response.json().await {
            Ok(payload) => payload,
            Err(e) => {
                warn!("civil registry returned malformed payload: {}", e);
                return Ok(None);
            }
        };

        if payload.error {
            return Ok(None);
        }

        match payload.data {
            Some(RegistryData {
                name: Some(name),
                surname: Some(surname),
            }) => Ok(Some(RegistryRecord { name, surname })),
            _ => Ok(None),
        }
    }
}
