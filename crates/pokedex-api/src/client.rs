use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::model::{IndexPage, Record, RecordPayload, ResourceRef};
use crate::transport::{HttpResponse, ReqwestTransport, Transport};
use serde::de::DeserializeOwned;

/// PokéAPI client over a pluggable transport
pub struct PokeClient<T = ReqwestTransport> {
    transport: T,
    base_url: String,
}

impl PokeClient<ReqwestTransport> {
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self::new(ReqwestTransport::new(config)?, &config.base_url))
    }
}

impl<T: Transport> PokeClient<T> {
    pub fn new(transport: T, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn index_url(&self, limit: usize) -> String {
        format!("{}/pokemon?limit={}", self.base_url, limit)
    }

    /// Detail endpoint for a name. The name is used as given.
    pub fn record_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, urlencoding::encode(name))
    }

    /// Fetch one page of the resource index
    pub fn fetch_index(&self, limit: usize) -> Result<Vec<ResourceRef>, ApiError> {
        let url = self.index_url(limit);
        let page: IndexPage = self.get_json(&url)?;
        Ok(page.into_refs())
    }

    /// Fetch the full record behind an endpoint. No retries.
    pub fn fetch_record(&self, endpoint: &str) -> Result<Record, ApiError> {
        let payload: RecordPayload = self.get_json(endpoint)?;
        Ok(payload.into())
    }

    fn get_json<D: DeserializeOwned>(&self, url: &str) -> Result<D, ApiError> {
        log::debug!("GET {}", url);
        let response = self.transport.get(url)?;
        let body = check_status(url, response)?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

fn check_status(url: &str, response: HttpResponse) -> Result<Vec<u8>, ApiError> {
    match response.status {
        _ if response.is_success() => Ok(response.body),
        404 => Err(ApiError::NotFound {
            url: url.to_string(),
        }),
        status => {
            log::debug!("{} returned {}", url, status);
            Err(ApiError::Status {
                url: url.to_string(),
                status,
            })
        }
    }
}
