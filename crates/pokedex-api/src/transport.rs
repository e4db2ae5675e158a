//! HTTP seam between the components and the network

use crate::config::ClientConfig;
use crate::error::ApiError;
use reqwest::blocking::Client;

/// A received HTTP response, successful or not
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking GET. Returns `Err` only when no response was received;
/// status classification is left to the caller.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<HttpResponse, ApiError> {
        (**self).get(url)
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn get(&self, url: &str) -> Result<HttpResponse, ApiError> {
        (**self).get(url)
    }
}

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        // `None` must reach the builder; it has its own default otherwise
        let client = Client::builder()
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::network(config.base_url.clone(), e))?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ApiError::network(url, e))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| ApiError::network(url, e))?
            .to_vec();
        Ok(HttpResponse { status, body })
    }
}
