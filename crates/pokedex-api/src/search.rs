use crate::client::PokeClient;
use crate::error::ApiError;
use crate::model::Record;
use crate::transport::Transport;

/// Direct lookup of a single record by name
pub struct NameSearcher<'c, T: Transport> {
    client: &'c PokeClient<T>,
}

impl<'c, T: Transport> NameSearcher<'c, T> {
    pub fn new(client: &'c PokeClient<T>) -> Self {
        Self { client }
    }

    /// Look up `name` (trimmed, lowercased). A 404 surfaces as `NotFound`,
    /// transport failures as `Network`.
    pub fn search(&self, name: &str) -> Result<Record, ApiError> {
        let normalized = normalize_name(name).ok_or(ApiError::EmptyName)?;
        let url = self.client.record_url(&normalized);
        self.client.fetch_record(&url).inspect_err(|e| {
            log::debug!("Search for `{}` failed: {}", normalized, e);
        })
    }
}

pub fn normalize_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
