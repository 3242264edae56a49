/*!
 * Zotero web API client.
 *
 * This module contains the HTTP client for the public Zotero API and the
 * `PublicationSource` trait the controller consumes, allowing the item
 * source to be swapped out in tests.
 */

use std::time::Duration;
use async_trait::async_trait;
use log::error;
use reqwest::Client;
use url::Url;

use crate::app_config::ZoteroConfig;
use crate::errors::ApiError;
use crate::publication::Publication;

/// Common trait for publication item sources
///
/// The controller renders whatever sequence of items a source yields,
/// so tests can substitute an in-memory source for the live API.
#[async_trait]
pub trait PublicationSource: Send + Sync {
    /// Fetch all publication items from this source
    ///
    /// # Returns
    /// * `Result<Vec<Publication>, ApiError>` - Items in source order, or an error
    async fn fetch(&self) -> Result<Vec<Publication>, ApiError>;
}

/// Zotero client for the public publications library of one user
pub struct ZoteroClient {
    /// HTTP client for API requests
    client: Client,
    /// API base URL
    endpoint: String,
    /// Numeric user identifier
    user_id: String,
    /// Page size of the single request (API caps at 100)
    limit: usize,
}

impl ZoteroClient {
    /// Create a new Zotero client
    pub fn new(user_id: impl Into<String>, endpoint: impl Into<String>, limit: usize) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
            user_id: user_id.into(),
            limit,
        }
    }

    /// Create a client from the Zotero section of the configuration
    pub fn from_config(config: &ZoteroConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: config.endpoint.clone(),
            user_id: config.user_id.clone(),
            limit: config.limit,
        }
    }

    /// Build the items request URL
    ///
    /// The query string is fixed apart from the page size: one page of the
    /// publications library, sorted by date descending, with the `data`
    /// object included inline.
    pub fn items_url(&self) -> Result<Url, ApiError> {
        let url = format!(
            "{}/users/{}/publications/items?linkwrap=1&order=date&sort=desc&start=0&include=data&limit={}&style=",
            self.endpoint.trim_end_matches('/'),
            self.user_id,
            self.limit
        );

        Url::parse(&url).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", url, e)))
    }
}

#[async_trait]
impl PublicationSource for ZoteroClient {
    async fn fetch(&self) -> Result<Vec<Publication>, ApiError> {
        let url = self.items_url()?;

        let response = self.client.get(url)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(format!("Failed to send request to Zotero API: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Zotero API error ({}): {}", status, error_text);
            return Err(ApiError::ApiStatus {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let items = response.json::<Vec<Publication>>().await
            .map_err(|e| ApiError::ParseError(format!("Failed to parse Zotero API response: {}", e)))?;

        Ok(items)
    }
}
