use crate::avalanche::bulletin::BulletinDocument;
use crate::avalanche::error::BulletinError;
use log::{info, warn};
use reqwest::Client;

/// Downloads the shared avalanche bulletin. The URL takes no parameters.
pub struct BulletinFetcher {
    client: Client,
    url: String,
}

impl BulletinFetcher {
    pub fn new(client: Client, url: String) -> Self {
        Self { client, url }
    }

    pub async fn fetch(&self) -> Result<BulletinDocument, BulletinError> {
        info!("Downloading avalanche bulletin from {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| BulletinError::NetworkRequest(self.url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", self.url, e);
                return Err(if let Some(status) = e.status() {
                    BulletinError::HttpStatus {
                        url: self.url.clone(),
                        status,
                        source: e,
                    }
                } else {
                    BulletinError::NetworkRequest(self.url.clone(), e)
                });
            }
        };

        // The document is served as text/plain, so parse the body ourselves.
        let body = response.text().await.map_err(|e| BulletinError::Body {
            url: self.url.clone(),
            source: e,
        })?;
        let document: BulletinDocument = serde_json::from_str(&body)?;
        info!(
            "Avalanche bulletin covers {} massifs",
            document.massifs.len()
        );
        Ok(document)
    }
}
