//! HTTP implementation of [`ItemRepository`].
//!
//! All five operations target one collection URL:
//!
//! | operation     | request             |
//! |---------------|---------------------|
//! | `list_items`  | `GET base`          |
//! | `get_item`    | `GET base/{id}`     |
//! | `create_item` | `POST base`         |
//! | `update_item` | `PUT base/{id}`     |
//! | `delete_item` | `DELETE base/{id}`  |

use std::time::Duration;

use async_trait::async_trait;
use itemreg_types::{Item, ItemDraft, ItemId};
use reqwest::{Client, Method, RequestBuilder, Response};

use crate::config::ApiConfig;
use crate::repository::ItemRepository;
use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct HttpItemRepository {
    base_url: String,
    client: Client,
}

impl HttpItemRepository {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(api: &ApiConfig) -> Result<Self> {
        Self::new(&api.base_url, Duration::from_secs(api.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: ItemId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        tracing::debug!(method = method.as_str(), url, "item api request");
        self.client.request(method, url)
    }

    async fn fetch_list(&self) -> Result<Vec<Item>> {
        let response = self.request(Method::GET, &self.base_url).send().await?;
        let items = check_status(response).await?.json().await?;
        Ok(items)
    }
}

/// Turn a non-2xx answer into a transport failure carrying the status
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_string()
    } else {
        body
    };

    Err(Error::Transport {
        status: Some(status.as_u16()),
        message,
    })
}

#[async_trait]
impl ItemRepository for HttpItemRepository {
    async fn list_items(&self) -> Vec<Item> {
        match self.fetch_list().await {
            Ok(items) => {
                tracing::debug!(count = items.len(), "items loaded");
                items
            }
            Err(err) => {
                tracing::error!(url = %self.base_url, error = %err, "failed to load items");
                Vec::new()
            }
        }
    }

    async fn get_item(&self, id: ItemId) -> Result<Item> {
        let response = self.request(Method::GET, &self.item_url(id)).send().await?;
        Ok(check_status(response).await?.json().await?)
    }

    async fn create_item(&self, draft: &ItemDraft) -> Result<Item> {
        let response = self
            .request(Method::POST, &self.base_url)
            .json(draft)
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }

    async fn update_item(&self, id: ItemId, draft: &ItemDraft) -> Result<Item> {
        let response = self
            .request(Method::PUT, &self.item_url(id))
            .json(draft)
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }

    async fn delete_item(&self, id: ItemId) -> Result<()> {
        let response = self
            .request(Method::DELETE, &self.item_url(id))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Port 1 is never listening, so every request is refused at connect time
    const UNREACHABLE: &str = "http://127.0.0.1:1/itens";

    fn unreachable() -> HttpItemRepository {
        HttpItemRepository::new(UNREACHABLE, Duration::from_secs(2)).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let repo = HttpItemRepository::new("http://localhost:8080/itens/", Duration::from_secs(1))
            .unwrap();
        assert_eq!(repo.base_url(), "http://localhost:8080/itens");
        assert_eq!(repo.item_url(7), "http://localhost:8080/itens/7");
    }

    #[tokio::test]
    async fn test_list_items_degrades_to_empty() {
        let items = unreachable().list_items().await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_get_item_propagates_transport_failure() {
        let err = unreachable().get_item(1).await.unwrap_err();
        assert!(matches!(err, Error::Transport { status: None, .. }));
    }

    #[tokio::test]
    async fn test_delete_item_propagates_transport_failure() {
        let err = unreachable().delete_item(1).await.unwrap_err();
        assert!(matches!(err, Error::Transport { .. }));
        assert_eq!(err.status(), None);
    }
}
