use async_trait::async_trait;
use itemreg_types::{Item, ItemDraft, ItemId};

use crate::Result;

/// CRUD access to the remote item collection.
///
/// Every call is a single request with no retry or caching. `list_items`
/// never fails: a transport failure is logged and yields an empty list, so
/// the caller always has a collection to show.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn list_items(&self) -> Vec<Item>;

    async fn get_item(&self, id: ItemId) -> Result<Item>;

    async fn create_item(&self, draft: &ItemDraft) -> Result<Item>;

    async fn update_item(&self, id: ItemId, draft: &ItemDraft) -> Result<Item>;

    async fn delete_item(&self, id: ItemId) -> Result<()>;
}
