//! Registry facade: one repository, the owned item store and the report
//! generator, wired together the way a front end drives them.

use std::path::PathBuf;

use itemreg_engine::{FilterSpec, ItemStore};
use itemreg_report::{FULL_REPORT_TITLE, ReportGenerator, selection_title};
use itemreg_types::{Item, ItemDraft, ItemId};

use crate::repository::ItemRepository;
use crate::{Error, Result};

pub struct Registry<R: ItemRepository> {
    repository: R,
    store: ItemStore,
    reports: ReportGenerator,
}

impl<R: ItemRepository> Registry<R> {
    pub fn new(repository: R, reports: ReportGenerator) -> Self {
        Self {
            repository,
            store: ItemStore::new(),
            reports,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ItemStore {
        &mut self.store
    }

    pub fn reports(&self) -> &ReportGenerator {
        &self.reports
    }

    /// Fetch the whole collection and hand it to the store.
    ///
    /// Returns the number of items now loaded. A failed fetch loads an
    /// empty collection.
    pub async fn reload(&mut self) -> usize {
        let ticket = self.store.begin_load();
        let items = self.repository.list_items().await;
        self.store.complete_load(ticket, items);
        self.store.total_count()
    }

    /// Reload, then narrow the view
    pub async fn load_filtered(&mut self, spec: FilterSpec) -> usize {
        self.reload().await;
        self.store.apply_filter(spec);
        self.store.filtered_count()
    }

    pub async fn get(&self, id: ItemId) -> Result<Item> {
        self.repository.get_item(id).await
    }

    /// Validate and create, then reload so the view includes the new item
    pub async fn create(&mut self, draft: &ItemDraft) -> Result<Item> {
        draft.validate()?;
        let created = self.repository.create_item(draft).await?;
        tracing::info!(id = ?created.id, code = %created.code, "item created");
        self.reload().await;
        Ok(created)
    }

    pub async fn update(&mut self, id: ItemId, draft: &ItemDraft) -> Result<Item> {
        draft.validate()?;
        let updated = self.repository.update_item(id, draft).await?;
        tracing::info!(id, code = %updated.code, "item updated");
        self.reload().await;
        Ok(updated)
    }

    /// Delete on the server first; local state only changes once confirmed
    pub async fn delete(&mut self, id: ItemId) -> Result<()> {
        self.repository.delete_item(id).await?;
        tracing::info!(id, "item deleted");
        self.store.remove(id);
        Ok(())
    }

    /// Report over the current filtered view
    pub fn export_filtered(&self, title: Option<&str>) -> Result<PathBuf> {
        let items = self.store.filtered();
        let title = title.unwrap_or(FULL_REPORT_TITLE);
        Ok(self.reports.generate(&items, title)?)
    }

    /// Report over the selected items, in collection order
    pub fn export_selected(&self, title: Option<&str>) -> Result<PathBuf> {
        let items = self.store.selected_items();
        if items.is_empty() {
            return Err(Error::InvalidOperation(
                "no items selected for the report".to_string(),
            ));
        }

        let title = match title {
            Some(title) => title.to_string(),
            None => selection_title(items.len(), self.store.total_count()),
        };
        Ok(self.reports.generate(&items, &title)?)
    }
}
