//! In-memory stand-in for the registry server.

use std::sync::Mutex;

use async_trait::async_trait;
use itemreg_runtime::{Error, ItemRepository, Result};
use itemreg_types::{Item, ItemDraft, ItemId};

#[derive(Debug, Default)]
struct State {
    items: Vec<Item>,
    next_id: ItemId,
    failing: bool,
    calls: Vec<String>,
}

/// Plays the server role: assigns ids and registration stamps, answers 404
/// for unknown ids, and can be switched into a failing mode where every
/// call behaves like an unreachable host.
#[derive(Debug, Default)]
pub struct FakeRepository {
    state: Mutex<State>,
}

impl FakeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        let next_id = items.iter().filter_map(|item| item.id).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(State {
                items,
                next_id,
                ..State::default()
            }),
        }
    }

    /// Make every following call fail until switched back
    pub fn set_failing(&self, failing: bool) {
        self.lock().failing = failing;
    }

    pub fn items(&self) -> Vec<Item> {
        self.lock().items.clone()
    }

    /// `VERB path` for every call received, oldest first
    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().expect("fake repository lock poisoned")
    }

    fn enter(&self, call: String) -> Result<std::sync::MutexGuard<'_, State>> {
        let mut state = self.lock();
        state.calls.push(call);
        if state.failing {
            return Err(Error::Transport {
                status: None,
                message: "connection refused".to_string(),
            });
        }
        Ok(state)
    }
}

fn not_found(id: ItemId) -> Error {
    Error::Transport {
        status: Some(404),
        message: format!("item {} not found", id),
    }
}

#[async_trait]
impl ItemRepository for FakeRepository {
    async fn list_items(&self) -> Vec<Item> {
        match self.enter("GET /itens".to_string()) {
            Ok(state) => state.items.clone(),
            Err(_) => Vec::new(),
        }
    }

    async fn get_item(&self, id: ItemId) -> Result<Item> {
        let state = self.enter(format!("GET /itens/{}", id))?;
        state
            .items
            .iter()
            .find(|item| item.id == Some(id))
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn create_item(&self, draft: &ItemDraft) -> Result<Item> {
        let mut state = self.enter("POST /itens".to_string())?;
        let id = state.next_id.max(1);
        state.next_id = id + 1;

        let mut item = draft.clone().into_item(id);
        item.registration_date = Some(
            chrono::Local::now()
                .naive_local()
                .format("%Y-%m-%dT%H:%M:%S")
                .to_string(),
        );
        item.registration_user = Some("sistema".to_string());
        state.items.push(item.clone());
        Ok(item)
    }

    async fn update_item(&self, id: ItemId, draft: &ItemDraft) -> Result<Item> {
        let mut state = self.enter(format!("PUT /itens/{}", id))?;
        let existing = state
            .items
            .iter_mut()
            .find(|item| item.id == Some(id))
            .ok_or_else(|| not_found(id))?;

        let mut updated = draft.clone().into_item(id);
        updated.registration_date = existing.registration_date.take();
        updated.registration_user = existing.registration_user.take();
        *existing = updated.clone();
        Ok(updated)
    }

    async fn delete_item(&self, id: ItemId) -> Result<()> {
        let mut state = self.enter(format!("DELETE /itens/{}", id))?;
        let before = state.items.len();
        state.items.retain(|item| item.id != Some(id));
        if state.items.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}
