use itemreg_types::{Item, ItemId};

use crate::filter::{DepartmentFilter, FilterEngine, FilterSpec};
use crate::selection::SelectionTracker;

/// What changed in an [`ItemStore`]; delivered to every observer after the
/// mutation has been applied.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    Loaded { total: usize },
    LoadDiscarded { ticket: u64 },
    Filtered { filtered: usize, total: usize },
    FilterCleared { total: usize },
    SelectionChanged { selected: usize, all_selected: bool },
    Removed { id: ItemId },
}

/// Sequence stamp for one collection load.
///
/// Issued by [`ItemStore::begin_load`]; a completion carrying an older
/// ticket than the last accepted one is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

type Observer = Box<dyn FnMut(&StoreEvent) + Send>;

/// Owned item state: the full collection, the filter engine over it and
/// the selection scoped to its view.
///
/// Any filter change clears the selection.
#[derive(Default)]
pub struct ItemStore {
    engine: FilterEngine,
    selection: SelectionTracker,
    observers: Vec<Observer>,
    issued_loads: u64,
    accepted_load: u64,
}

impl std::fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStore")
            .field("engine", &self.engine)
            .field("selection", &self.selection)
            .field("observers", &self.observers.len())
            .field("issued_loads", &self.issued_loads)
            .field("accepted_load", &self.accepted_load)
            .finish()
    }
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        let mut store = Self::new();
        store.replace_items(items);
        store
    }

    /// Register a callback invoked after every state change
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&StoreEvent) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    // --- Loading ---

    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued_loads += 1;
        LoadTicket(self.issued_loads)
    }

    /// Accept a load result unless a newer load already landed.
    ///
    /// Returns `false` when the result was discarded as stale.
    pub fn complete_load(&mut self, ticket: LoadTicket, items: Vec<Item>) -> bool {
        if ticket.0 <= self.accepted_load {
            tracing::debug!(
                ticket = ticket.0,
                accepted = self.accepted_load,
                "discarding stale item load"
            );
            self.notify(StoreEvent::LoadDiscarded { ticket: ticket.0 });
            return false;
        }

        self.accepted_load = ticket.0;
        self.replace_items(items);
        true
    }

    /// Replace the collection without any sequencing check
    pub fn replace_items(&mut self, items: Vec<Item>) {
        self.engine.set_items(items);
        self.selection.clear();
        self.selection.recompute_select_all(&self.engine.filtered());
        tracing::debug!(total = self.engine.total_count(), "item collection replaced");
        self.notify(StoreEvent::Loaded {
            total: self.engine.total_count(),
        });
    }

    // --- Filtering ---

    pub fn apply_filter(&mut self, spec: FilterSpec) {
        self.engine.apply_filter(spec);
        self.selection.clear();
        self.notify(StoreEvent::Filtered {
            filtered: self.engine.filtered_count(),
            total: self.engine.total_count(),
        });
    }

    pub fn clear_filter(&mut self) {
        self.engine.clear_filter();
        self.selection.clear();
        self.notify(StoreEvent::FilterCleared {
            total: self.engine.total_count(),
        });
    }

    // --- Selection ---

    pub fn toggle(&mut self, id: ItemId) -> bool {
        let view = self.engine.filtered();
        let selected = self.selection.toggle(id, &view);
        self.notify_selection();
        selected
    }

    pub fn toggle_all(&mut self) {
        let view = self.engine.filtered();
        self.selection.toggle_all(&view);
        self.notify_selection();
    }

    /// Returns how many ids were newly selected
    pub fn select_ids(&mut self, ids: &[ItemId]) -> usize {
        let view = self.engine.filtered();
        let added = self.selection.select_ids(ids, self.engine.items(), &view);
        self.notify_selection();
        added
    }

    // --- Mutation after server confirmation ---

    /// Drop an item the server confirmed as deleted
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let removed = self.engine.remove(id)?;
        let view = self.engine.filtered();
        self.selection.remove(id, &view);
        self.notify(StoreEvent::Removed { id });
        Some(removed)
    }

    // --- Read side ---

    pub fn items(&self) -> &[Item] {
        self.engine.items()
    }

    pub fn filtered(&self) -> Vec<&Item> {
        self.engine.filtered()
    }

    /// Selected items from the full collection, in collection order
    pub fn selected_items(&self) -> Vec<&Item> {
        self.engine
            .items()
            .iter()
            .filter(|item| item.id.is_some_and(|id| self.selection.is_selected(id)))
            .collect()
    }

    pub fn spec(&self) -> &FilterSpec {
        self.engine.spec()
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selection.is_selected(id)
    }

    pub fn is_filter_active(&self) -> bool {
        self.engine.is_filter_active()
    }

    pub fn filtered_count(&self) -> usize {
        self.engine.filtered_count()
    }

    pub fn total_count(&self) -> usize {
        self.engine.total_count()
    }

    pub fn count_label(&self) -> String {
        self.engine.count_label()
    }

    pub fn department_options(&self) -> &[DepartmentFilter] {
        self.engine.department_options()
    }

    fn notify_selection(&mut self) {
        self.notify(StoreEvent::SelectionChanged {
            selected: self.selection.count(),
            all_selected: self.selection.is_all_selected(),
        });
    }

    fn notify(&mut self, event: StoreEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }
}
