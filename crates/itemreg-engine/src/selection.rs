use itemreg_types::{Item, ItemId};
use std::collections::BTreeSet;

/// Selected item identifiers plus the "select all" flag.
///
/// Every method that can change either the set or the view it is compared
/// against takes the current filtered view, and leaves `all_selected`
/// equal to [`SelectionTracker::recompute_select_all`] for that view.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    selected: BTreeSet<ItemId>,
    all_selected: bool,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one id. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: ItemId, view: &[&Item]) -> bool {
        let now_selected = if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        };
        self.recompute_select_all(view);
        now_selected
    }

    /// Select or deselect every identified item of the view.
    ///
    /// Ids outside the view are left alone, so earlier selections of
    /// filtered-out items survive this call.
    pub fn toggle_all(&mut self, view: &[&Item]) {
        let ids = view.iter().filter_map(|item| item.id);
        if self.all_selected {
            for id in ids {
                self.selected.remove(&id);
            }
        } else {
            self.selected.extend(ids);
        }
        self.recompute_select_all(view);
    }

    /// Select the given ids where they appear in `items`; unknown ids are ignored.
    pub fn select_ids(&mut self, ids: &[ItemId], items: &[Item], view: &[&Item]) -> usize {
        let mut added = 0;
        for id in ids {
            if items.iter().any(|item| item.id == Some(*id)) && self.selected.insert(*id) {
                added += 1;
            }
        }
        self.recompute_select_all(view);
        added
    }

    pub fn remove(&mut self, id: ItemId, view: &[&Item]) -> bool {
        let removed = self.selected.remove(&id);
        self.recompute_select_all(view);
        removed
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        self.all_selected = false;
    }

    /// True iff the view is non-empty and every item in it is selected
    pub fn recompute_select_all(&mut self, view: &[&Item]) -> bool {
        self.all_selected = !view.is_empty()
            && view
                .iter()
                .all(|item| item.id.is_some_and(|id| self.selected.contains(&id)));
        self.all_selected
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected.contains(&id)
    }

    pub fn is_all_selected(&self) -> bool {
        self.all_selected
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.selected.iter().copied()
    }
}
