use itemreg_types::{Item, ItemType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type selector: everything, or one item type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TypeFilter {
    #[default]
    All,
    Only(ItemType),
}

/// Department selector: everything, or one exact department name
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DepartmentFilter {
    #[default]
    All,
    Exact(String),
}

impl fmt::Display for DepartmentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepartmentFilter::All => f.write_str("all"),
            DepartmentFilter::Exact(name) => f.write_str(name),
        }
    }
}

/// The user's current filter criteria.
///
/// All predicates are ANDed. Bounds are inclusive and not coupled: a
/// minimum above the maximum simply matches nothing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    pub query: String,
    pub item_type: TypeFilter,
    pub department: DepartmentFilter,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn item_type(mut self, item_type: ItemType) -> Self {
        self.item_type = TypeFilter::Only(item_type);
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = DepartmentFilter::Exact(department.into());
        self
    }

    pub fn min_value(mut self, min: f64) -> Self {
        self.min_value = Some(min);
        self
    }

    pub fn max_value(mut self, max: f64) -> Self {
        self.max_value = Some(max);
        self
    }

    /// True iff any field differs from the defaults
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
            || self.item_type != TypeFilter::All
            || self.department != DepartmentFilter::All
            || self.min_value.is_some()
            || self.max_value.is_some()
    }

    /// Evaluate every predicate against one item
    pub fn matches(&self, item: &Item) -> bool {
        self.matches_with(item, &self.query.to_lowercase())
    }

    /// Indices of matching items, in collection order
    pub fn select_indices(&self, items: &[Item]) -> Vec<usize> {
        let needle = self.query.to_lowercase();

        items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.matches_with(item, &needle))
            .map(|(idx, _)| idx)
            .collect()
    }

    fn matches_with(&self, item: &Item, needle: &str) -> bool {
        self.matches_query(item, needle)
            && self.matches_type(item)
            && self.matches_department(item)
            && self.min_value.is_none_or(|min| item.unit_value >= min)
            && self.max_value.is_none_or(|max| item.unit_value <= max)
    }

    fn matches_query(&self, item: &Item, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }

        [
            item.code.as_str(),
            item.description.as_str(),
            item.process.as_str(),
            item.department.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }

    fn matches_type(&self, item: &Item) -> bool {
        match self.item_type {
            TypeFilter::All => true,
            TypeFilter::Only(t) => item.item_type == t,
        }
    }

    fn matches_department(&self, item: &Item) -> bool {
        match &self.department {
            DepartmentFilter::All => true,
            DepartmentFilter::Exact(name) => &item.department == name,
        }
    }
}

/// Holds the full collection and derives the filtered view from a [`FilterSpec`].
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    items: Vec<Item>,
    spec: FilterSpec,
    view: Vec<usize>,
    departments: Vec<DepartmentFilter>,
}

impl FilterEngine {
    pub fn new(items: Vec<Item>) -> Self {
        let mut engine = Self::default();
        engine.set_items(items);
        engine
    }

    /// Replace the collection wholesale.
    ///
    /// Department options are rebuilt here and only here; the current
    /// spec is re-applied to the new collection.
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.departments = department_options(&items);
        self.items = items;
        self.view = self.spec.select_indices(&self.items);
    }

    pub fn apply_filter(&mut self, spec: FilterSpec) {
        self.view = spec.select_indices(&self.items);
        self.spec = spec;
    }

    pub fn clear_filter(&mut self) {
        self.spec = FilterSpec::default();
        self.view = (0..self.items.len()).collect();
    }

    /// Drop an item from the collection and the view, keeping order
    pub fn remove(&mut self, id: itemreg_types::ItemId) -> Option<Item> {
        let pos = self.items.iter().position(|item| item.id == Some(id))?;
        let removed = self.items.remove(pos);
        self.view = self
            .view
            .iter()
            .filter(|&&idx| idx != pos)
            .map(|&idx| if idx > pos { idx - 1 } else { idx })
            .collect();
        Some(removed)
    }

    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn filtered(&self) -> Vec<&Item> {
        self.view.iter().map(|&idx| &self.items[idx]).collect()
    }

    pub fn is_filter_active(&self) -> bool {
        self.spec.is_active()
    }

    pub fn filtered_count(&self) -> usize {
        self.view.len()
    }

    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    /// `"N itens"` when nothing is hidden, else `"F de N itens"`
    pub fn count_label(&self) -> String {
        if self.filtered_count() == self.total_count() {
            format!("{} itens", self.total_count())
        } else {
            format!("{} de {} itens", self.filtered_count(), self.total_count())
        }
    }

    /// `All` followed by each distinct department, first-seen order
    pub fn department_options(&self) -> &[DepartmentFilter] {
        &self.departments
    }
}

/// Build the department selector options for a collection.
pub fn department_options(items: &[Item]) -> Vec<DepartmentFilter> {
    let mut options = vec![DepartmentFilter::All];
    for item in items {
        let option = DepartmentFilter::Exact(item.department.clone());
        if !options.contains(&option) {
            options.push(option);
        }
    }
    options
}
