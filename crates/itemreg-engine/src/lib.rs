// Engine module - filtering and selection over the loaded item collection
// This layer sits between the repository (runtime) and presentation (cli, report)

pub mod filter;
pub mod selection;
pub mod store;

pub use filter::{DepartmentFilter, FilterEngine, FilterSpec, TypeFilter, department_options};
pub use selection::SelectionTracker;
pub use store::{ItemStore, LoadTicket, StoreEvent};
