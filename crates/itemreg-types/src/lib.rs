pub mod error;
pub mod item;
pub mod validation;
mod util;

pub use error::{Error, Result};
pub use item::{Item, ItemDraft, ItemId, ItemType};
pub use util::*;
pub use validation::{FieldError, validate_draft};
