pub mod client;
pub mod config;
pub mod error;
pub mod registry;
pub mod repository;

pub use client::HttpItemRepository;
pub use config::{ApiConfig, Config, ReportConfig, resolve_api_url, resolve_workspace_path};
pub use error::{Error, Result};
pub use registry::Registry;
pub use repository::ItemRepository;
