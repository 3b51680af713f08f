//! Testing infrastructure for itemreg integration tests.
//!
//! - `TestWorld`: isolated data directory and CLI invocation
//! - `fixtures`: sample items and drafts
//! - `fake`: in-memory `ItemRepository` with on-demand failures
//! - `assertions`: checks over JSON output and item lists

pub mod assertions;
pub mod fake;
pub mod fixtures;
pub mod world;

pub use fake::FakeRepository;
pub use world::TestWorld;
