//! LoreCrafter Engine library.
//!
//! Turns a free-text prompt into a validated short RPG narrative plus a set of
//! procedurally drawn pixel-art images.
//!
//! ## Structure
//!
//! - `use_cases/` - Narrative generation, asset synthesis, whole-game production
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures shared by unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
