//! Library surface for the school registry console tool.
//!
//! The modules exposed here stay deliberately small so the binary target and
//! the integration tests drive the exact same persistence and menu code.

pub mod db;
pub mod menu;
pub mod models;

/// Persistence entry points used by `main.rs` to bring up the database and
/// reseed the fixed reference data.
pub use db::{open_default, seed_default_courses, seed_default_students};

/// The two domain types rows are hydrated into.
pub use models::{Course, Student};

/// The interactive menu loop and its command set.
pub use menu::{run_menu, MenuChoice};
