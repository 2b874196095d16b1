//! Finder controller: runs the core state machine, executing its effects
//! with tokio timers and catalog calls.
mod bridge;
mod controller;

pub use controller::SearchController;
