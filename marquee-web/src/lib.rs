//! Marquee Web - HTMX + Tailwind UI and JSON API

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Serves the movie search page, HTMX partial-update fragments driven by the
//! search coordinator, and JSON API endpoints for external clients.

pub mod components;
pub mod handlers;
pub mod pages;
pub mod server;

// Re-export main types
pub use server::{AppState, run_server};
