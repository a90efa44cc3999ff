//! Marquee Core - Debounced movie search coordination
//!
//! Provides the building blocks for the movie search workflow: input
//! debouncing, the search coordinator actor, the catalog provider seam,
//! and configuration management.

pub mod config;
pub mod coordinator;
pub mod debounce;
pub mod errors;
pub mod provider;
pub mod tracing_setup;
pub mod types;

// Re-export main types for convenient access
pub use config::MarqueeConfig;
pub use coordinator::{DetailPhase, SearchEngineHandle, SearchPhase, SearchSnapshot, spawn_search_engine};
pub use debounce::spawn_debouncer;
pub use errors::SearchError;
pub use provider::MovieProvider;
pub use types::{MovieDetails, MovieSummary};

/// Convenience type alias for Results with SearchError.
pub type Result<T> = std::result::Result<T, SearchError>;
