//! Marquee Search - Movie catalog providers

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Implements the catalog provider seam from `marquee-core`: a real provider
//! backed by the OMDb API and a canned development provider for offline UI
//! work.

pub mod development;
pub mod omdb;

// Re-export main types
pub use development::DevelopmentProvider;
pub use omdb::OmdbProvider;
