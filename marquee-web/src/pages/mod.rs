//! Full page handlers using the component system
//!
//! Pages compose components into complete HTML responses. All pages use the
//! same base layout with HTMX and Tailwind CSS.

pub mod search;

// Re-export page handlers
pub use search::search_page;
