//! Reusable HTML components for the HTMX + Tailwind UI
//!
//! Components are server-rendered HTML fragments that can be used in full
//! pages or as HTMX partial updates. All styling uses Tailwind CSS.

pub mod layout;
pub mod movie;

// Re-export main component functions
pub use layout::{card, input, nav_bar, page_header};
pub use movie::{
    detail_body, detail_error, detail_loading, detail_overlay, empty_results, error_banner,
    idle_prompt, movie_card, results_grid, skeleton_grid,
};
