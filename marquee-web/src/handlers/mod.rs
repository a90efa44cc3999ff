//! HTTP request handlers organized by functionality

pub mod api;
pub mod htmx;

// Re-export handler functions
pub use api::{api_detail, api_search};
pub use htmx::{
    SearchInputForm, close_detail, detail_fragment, results_fragment, search_input, select_movie,
};
