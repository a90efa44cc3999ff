//! Search page - debounced movie search with a detail modal

use axum::extract::State;
use axum::response::Html;

use crate::components::layout;
use crate::server::AppState;

/// Renders the movie search page.
///
/// The input posts every keystroke to the coordinator; the results region
/// and the detail modal poll fragment endpoints and render whatever state
/// the coordinator is in.
pub async fn search_page(State(_state): State<AppState>) -> Html<String> {
    let search_box = layout::card(
        None,
        &layout::input(
            "q",
            "Type something...",
            Some(
                r#"hx-post="/htmx/search/input"
                   hx-trigger="input changed"
                   hx-swap="none""#,
            ),
        ),
    );

    let results_region = r#"<div id="search-results"
               hx-get="/htmx/search/results"
               hx-trigger="load, every 300ms"
               hx-swap="innerHTML">
        </div>"#;

    let content = format!(
        r#"{header}

        {search_box}

        <div class="bg-gray-800 border border-gray-700 rounded-xl shadow-lg p-8">
            {results_region}
        </div>

        <div id="detail-modal"></div>"#,
        header = layout::page_header("Movie Search", Some("Find a title, then open its details")),
    );

    render_page("Search", &content)
}

/// Helper function to render a page with the base template
pub fn render_page(title: &str, content: &str) -> Html<String> {
    let html = format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <title>{title} - Marquee</title>
            <meta charset="utf-8">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <script src="https://cdn.tailwindcss.com"></script>
            <script src="https://unpkg.com/htmx.org@1.9.10"></script>
            <script>
                tailwind.config = {{
                    darkMode: 'class',
                    theme: {{
                        extend: {{
                            colors: {{
                                'marquee': {{
                                    50: '#eef2ff',
                                    400: '#7c9aff',
                                    500: '#5b7fff',
                                    600: '#4a6ce0',
                                    900: '#0b0b0b'
                                }}
                            }}
                        }}
                    }}
                }}
            </script>
            <style>
                .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
                .htmx-request .htmx-indicator {{ opacity: 1; }}

                @keyframes pulse-green {{
                    0%, 100% {{ opacity: 1; }}
                    50% {{ opacity: 0.5; }}
                }}
                .status-pulse {{ animation: pulse-green 2s infinite; }}
            </style>
        </head>
        <body class="bg-gray-900 text-white min-h-screen font-sans">
            {nav}

            <main class="max-w-5xl mx-auto px-4 py-8">
                {content}
            </main>
        </body>
        </html>"#,
        nav = crate::components::nav_bar(),
    );

    Html(html)
}
