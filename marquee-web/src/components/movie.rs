//! Movie components - result cards, skeletons, detail modal

use marquee_core::types::{MovieDetails, MovieSummary};

/// Renders the responsive grid of result cards, in result order.
pub fn results_grid(results: &[MovieSummary]) -> String {
    let cards: Vec<String> = results.iter().map(movie_card).collect();

    format!(
        r#"<div class="grid grid-cols-1 sm:grid-cols-3 md:grid-cols-5 gap-4">{}</div>"#,
        cards.join("")
    )
}

/// Renders a single result card with poster, title, year, and details button.
pub fn movie_card(movie: &MovieSummary) -> String {
    let poster_html = match &movie.poster_url {
        Some(url) => format!(
            r#"<img src="{url}" alt="{}" class="w-full h-48 object-cover rounded-xl mb-3" />"#,
            movie.title
        ),
        None => r#"<div class="w-full h-48 bg-gray-700 rounded-xl mb-3 flex items-center justify-center text-gray-500">No poster</div>"#
            .to_string(),
    };

    format!(
        r##"<div class="bg-gray-800 border border-gray-700 rounded-2xl shadow p-4 flex flex-col justify-between">
            {poster_html}
            <h2 class="text-lg text-center text-white font-semibold">{title}</h2>
            <h2 class="text-sm text-center text-gray-300 mb-4">{year}</h2>
            <button class="bg-marquee-500 hover:bg-marquee-600 text-white py-2 px-4 rounded-xl"
                    hx-post="/htmx/detail/select/{imdb_id}"
                    hx-target="#detail-modal"
                    hx-swap="innerHTML">
                View Details
            </button>
        </div>"##,
        title = movie.title,
        year = movie.year,
        imdb_id = movie.imdb_id,
    )
}

/// Renders the loading skeleton grid shown while a search is in flight.
pub fn skeleton_grid(count: usize) -> String {
    let cards: String = (0..count).map(|_| skeleton_card()).collect();

    format!(
        r#"<div class="grid grid-cols-1 sm:grid-cols-3 md:grid-cols-5 gap-4">{cards}</div>"#
    )
}

fn skeleton_card() -> String {
    r#"<div class="bg-gray-800 rounded-2xl p-4 animate-pulse">
        <div class="w-full h-48 bg-gray-700 rounded-xl mb-3"></div>
        <div class="h-4 bg-gray-700 rounded mb-2 w-3/4"></div>
        <div class="h-4 bg-gray-700 rounded w-1/2 mb-4"></div>
        <div class="h-10 bg-gray-700 rounded-xl"></div>
    </div>"#
        .to_string()
}

/// Renders the prompt shown before anything has been searched.
pub fn idle_prompt() -> String {
    r#"<div class="text-center py-12">
        <div class="text-6xl mb-4">&#127909;</div>
        <p class="text-gray-400 text-xl">Type something to search for movies</p>
    </div>"#
        .to_string()
}

/// Renders the message for a search that completed with no matches.
pub fn empty_results(query: &str) -> String {
    format!(
        r#"<div class="text-center py-12">
            <p class="text-white text-xl">No items found</p>
            <p class="text-gray-400 text-sm mt-2">Nothing matched "{query}"</p>
        </div>"#
    )
}

/// Renders an error banner for a failed search.
pub fn error_banner(reason: &str) -> String {
    format!(
        r#"<div class="bg-red-900 border border-red-700 rounded-lg p-4 text-center">
            <p class="text-white font-semibold">Search failed</p>
            <p class="text-red-200 text-sm mt-1">{reason}</p>
        </div>"#
    )
}

/// Renders the modal overlay opened by a selection.
///
/// The inner body polls the detail fragment endpoint so the loading message
/// is replaced once the fetch completes.
pub fn detail_overlay() -> String {
    r##"<div class="fixed inset-0 bg-black bg-opacity-60 flex items-center justify-center z-50">
        <div class="bg-gray-800 border border-gray-700 rounded-lg shadow-lg p-6 min-w-[300px] max-w-md mx-auto">
            <div id="detail-body"
                 hx-get="/htmx/detail/body"
                 hx-trigger="load, every 300ms"
                 hx-swap="innerHTML">
                <p class="text-white text-center">Loading...</p>
            </div>
            <div class="text-center mt-4">
                <button class="bg-gray-700 hover:bg-gray-600 text-white py-2 px-4 rounded-xl"
                        hx-post="/htmx/detail/close"
                        hx-target="#detail-modal"
                        hx-swap="innerHTML">
                    Close
                </button>
            </div>
        </div>
    </div>"##
        .to_string()
}

/// Renders the modal body while the detail fetch is in flight.
pub fn detail_loading() -> String {
    r#"<p class="text-white text-center">Loading...</p>"#.to_string()
}

/// Renders the modal body for fetched details.
pub fn detail_body(detail: &MovieDetails) -> String {
    let plot = detail.plot.as_deref().unwrap_or("No plot available.");
    let rating_html = detail
        .rating
        .map(|r| {
            format!(
                r#"<p class="text-sm"><span class="font-semibold">IMDb:</span> &#11088; {r}/10</p>"#
            )
        })
        .unwrap_or_default();
    let genre_html = detail
        .genre
        .as_deref()
        .map(|g| format!(r#"<p class="text-sm text-gray-300"><span class="font-semibold">Genre:</span> {g}</p>"#))
        .unwrap_or_default();
    let runtime_html = detail
        .runtime
        .as_deref()
        .map(|r| format!(r#"<p class="text-sm text-gray-300"><span class="font-semibold">Runtime:</span> {r}</p>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="space-y-3 text-white">
            <h2 class="text-2xl font-bold">{title}</h2>
            <p class="text-sm text-gray-300"><span class="font-semibold">Year:</span> {year}</p>
            {genre_html}
            {runtime_html}
            <div>
                <p class="font-semibold mb-1">About:</p>
                <p class="text-gray-400 text-sm leading-snug">{plot}</p>
            </div>
            {rating_html}
        </div>"#,
        title = detail.title,
        year = detail.year,
    )
}

/// Renders the modal body for a failed detail fetch.
pub fn detail_error(reason: &str) -> String {
    format!(
        r#"<div class="text-center">
            <p class="text-white font-semibold">Could not load details</p>
            <p class="text-red-200 text-sm mt-1">{reason}</p>
        </div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> MovieSummary {
        MovieSummary {
            imdb_id: "tt0133093".to_string(),
            title: "The Matrix".to_string(),
            year: "1999".to_string(),
            poster_url: Some("https://example.com/matrix.jpg".to_string()),
        }
    }

    #[test]
    fn movie_card_links_selection_to_its_id() {
        let html = movie_card(&sample_summary());
        assert!(html.contains("/htmx/detail/select/tt0133093"));
        assert!(html.contains("The Matrix"));
        assert!(html.contains("1999"));
    }

    #[test]
    fn missing_poster_renders_placeholder() {
        let mut summary = sample_summary();
        summary.poster_url = None;
        assert!(movie_card(&summary).contains("No poster"));
    }

    #[test]
    fn skeleton_grid_renders_requested_count() {
        let html = skeleton_grid(10);
        assert_eq!(html.matches("animate-pulse").count(), 10);
    }

    #[test]
    fn detail_body_omits_absent_fields() {
        let detail = MovieDetails {
            imdb_id: "tt0133093".to_string(),
            title: "The Matrix".to_string(),
            year: "1999".to_string(),
            plot: None,
            rating: None,
            genre: None,
            runtime: None,
            poster_url: None,
        };

        let html = detail_body(&detail);
        assert!(html.contains("No plot available."));
        assert!(!html.contains("IMDb:"));
        assert!(!html.contains("Genre:"));
    }
}
