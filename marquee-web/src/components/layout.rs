//! Layout components - headers, cards, navigation, form controls

/// Renders a page header with title and optional subtitle.
pub fn page_header(title: &str, subtitle: Option<&str>) -> String {
    let subtitle_html = subtitle
        .map(|s| format!(r#"<p class="text-gray-400 mt-2">{s}</p>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="mb-8">
            <h1 class="text-3xl font-bold text-white">{title}</h1>
            {subtitle_html}
        </div>"#
    )
}

/// Renders a card container with optional header.
///
/// Creates a styled container with consistent padding and borders for
/// grouping related content.
pub fn card(title: Option<&str>, content: &str) -> String {
    let header_html = title
        .map(|t| {
            format!(
                r#"<div class="flex items-center justify-between mb-6">
                <h3 class="text-lg font-semibold text-white">{t}</h3>
            </div>"#
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="bg-gray-800 border border-gray-700 rounded-lg p-6 mb-6">
            {header_html}
            {content}
        </div>"#
    )
}

/// Renders the main navigation bar.
pub fn nav_bar() -> String {
    r#"<nav class="bg-gray-800 border-b border-gray-700 sticky top-0 z-40">
        <div class="max-w-5xl mx-auto px-4">
            <div class="flex items-center justify-between h-16">
                <div class="text-2xl font-bold text-marquee-500">Marquee</div>
                <div class="flex items-center space-x-2 text-sm text-gray-400">
                    <div class="w-2 h-2 bg-green-400 rounded-full status-pulse"></div>
                    <span>Live</span>
                </div>
            </div>
        </div>
    </nav>"#
        .to_string()
}

/// Renders an input field with Tailwind styling.
///
/// Supports additional HTML attributes for HTMX triggers or validation.
pub fn input(name: &str, placeholder: &str, attributes: Option<&str>) -> String {
    let attrs = attributes.unwrap_or("");

    format!(
        r#"<input type="text" name="{name}" placeholder="{placeholder}" autocomplete="off"
                  class="w-full px-4 py-3 bg-gray-700 border border-gray-600 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-marquee-500 focus:border-transparent"
                  {attrs} />"#
    )
}
