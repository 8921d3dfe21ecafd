//! HTML links for resolution authors
//!
//! Co-author lists are stored as a comma-joined string of nation names.
//! Each name becomes a link to the nation's page.

use url::form_urlencoded;

/// Site that nation links point at
pub const NATION_BASE_URL: &str = "https://www.nationstates.net";

/// Split a comma-joined author list into trimmed, non-empty names
pub fn author_names(authors: &str) -> Vec<&str> {
    authors
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

/// Render `authors` as HTML links joined with `", "`.
///
/// ```
/// use wavotes::authors::render_author_links;
///
/// assert_eq!(render_author_links(""), "");
/// assert_eq!(
///     render_author_links("testlandia"),
///     r#"<a href="https://www.nationstates.net/nation=testlandia" target="_blank">testlandia</a>"#
/// );
/// ```
pub fn render_author_links(authors: &str) -> String {
    render_author_links_with_base(authors, NATION_BASE_URL)
}

/// Render `authors` as HTML links under a custom base URL.
pub fn render_author_links_with_base(authors: &str, base_url: &str) -> String {
    let base_url = base_url.trim_end_matches('/');

    author_names(authors)
        .into_iter()
        .map(|name| {
            let encoded: String = form_urlencoded::byte_serialize(name.as_bytes()).collect();
            format!(r#"<a href="{base_url}/nation={encoded}" target="_blank">{name}</a>"#)
        })
        .collect::<Vec<_>>()
        .join(", ")
}
