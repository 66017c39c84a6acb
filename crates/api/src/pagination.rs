//! `X-Total-Count` and `Link` headers for paginated listings.

use axum::http::header::{HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue, LINK};
use salesboard_core::pagination::Page;

pub const TOTAL_COUNT: HeaderName = HeaderName::from_static("x-total-count");

/// Build the pagination headers for `page`, with links relative to `base_url`.
///
/// The `Link` header always contains `last` and `first`; `next` and `prev`
/// are present only when such a page exists.
pub fn pagination_headers<T>(
    page: &Page<T>,
    base_url: &str,
) -> Result<HeaderMap, InvalidHeaderValue> {
    let mut headers = HeaderMap::new();
    headers.insert(TOTAL_COUNT, HeaderValue::from(page.total));
    headers.insert(LINK, HeaderValue::try_from(link_header(page, base_url))?);
    Ok(headers)
}

fn link_header<T>(page: &Page<T>, base_url: &str) -> String {
    let link = |index: i64, rel: &str| {
        format!(
            "<{base_url}?page={index}&size={size}>; rel=\"{rel}\"",
            size = page.size
        )
    };

    let mut links = Vec::with_capacity(4);
    if page.has_next() {
        links.push(link(page.page + 1, "next"));
    }
    if page.has_previous() {
        links.push(link(page.page - 1, "prev"));
    }
    let last_page = (page.total_pages() - 1).max(0);
    links.push(link(last_page, "last"));
    links.push(link(0, "first"));
    links.join(",")
}
