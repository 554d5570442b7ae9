/// Seed routing: reading the `id` query parameter and building book links.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves alone.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const SEED_PARAM: &str = "id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// No usable seed: show the library front page.
    Landing,
    Book(String),
}

impl Route {
    /// Route for a query string such as `?id=The%20Lost%20Codex`.
    ///
    /// The first `id` parameter wins and is used verbatim once decoded, so
    /// padded seeds keep their spaces. A missing, empty or undecodable value
    /// routes to the landing page.
    pub fn from_query(query: &str) -> Route {
        let query = query.strip_prefix('?').unwrap_or(query);
        let value = query
            .split('&')
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .find(|(key, _)| *key == SEED_PARAM)
            .map(|(_, value)| value);

        let Some(raw) = value else {
            return Route::Landing;
        };
        let spaced = raw.replace('+', " ");
        match percent_decode_str(&spaced).decode_utf8() {
            Ok(seed) if !seed.is_empty() => Route::Book(seed.into_owned()),
            Ok(_) => Route::Landing,
            Err(err) => {
                tracing::warn!(error = %err, "seed parameter is not valid UTF-8");
                Route::Landing
            }
        }
    }
}

/// Link to the viewer page for `seed`.
pub fn book_link(seed: &str) -> String {
    format!(
        "book.html?{SEED_PARAM}={}",
        utf8_percent_encode(seed, COMPONENT)
    )
}
