//! URL scheme normalization.
//!
//! Guarantees that every stored long URL carries an explicit scheme so the
//! redirect endpoint always emits an absolute `Location`.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Prefix prepended to input without a recognised scheme.
pub const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Bytes escaped when a stored URL is written into a `Location` header.
///
/// Reserved characters and existing `%XX` escapes pass through untouched.
const LOCATION_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Recognised schemes, anchored at the start and case-sensitive.
static SCHEME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(http|https|ftp)://").expect("scheme regex is valid"));

/// Normalizes a submitted long URL.
///
/// Input that already starts with `http://`, `https://` or `ftp://` is returned
/// unchanged; anything else (including the empty string) gets `http://` prepended.
/// The match is case-sensitive, so `HTTP://x` becomes `http://HTTP://x`.
///
/// # Examples
///
/// ```
/// use shortlink::utils::url_normalizer::normalize_url;
///
/// assert_eq!(normalize_url("example.com"), "http://example.com");
/// assert_eq!(normalize_url("https://foo.com"), "https://foo.com");
/// ```
pub fn normalize_url(input: &str) -> String {
    if has_scheme(input) {
        input.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{input}")
    }
}

/// Returns true if `input` starts with a recognised scheme.
pub fn has_scheme(input: &str) -> bool {
    SCHEME_PREFIX.is_match(input)
}

/// Percent-encodes a stored long URL so it is a valid `Location` header value.
///
/// Control characters, spaces, non-ASCII text and the few delimiters that are not
/// allowed in a URL are escaped as UTF-8 `%XX` sequences; everything else is kept.
///
/// # Examples
///
/// ```
/// use shortlink::utils::url_normalizer::encode_location;
///
/// assert_eq!(encode_location("http://example.com/a b"), "http://example.com/a%20b");
/// assert_eq!(encode_location("http://example.com/?q=1"), "http://example.com/?q=1");
/// ```
pub fn encode_location(url: &str) -> Cow<'_, str> {
    utf8_percent_encode(url, LOCATION_ESCAPE).into()
}
