//! Path segment extraction.
//!
//! Small helpers for handlers that receive raw request paths such as
//! `/users/42/orders/7`: look up the segment following a literal segment.

/// Segment following the first `segment` element of `path`, trimmed of whitespace.
///
/// Returns `""` if `segment` does not occur, or only as the last element.
///
/// # Example
///
/// ```
/// use httpjson_core::path::retrieve_prefixed_path_string;
///
/// assert_eq!(retrieve_prefixed_path_string("/users/alice/orders", "users"), "alice");
/// assert_eq!(retrieve_prefixed_path_string("/users/alice/orders", "orders"), "");
/// ```
#[must_use]
pub fn retrieve_prefixed_path_string<'a>(path: &'a str, segment: &str) -> &'a str {
    path.split('/')
        .skip_while(|element| *element != segment)
        .nth(1)
        .map_or("", str::trim)
}

/// Segment following `segment`, parsed as an unsigned decimal integer.
///
/// Returns `0` when the segment is missing or does not parse.
///
/// # Example
///
/// ```
/// use httpjson_core::path::retrieve_prefixed_path_integer;
///
/// assert_eq!(retrieve_prefixed_path_integer("/users/42/orders/7", "orders"), 7);
/// assert_eq!(retrieve_prefixed_path_integer("/users/alice", "users"), 0);
/// ```
#[must_use]
pub fn retrieve_prefixed_path_integer(path: &str, segment: &str) -> u64 {
    let value = retrieve_prefixed_path_string(path, segment);
    if value.starts_with('+') {
        return 0;
    }
    value.parse().unwrap_or(0)
}
