//! Query parameter extraction with first-occurrence semantics.

/// Returns the value of the first occurrence of `param` in the URL's query
/// string, percent-decoded.
///
/// Repeated parameters follow first-wins semantics, matching how the
/// generator services themselves read the parameter. Returns `None` when the
/// parameter is absent; a bare `?name=` yields an empty string.
pub fn first_query_param(url: &url::Url, param: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key.as_ref() == param)
        .map(|(_, value)| value.into_owned())
}
