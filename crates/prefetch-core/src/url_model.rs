//! File name derivation from a download URL.

/// Last non-empty path segment of `url`, for use as a file name.
///
/// Returns `None` if the URL cannot be parsed or the path is empty/root.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed
        .path_segments()?
        .filter(|s| !s.is_empty())
        .last()?
        .to_string();
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment)
}
