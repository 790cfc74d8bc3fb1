//! File extension resolution from the response Content-Type or the URL path.

/// Extension used when neither the Content-Type nor the URL yields one.
pub const FALLBACK_EXTENSION: &str = "bin";

/// Image media types we recognize, with the extension saved files get.
const CONTENT_TYPE_EXTENSIONS: [(&str, &str); 7] = [
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
    ("image/avif", "avif"),
    ("image/bmp", "bmp"),
    ("image/tiff", "tiff"),
];

/// Maps a Content-Type header value to an extension.
///
/// Parameters after `;` are ignored and the media type is matched case-insensitively.
pub fn extension_for_content_type(content_type: &str) -> Option<&'static str> {
    let media_type = content_type.split(';').next().unwrap_or("").trim();
    CONTENT_TYPE_EXTENSIONS
        .iter()
        .find(|(mt, _)| mt.eq_ignore_ascii_case(media_type))
        .map(|(_, ext)| *ext)
}

/// Suffix of the last URL path segment, without query string or fragment.
///
/// Dotfiles and trailing dots yield nothing, as do suffixes with characters
/// other than ASCII alphanumerics (the result lands in a filename).
pub fn extension_from_url(url: &str) -> Option<String> {
    let path = match url::Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.split(['?', '#']).next().unwrap_or("").to_string(),
    };
    let name = path.rsplit('/').next()?;
    let dot = name.rfind('.')?;
    if dot == 0 || dot + 1 == name.len() {
        return None;
    }
    let ext = &name[dot + 1..];
    if !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_string())
}

/// Content-Type first, then the URL path, then [`FALLBACK_EXTENSION`].
pub fn resolve_extension(content_type: Option<&str>, url: &str) -> String {
    content_type
        .and_then(extension_for_content_type)
        .map(str::to_string)
        .or_else(|| extension_from_url(url))
        .unwrap_or_else(|| FALLBACK_EXTENSION.to_string())
}
