use std::sync::LazyLock;

use regex::Regex;

/// Shown when a product has no image.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300x300?text=Sin+imagen";

static IMAGE_EXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(jpg|jpeg|png|gif|webp)$").expect("valid regex"));
static IMGUR_PAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"imgur\.com/(?:a/|gallery/)?([a-zA-Z0-9]+)(?:\.[a-z]+)?").expect("valid regex")
});

/// Rewrites Imgur page links into direct image links.
///
/// - `i.imgur.com` links get `.jpg` appended when they have no image extension.
/// - `imgur.com/{id}`, `imgur.com/a/{id}`, `imgur.com/gallery/{id}` become
///   `https://i.imgur.com/{id}.jpg`.
/// - Anything else is returned trimmed but otherwise untouched.
#[must_use]
pub fn normalize_imgur_url(url: &str) -> String {
    let url = url.trim();

    if !url.contains("imgur.com") {
        return url.to_string();
    }

    if url.contains("i.imgur.com") {
        if IMAGE_EXT_RE.is_match(url) {
            return url.to_string();
        }
        return format!("{url}.jpg");
    }

    match IMGUR_PAGE_RE.captures(url) {
        Some(caps) => format!("https://i.imgur.com/{}.jpg", &caps[1]),
        None => url.to_string(),
    }
}

/// Normalized image URL for a product card, or the placeholder when empty.
#[must_use]
pub fn image_or_placeholder(image_url: Option<&str>) -> String {
    match image_url.map(str::trim) {
        Some(url) if !url.is_empty() => normalize_imgur_url(url),
        _ => PLACEHOLDER_IMAGE_URL.to_string(),
    }
}
