//! Small helpers shared across crates

/// Normalize an image URL for display.
///
/// Legacy documents still carry plain-HTTP Cloudinary URLs which browsers
/// block on an HTTPS page, and a few seed records store bare relative
/// paths. Absolute URLs other than the known-bad Cloudinary host pass
/// through untouched.
pub fn secure_url(raw: &str, asset_base: &str) -> String {
    if let Some(rest) = raw.strip_prefix("http://res.cloudinary.com") {
        return format!("https://res.cloudinary.com{rest}");
    }
    if raw.starts_with("http://") || raw.starts_with("https://") {
        return raw.to_string();
    }
    format!(
        "{}/{}",
        asset_base.trim_end_matches('/'),
        raw.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://store.example.com";

    #[test]
    fn upgrades_legacy_cloudinary_urls() {
        assert_eq!(
            secure_url("http://res.cloudinary.com/demo/image/upload/v1/a.webp", BASE),
            "https://res.cloudinary.com/demo/image/upload/v1/a.webp"
        );
    }

    #[test]
    fn keeps_other_absolute_urls() {
        assert_eq!(secure_url("http://cdn.other.com/a.png", BASE), "http://cdn.other.com/a.png");
        assert_eq!(secure_url("https://cdn.other.com/a.png", BASE), "https://cdn.other.com/a.png");
    }

    #[test]
    fn joins_relative_paths_against_the_asset_base() {
        assert_eq!(secure_url("uploads/a.png", BASE), "https://store.example.com/uploads/a.png");
        assert_eq!(secure_url("/uploads/a.png", "https://store.example.com/"), "https://store.example.com/uploads/a.png");
    }
}
