//! Static asset URLs.
//!
//! Images are opaque files supplied next to the rendered page; the renderer
//! only builds their URLs.

/// Where images live unless configured otherwise.
pub const DEFAULT_ASSET_BASE: &str = "/images";

/// Join `file` onto `base`, percent-encoding each path segment of `file`.
///
/// ```rust
/// use novelus_site::assets::asset_url;
///
/// assert_eq!(asset_url("/images/", "Light Bulb.jpg"), "/images/Light%20Bulb.jpg");
/// ```
pub fn asset_url(base: &str, file: &str) -> String {
    let encoded = file
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");
    if base.is_empty() {
        encoded
    } else {
        format!("{}/{}", base.trim_end_matches('/'), encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_spaces() {
        assert_eq!(
            asset_url(DEFAULT_ASSET_BASE, "Code on Laptop Screen.jpg"),
            "/images/Code%20on%20Laptop%20Screen.jpg"
        );
    }

    #[test]
    fn keeps_nested_separators() {
        assert_eq!(
            asset_url("https://cdn.example.com/site", "team/Idea board.jpg"),
            "https://cdn.example.com/site/team/Idea%20board.jpg"
        );
    }

    #[test]
    fn empty_base_gives_relative_url() {
        assert_eq!(asset_url("", "Decision.jpg"), "Decision.jpg");
        assert_eq!(asset_url("/", "Decision.jpg"), "/Decision.jpg");
    }
}
