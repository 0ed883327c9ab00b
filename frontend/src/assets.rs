use serde::Deserialize;
use crate::config;

/// Shown wherever an image is missing or fails to load.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 4 3'><rect width='4' height='3' fill='%23d8d4e8'/></svg>";

/// Path of a bundled static asset, relative to the asset base unless it is
/// already absolute.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(String);

impl AssetRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &str {
        &self.0
    }

    pub fn url(&self) -> String {
        resolve(config::get_asset_base(), &self.0)
    }
}

fn resolve(base: &str, path: &str) -> String {
    let path = path.trim();
    if path.is_empty() {
        return PLACEHOLDER_IMAGE.to_string();
    }
    let absolute = ["http://", "https://", "data:", "/"]
        .iter()
        .any(|prefix| path.starts_with(prefix));
    if absolute {
        return path.to_string();
    }
    let path = path.trim_start_matches("./").trim_start_matches("assets/");
    format!("{}/{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_join_the_base() {
        assert_eq!(resolve("/assets", "ceo.jpg"), "/assets/ceo.jpg");
        assert_eq!(resolve("/assets/", "./assets/cto.jpg"), "/assets/cto.jpg");
        assert_eq!(resolve("https://cdn.example.com/img", "team/cfo.jpg"), "https://cdn.example.com/img/team/cfo.jpg");
    }

    #[test]
    fn absolute_paths_pass_through() {
        assert_eq!(resolve("/assets", "/static/hero.jpg"), "/static/hero.jpg");
        assert_eq!(resolve("/assets", "https://example.com/a.png"), "https://example.com/a.png");
    }

    #[test]
    fn empty_path_is_placeholder() {
        assert_eq!(resolve("/assets", ""), PLACEHOLDER_IMAGE);
        assert_eq!(AssetRef::new("   ").url(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn deserializes_from_plain_string() {
        let asset: AssetRef = serde_json::from_str("\"hero-banner.jpg\"").unwrap();
        assert_eq!(asset.path(), "hero-banner.jpg");
    }
}
