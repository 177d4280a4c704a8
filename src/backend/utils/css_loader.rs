use std::collections::HashMap;
use std::sync::OnceLock;

static CSS_CACHE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

/// Stylesheets compiled into the binary, keyed by name.
pub struct CssLoader;

impl CssLoader {
    fn cache() -> &'static HashMap<&'static str, &'static str> {
        CSS_CACHE.get_or_init(|| {
            let styles: [(&'static str, &'static str); 3] = [
                (
                    "main",
                    include_str!(concat!(
                        env!("CARGO_MANIFEST_DIR"),
                        "/assets/styles/main.css"
                    )),
                ),
                (
                    "landing",
                    include_str!(concat!(
                        env!("CARGO_MANIFEST_DIR"),
                        "/assets/styles/landing.css"
                    )),
                ),
                (
                    "pages",
                    include_str!(concat!(
                        env!("CARGO_MANIFEST_DIR"),
                        "/assets/styles/pages.css"
                    )),
                ),
            ];
            styles.into_iter().collect()
        })
    }

    #[inline(always)]
    pub fn get(style_name: &str) -> Option<&'static str> {
        Self::cache().get(style_name).copied()
    }

    /// Joins the named sheets, skipping unknown names.
    pub fn combine(styles: &[&str]) -> String {
        styles
            .iter()
            .filter_map(|&name| Self::get(name))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn get_combined() -> String {
        Self::combine(&["main", "landing", "pages"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_sheets_are_embedded() {
        for name in ["main", "landing", "pages"] {
            assert!(CssLoader::get(name).is_some_and(|css| !css.is_empty()));
        }
        assert!(CssLoader::get("tailwind").is_none());
    }

    #[test]
    fn combine_skips_unknown_names() {
        let combined = CssLoader::combine(&["main", "missing"]);
        assert_eq!(combined, CssLoader::get("main").unwrap_or_default());
    }
}
