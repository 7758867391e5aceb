use crate::locale::Locale;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The on-disk content store.
///
/// Holds only the root directory; every lookup goes to the filesystem so edits
/// by content authors are visible on the next request.
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
}

/// Outcome of resolving a base filename for a locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub path: PathBuf,
    /// True when a localized variant was asked for but the baseline was used.
    pub fallback: bool,
}

impl ContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Pick the file to read for `base_filename` in `locale`.
    ///
    /// The baseline locale always maps to `root/base_filename`. Any other
    /// locale maps to the locale-qualified sibling (`faq.ru.json`) when that
    /// file exists, and to the baseline file otherwise.
    pub fn resolve(&self, base_filename: &str, locale: &Locale) -> Resolution {
        let baseline = self.root.join(base_filename);

        if locale.is_baseline() {
            return Resolution {
                path: baseline,
                fallback: false,
            };
        }

        if !locale.is_path_safe() {
            debug!(
                "Locale {:?} is not a filename segment, using baseline {}",
                locale.code(),
                base_filename
            );
            return Resolution {
                path: baseline,
                fallback: true,
            };
        }

        let candidate = self.root.join(locale.qualify_filename(base_filename));
        if candidate.is_file() {
            Resolution {
                path: candidate,
                fallback: false,
            }
        } else {
            debug!("No {} variant of {}, falling back to baseline", locale, base_filename);
            Resolution {
                path: baseline,
                fallback: true,
            }
        }
    }

    /// Same as [`resolve`](Self::resolve), keeping only the path.
    pub fn resolve_path(&self, base_filename: &str, locale: &Locale) -> PathBuf {
        self.resolve(base_filename, locale).path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    // ==================== Helper Functions ====================

    fn create_store(files: &[&str]) -> (ContentStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for name in files {
            std::fs::write(temp_dir.path().join(name), "[]").expect("Failed to write file");
        }
        (ContentStore::new(temp_dir.path()), temp_dir)
    }

    // ==================== Baseline Tests ====================

    #[test]
    fn test_baseline_maps_to_base_file() {
        let (store, temp_dir) = create_store(&["faq.json"]);

        let resolution = store.resolve("faq.json", &Locale::baseline());
        assert_eq!(resolution.path, temp_dir.path().join("faq.json"));
        assert!(!resolution.fallback);
    }

    #[test]
    fn test_baseline_resolves_even_when_missing() {
        let (store, temp_dir) = create_store(&[]);

        let resolution = store.resolve("faq.json", &Locale::baseline());
        assert_eq!(resolution.path, temp_dir.path().join("faq.json"));
        assert!(!resolution.fallback);
    }

    #[test]
    fn test_baseline_ignores_localized_siblings() {
        let (store, temp_dir) = create_store(&["faq.json", "faq.en.json"]);

        let path = store.resolve_path("faq.json", &Locale::baseline());
        assert_eq!(path, temp_dir.path().join("faq.json"));
    }

    // ==================== Localized Tests ====================

    #[test]
    fn test_existing_sibling_is_used() {
        let (store, temp_dir) = create_store(&["faq.json", "faq.ru.json"]);

        let resolution = store.resolve("faq.json", &Locale::from_code("ru"));
        assert_eq!(resolution.path, temp_dir.path().join("faq.ru.json"));
        assert!(!resolution.fallback);
    }

    #[test]
    fn test_missing_sibling_falls_back() {
        let (store, _temp_dir) = create_store(&["faq.json"]);

        let resolution = store.resolve("faq.json", &Locale::from_code("ru"));
        assert_eq!(resolution.path, store.resolve_path("faq.json", &Locale::baseline()));
        assert!(resolution.fallback);
    }

    #[test]
    fn test_directory_named_like_sibling_is_not_used() {
        let (store, temp_dir) = create_store(&["faq.json"]);
        std::fs::create_dir(temp_dir.path().join("faq.ru.json")).expect("Failed to create dir");

        let resolution = store.resolve("faq.json", &Locale::from_code("ru"));
        assert_eq!(resolution.path, temp_dir.path().join("faq.json"));
        assert!(resolution.fallback);
    }

    #[test]
    fn test_markdown_sibling() {
        let (store, temp_dir) = create_store(&["about.md", "about.ru.md"]);

        let path = store.resolve_path("about.md", &Locale::from_code("ru"));
        assert_eq!(path, temp_dir.path().join("about.ru.md"));
    }

    #[test]
    fn test_traversal_locale_uses_baseline() {
        let (store, temp_dir) = create_store(&["faq.json"]);

        let resolution = store.resolve("faq.json", &Locale::from_code("../faq"));
        assert_eq!(resolution.path, temp_dir.path().join("faq.json"));
        assert!(resolution.fallback);
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_without_siblings_every_locale_resolves_to_baseline(code in "\\PC{0,12}") {
            let (store, _temp_dir) = create_store(&["faq.json"]);
            let locale = Locale::from_code(&code);
            prop_assert_eq!(
                store.resolve_path("faq.json", &locale),
                store.resolve_path("faq.json", &Locale::baseline())
            );
        }

        #[test]
        fn prop_resolution_stays_inside_root(code in "\\PC{0,12}") {
            let (store, temp_dir) = create_store(&["faq.json", "faq.ru.json"]);
            let path = store.resolve_path("faq.json", &Locale::from_code(&code));
            prop_assert_eq!(path.parent(), Some(temp_dir.path()));
        }
    }
}
