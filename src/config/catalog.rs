//! Discovery of bundled camera configuration documents

use super::cam::CamConfig;
use super::settings::Settings;
use crate::error::ConfigLoadError;
use crate::utils::normalize_path;
use globset::{GlobBuilder, GlobMatcher};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const DOCUMENT_GLOB: &str = "**/*.json";

static BUNDLED: Lazy<ConfigCatalog> = Lazy::new(|| ConfigCatalog::scan(Settings::load().config_dir));

/// Named camera configs found under a root directory.
///
/// Names are file stems. When two documents share a stem, the first one in
/// sorted walk order is kept.
#[derive(Debug, Clone, Default)]
pub struct ConfigCatalog {
    root: PathBuf,
    entries: BTreeMap<String, PathBuf>,
}

impl ConfigCatalog {
    /// Catalog of the configs shipped with the program, scanned once per process.
    pub fn bundled() -> &'static ConfigCatalog {
        &BUNDLED
    }

    /// Recursively scan `root` for `.json` documents.
    ///
    /// A missing or unreadable root yields an empty catalog.
    pub fn scan(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let matcher = document_matcher();
        let mut entries = BTreeMap::new();

        if !root.is_dir() {
            tracing::warn!("Config directory not found: {}", root.display());
            return Self { root, entries };
        }

        let walker = WalkDir::new(&root).sort_by_file_name().into_iter();
        for entry in walker.filter_map(Result::ok) {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let Ok(rel) = path.strip_prefix(&root) else {
                continue;
            };
            if !matcher.is_match(normalize_path(rel.to_string_lossy().as_ref())) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Some(existing) = entries.get(stem) {
                tracing::warn!(
                    "Duplicate config name '{}': keeping {}, ignoring {}",
                    stem,
                    existing.display(),
                    path.display()
                );
                continue;
            }
            entries.insert(stem.to_string(), path.to_path_buf());
        }

        tracing::debug!(root = %root.display(), count = entries.len(), "scanned config catalog");
        Self { root, entries }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Sorted names of every discovered config.
    pub fn list_names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Location of the config called `name`, or `None` if there is no such config.
    pub fn resolve(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    /// Resolve `name` and load it.
    pub fn load(&self, name: &str) -> Result<CamConfig, ConfigLoadError> {
        let path = self.resolve(name).ok_or_else(|| ConfigLoadError::UnknownName {
            name: name.to_string(),
            available: self.list_names(),
        })?;
        CamConfig::load(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries.iter().map(|(name, path)| (name.as_str(), path.as_path()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn document_matcher() -> GlobMatcher {
    GlobBuilder::new(DOCUMENT_GLOB)
        .literal_separator(false)
        .build()
        .expect("valid document glob")
        .compile_matcher()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const VALID: &str =
        r#"{"socket_to_name": {"CAM_B": "right"}, "inverted": false, "fisheye": true, "mono": false}"#;

    fn fixture() -> TempDir {
        let tmp = TempDir::new().expect("tmp");
        fs::create_dir_all(tmp.path().join("nested/deeper")).expect("mkdir");
        fs::write(tmp.path().join("beta.json"), VALID).expect("write");
        fs::write(tmp.path().join("alpha.json"), VALID).expect("write");
        fs::write(tmp.path().join("nested/gamma.json"), VALID).expect("write");
        fs::write(tmp.path().join("nested/upper.JSON"), VALID).expect("write");
        fs::write(tmp.path().join("nested/deeper/delta.json"), VALID).expect("write");
        fs::write(tmp.path().join("notes.txt"), "not a config").expect("write");
        fs::write(tmp.path().join("nested/readme.md"), "# docs").expect("write");
        tmp
    }

    #[test]
    fn test_list_names_is_sorted_and_recursive() {
        let tmp = fixture();
        let catalog = ConfigCatalog::scan(tmp.path());
        assert_eq!(catalog.list_names(), vec!["alpha", "beta", "delta", "gamma"]);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_list_names_is_idempotent() {
        let tmp = fixture();
        let catalog = ConfigCatalog::scan(tmp.path());
        assert_eq!(catalog.list_names(), catalog.list_names());

        let rescanned = ConfigCatalog::scan(tmp.path());
        assert_eq!(catalog.list_names(), rescanned.list_names());
    }

    #[test]
    fn test_resolve_known_names_load() {
        let tmp = fixture();
        let catalog = ConfigCatalog::scan(tmp.path());
        for name in catalog.list_names() {
            let path = catalog.resolve(&name).expect("resolvable");
            let cfg = CamConfig::load(path).expect("loadable");
            assert!(cfg.fisheye);
        }
        assert_eq!(
            catalog.resolve("delta"),
            Some(tmp.path().join("nested/deeper/delta.json").as_path())
        );
    }

    #[test]
    fn test_resolve_unknown_is_none() {
        let tmp = fixture();
        let catalog = ConfigCatalog::scan(tmp.path());
        assert!(catalog.resolve("nonexistent").is_none());
        assert!(catalog.resolve("notes").is_none());
        assert!(catalog.resolve("upper").is_none(), "extension match is case-sensitive");
    }

    #[test]
    fn test_load_unknown_name_errors() {
        let tmp = fixture();
        let catalog = ConfigCatalog::scan(tmp.path());
        match catalog.load("nonexistent") {
            Err(ConfigLoadError::UnknownName { name, available }) => {
                assert_eq!(name, "nonexistent");
                assert_eq!(available, catalog.list_names());
            }
            other => panic!("expected UnknownName, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_stem_keeps_first_in_walk_order() {
        let tmp = TempDir::new().expect("tmp");
        fs::create_dir_all(tmp.path().join("b")).expect("mkdir");
        fs::create_dir_all(tmp.path().join("a")).expect("mkdir");
        fs::write(tmp.path().join("b/cam.json"), VALID).expect("write");
        fs::write(tmp.path().join("a/cam.json"), VALID).expect("write");

        let catalog = ConfigCatalog::scan(tmp.path());
        assert_eq!(catalog.list_names(), vec!["cam"]);
        assert_eq!(catalog.resolve("cam"), Some(tmp.path().join("a/cam.json").as_path()));
    }

    #[test]
    fn test_missing_root_is_empty() {
        let tmp = TempDir::new().expect("tmp");
        let catalog = ConfigCatalog::scan(tmp.path().join("missing"));
        assert!(catalog.is_empty());
        assert!(catalog.list_names().is_empty());
    }

    #[test]
    fn test_bundled_configs_all_load() {
        let catalog = ConfigCatalog::bundled();
        assert!(!catalog.is_empty(), "bundled config_files should not be empty");
        for (name, path) in catalog.iter() {
            CamConfig::load(path).unwrap_or_else(|e| panic!("bundled config {name} failed: {e}"));
        }
        assert!(std::ptr::eq(catalog, ConfigCatalog::bundled()));
    }
}
