//! Catalog source resolution.
//!
//! Where the menu comes from, highest priority first:
//! 1. an explicit `--catalog` path
//! 2. the `CAFE_MENU_CATALOG` environment variable
//! 3. `<config dir>/cafe-menu/catalog.json`, if present
//! 4. the built-in house menu
//!
//! Resolution is a pure function of its inputs; the effectful wrapper
//! reads the environment and the filesystem.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::catalog::{Catalog, CatalogError};

/// Environment variable naming a catalog file.
pub const CATALOG_ENV_VAR: &str = "CAFE_MENU_CATALOG";

/// Application directory under the platform config dir.
pub const APP_CONFIG_DIR: &str = "cafe-menu";

/// Catalog file name inside [`APP_CONFIG_DIR`].
pub const CATALOG_FILE_NAME: &str = "catalog.json";

// ============================================================================
// TYPES
// ============================================================================

/// Resolved origin of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// A JSON file on disk.
    File(PathBuf),
    /// The compiled-in house menu.
    Builtin,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "catalog file {}", path.display()),
            CatalogSource::Builtin => write!(f, "built-in menu"),
        }
    }
}

// ============================================================================
// PURE FUNCTIONS
// ============================================================================

/// Path of the per-user catalog file under `config_dir`.
pub fn default_catalog_path(config_dir: &Path) -> PathBuf {
    config_dir.join(APP_CONFIG_DIR).join(CATALOG_FILE_NAME)
}

/// Pick a catalog source from the available inputs.
///
/// `default_exists` is only consulted for the config-dir fallback; explicit
/// paths are returned as-is and fail later at load time if missing.
pub fn choose_catalog_source(
    flag: Option<&Path>,
    env_value: Option<&str>,
    config_dir: Option<&Path>,
    default_exists: impl Fn(&Path) -> bool,
) -> CatalogSource {
    if let Some(path) = flag {
        return CatalogSource::File(path.to_path_buf());
    }

    if let Some(value) = env_value.map(str::trim).filter(|v| !v.is_empty()) {
        return CatalogSource::File(PathBuf::from(value));
    }

    if let Some(dir) = config_dir {
        let candidate = default_catalog_path(dir);
        if default_exists(&candidate) {
            return CatalogSource::File(candidate);
        }
    }

    CatalogSource::Builtin
}

// ============================================================================
// EFFECT FUNCTIONS
// ============================================================================

/// Resolve the catalog source using the real environment and filesystem.
pub fn resolve_catalog_source(flag: Option<&Path>) -> CatalogSource {
    let env_value = env::var(CATALOG_ENV_VAR).ok();
    let config_dir = dirs::config_dir();

    let source = choose_catalog_source(
        flag,
        env_value.as_deref(),
        config_dir.as_deref(),
        |p| p.is_file(),
    );

    match (&source, flag, env_value.as_deref()) {
        (_, Some(_), _) => info!("Using {source} from --catalog"),
        (CatalogSource::File(_), None, Some(_)) => info!("Using {source} from {CATALOG_ENV_VAR}"),
        _ => info!("Using {source}"),
    }

    source
}

/// Build the catalog a source points at.
pub fn load_catalog(source: &CatalogSource) -> Result<Catalog, CatalogError> {
    match source {
        CatalogSource::File(path) => Catalog::load(path),
        CatalogSource::Builtin => Ok(Catalog::builtin()),
    }
}

// ============================================================================
// TESTS
// ============================================================================
