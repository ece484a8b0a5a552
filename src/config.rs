//! Tool configuration module.
//!
//! Handles loading, validating, and merging the `config.toml` placed at the
//! docs root. User files are sparse: values are merged on top of stock
//! defaults, and unknown keys are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! mode = "public"         # "public" (2-column table) or "private" (3-column)
//! homepage_text = "Home"  # label of the trailing homepage entry (public mode)
//! max_depth = 6           # maximum directory nesting depth
//! ```
//!
//! ## Well-Known Files
//!
//! Everything the tool reads and writes besides `config.toml` lives under
//! the `.vitepress/` directory of the docs root:
//!
//! ```text
//! docs/
//! ├── config.toml                      # sidegen config (optional)
//! └── .vitepress/
//!     ├── public_structure.csv         # structure table, public mode
//!     ├── private_structure.csv        # structure table, private mode
//!     └── sidebar.gen.json             # generated sidebar tree
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Directory under the docs root holding the structure table and the
/// generated sidebar.
pub const VITEPRESS_DIR: &str = ".vitepress";

/// File name of the generated sidebar tree.
pub const SIDEBAR_FILENAME: &str = "sidebar.gen.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Operating mode of the sidebar build.
///
/// The mode decides three things: how many columns the structure table must
/// have, which table file is read, and whether a root `index.md` surfaces as
/// the trailing homepage entry (public only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Public,
    Private,
}

impl Mode {
    /// Required column count of the structure table header.
    pub fn column_count(self) -> usize {
        match self {
            Mode::Public => 2,
            Mode::Private => 3,
        }
    }

    /// File name of the structure table for this mode, relative to
    /// `.vitepress/`.
    pub fn structure_filename(self) -> &'static str {
        match self {
            Mode::Public => "public_structure.csv",
            Mode::Private => "private_structure.csv",
        }
    }

    /// Header row written by the scanner for this mode.
    pub fn table_header(self) -> &'static str {
        match self {
            Mode::Public => "_type,_path",
            Mode::Private => "_type,_path,_scopes",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Public => write!(f, "public"),
            Mode::Private => write!(f, "private"),
        }
    }
}

/// Sidebar build configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SidebarConfig {
    /// Operating mode; selects table location, column count, and homepage
    /// handling.
    pub mode: Mode,
    /// Label of the synthetic homepage entry appended to the end of the
    /// sidebar in public mode.
    pub homepage_text: String,
    /// Maximum directory nesting depth. A `dir` row deeper than this aborts
    /// the build.
    pub max_depth: usize,
}

fn default_homepage_text() -> String {
    "Home".to_string()
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            homepage_text: default_homepage_text(),
            max_depth: 6,
        }
    }
}

impl SidebarConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Validation(
                "max_depth must be at least 1".into(),
            ));
        }
        if self.homepage_text.trim().is_empty() {
            return Err(ConfigError::Validation(
                "homepage_text must not be blank".into(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SidebarConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SidebarConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SidebarConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the docs root.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SidebarConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# sidegen Configuration
# =====================
#
# Place this file at the docs root (next to .vitepress/). Every key is
# optional; the values below are the stock defaults.

# Operating mode.
#
#   "public"  — the structure table has 2 columns (_type,_path) and a root
#               index.md becomes a trailing homepage entry in the sidebar.
#   "private" — the structure table has 3 columns (_type,_path,_scopes) and
#               a root index.md is never surfaced.
#
# The table is read from .vitepress/public_structure.csv or
# .vitepress/private_structure.csv accordingly.
mode = "public"

# Label of the homepage entry appended to the end of the sidebar in public
# mode. Only used when the structure table contains a root-level index.md.
homepage_text = "Home"

# Maximum directory nesting depth. A dir row deeper than this aborts the
# build with an error instead of producing a silently truncated tree.
max_depth = 6
"##
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_public_mode() {
        let config = SidebarConfig::default();
        assert_eq!(config.mode, Mode::Public);
        assert_eq!(config.homepage_text, "Home");
        assert_eq!(config.max_depth, 6);
    }

    #[test]
    fn sparse_overlay_keeps_other_defaults() {
        let overlay: toml::Value = toml::from_str(r#"mode = "private""#).unwrap();
        let config = resolve_config(stock_defaults_value(), Some(overlay)).unwrap();
        assert_eq!(config.mode, Mode::Private);
        assert_eq!(config.max_depth, 6);
    }

    #[test]
    fn unknown_keys_rejected() {
        let overlay: toml::Value = toml::from_str("homepage_txt = \"oops\"").unwrap();
        let result = resolve_config(stock_defaults_value(), Some(overlay));
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn zero_max_depth_rejected() {
        let overlay: toml::Value = toml::from_str("max_depth = 0").unwrap();
        let result = resolve_config(stock_defaults_value(), Some(overlay));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn blank_homepage_text_rejected() {
        let overlay: toml::Value = toml::from_str(r#"homepage_text = "  ""#).unwrap();
        let result = resolve_config(stock_defaults_value(), Some(overlay));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn stock_config_toml_round_trips() {
        let value: toml::Value = toml::from_str(stock_config_toml()).unwrap();
        let config = resolve_config(stock_defaults_value(), Some(value)).unwrap();
        assert_eq!(config.mode, Mode::Public);
        assert_eq!(config.max_depth, 6);
    }

    #[test]
    fn mode_selects_table_shape() {
        assert_eq!(Mode::Public.column_count(), 2);
        assert_eq!(Mode::Private.column_count(), 3);
        assert_eq!(Mode::Public.structure_filename(), "public_structure.csv");
        assert_eq!(Mode::Private.structure_filename(), "private_structure.csv");
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.mode, Mode::Public);
    }

    #[test]
    fn config_file_loaded_from_root() {
        let tmp = tempfile::TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "mode = \"private\"\nmax_depth = 3\n",
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.mode, Mode::Private);
        assert_eq!(config.max_depth, 3);
    }
}
