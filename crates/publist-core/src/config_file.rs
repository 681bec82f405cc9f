use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub paths: Option<PathsConfig>,
    pub parsing: Option<ParsingSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    pub input: Option<String>,
    pub output_dir: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsingSection {
    pub fallback_year: Option<String>,
    pub body_window: Option<usize>,
}

/// Platform config directory path: `<config_dir>/publist/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("publist").join("config.toml"))
}

/// Load config by cascading CWD `.publist.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".publist.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    let base_paths = base.paths.unwrap_or_default();
    let overlay_paths = overlay.paths.unwrap_or_default();
    let base_parsing = base.parsing.unwrap_or_default();
    let overlay_parsing = overlay.parsing.unwrap_or_default();

    ConfigFile {
        paths: Some(PathsConfig {
            input: overlay_paths.input.or(base_paths.input),
            output_dir: overlay_paths.output_dir.or(base_paths.output_dir),
        }),
        parsing: Some(ParsingSection {
            fallback_year: overlay_parsing.fallback_year.or(base_parsing.fallback_year),
            body_window: overlay_parsing.body_window.or(base_parsing.body_window),
        }),
    }
}

impl ConfigFile {
    pub fn input(&self) -> Option<&str> {
        self.paths.as_ref().and_then(|p| p.input.as_deref())
    }

    pub fn output_dir(&self) -> Option<&str> {
        self.paths.as_ref().and_then(|p| p.output_dir.as_deref())
    }

    pub fn fallback_year(&self) -> Option<&str> {
        self.parsing.as_ref().and_then(|p| p.fallback_year.as_deref())
    }

    pub fn body_window(&self) -> Option<usize> {
        self.parsing.as_ref().and_then(|p| p.body_window)
    }
}
