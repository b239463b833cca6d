use crate::errors::IoError;
use hinagata::PackageManager;
use miette::Diagnostic;
use serde::Deserialize;
use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Environment variable pointing at an explicit settings file.
pub const CONFIG_ENV: &str = "HAJIME_CONFIG";
/// Settings file looked up in the working directory when [`CONFIG_ENV`] is unset.
pub const CONFIG_FILE: &str = "hajime.toml";

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("I/O error within config domain")]
    #[diagnostic(code(hajime::config::io))]
    Io(#[from] IoError),

    #[error("Unable to parse settings file at '{}'", .path.display())]
    #[diagnostic(
        code(hajime::config::parse_toml),
        help("Only a [defaults] table is recognised, e.g. package_manager = \"pnpm\"")
    )]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Answers used when a question is left empty. `None` keeps the built-in default.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub typescript: Option<bool>,
    pub package_manager: Option<PackageManager>,
    pub readme: Option<bool>,
    pub examples: Option<bool>,
    pub install: Option<bool>,
    pub git: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub defaults: Defaults,
}
impl Settings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|error| IoError::read(path, error))?;

        toml::from_str(&content).map_err(|error| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source: error,
        })
    }

    /// Loads settings from `$HAJIME_CONFIG`, or `hajime.toml` inside `working_dir`.
    ///
    /// A missing `hajime.toml` is not an error and yields the built-in defaults. A path named
    /// explicitly through the environment must exist.
    pub fn discover(working_dir: &Path) -> Result<Self, ConfigError> {
        Self::locate(std::env::var_os(CONFIG_ENV), working_dir)
    }

    fn locate(explicit: Option<OsString>, working_dir: &Path) -> Result<Self, ConfigError> {
        if let Some(explicit) = explicit {
            log::debug!("loading settings from ${}", CONFIG_ENV);

            return Self::from_file(PathBuf::from(explicit));
        }

        let local = working_dir.join(CONFIG_FILE);

        if local.is_file() {
            log::debug!("loading settings from {}", local.display());

            Self::from_file(local)
        } else {
            Ok(Self::default())
        }
    }
}
