use serde::Deserialize;
use std::{fmt, str::FromStr};

/// Source language of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    TypeScript,
    JavaScript,
}
impl Language {
    /// File extension used by every generated source file.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::TypeScript => "ts",
            Self::JavaScript => "js",
        }
    }

    pub fn is_typescript(&self) -> bool {
        matches!(self, Self::TypeScript)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
}
impl PackageManager {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }
}
impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a string does not name a supported package manager.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown package manager: '{0}'")]
pub struct UnknownPackageManager(pub String);

impl FromStr for PackageManager {
    type Err = UnknownPackageManager;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            "pnpm" => Ok(Self::Pnpm),
            _ => Err(UnknownPackageManager(value.to_string())),
        }
    }
}

/// Which scaffold flavour to produce.
///
/// `Full` lays out the layered `src/` tree with auth, logging and error handling.
/// `Quick` produces the minimal single-entry-point project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Full,
    Quick,
}
impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Quick => "quick",
        }
    }
}

/// Independent on/off choices collected from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    pub readme: bool,
    pub examples: bool,
    pub install_dependencies: bool,
    pub init_git: bool,
}
impl Features {
    /// The quick scaffold never emits extras nor runs follow-up steps.
    pub fn none() -> Self {
        Self {
            readme: false,
            examples: false,
            install_dependencies: false,
            init_git: false,
        }
    }
}

/// The resolved set of choices driving a single generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    pub name: String,
    pub language: Language,
    pub package_manager: PackageManager,
    pub preset: Preset,
    pub features: Features,
}
