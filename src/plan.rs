use hinagata::{Language, Preset, ProjectSpec, RenderError, TemplateKey};
use std::path::{Path, PathBuf};

/// A file staged in memory before it is written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the project root.
    pub path: PathBuf,
    pub key: TemplateKey,
    pub content: String,
}

/// Everything a run will create, relative to the project root.
///
/// Directories are listed parents first and are always created before any file.
#[derive(Debug, Clone)]
pub struct ProjectPlan {
    pub directories: Vec<PathBuf>,
    pub files: Vec<FileEntry>,
}

/// Directories created before any file write.
pub fn directory_set(spec: &ProjectSpec) -> Vec<PathBuf> {
    let directories: &[&str] = match spec.preset {
        Preset::Full if spec.features.examples => &[
            "src",
            "src/config",
            "src/controllers",
            "src/middlewares",
            "src/routes",
            "src/utils",
            "src/models",
        ],
        Preset::Full => &[
            "src",
            "src/config",
            "src/controllers",
            "src/middlewares",
            "src/routes",
            "src/utils",
        ],
        Preset::Quick => &["src", "src/routes", "src/controllers", "src/models", "public"],
    };

    directories.iter().map(|dir| PathBuf::from(*dir)).collect()
}

/// Template keys to emit, in write order.
pub fn file_keys(spec: &ProjectSpec) -> Vec<TemplateKey> {
    let typescript = spec.language == Language::TypeScript;

    let mut keys = vec![TemplateKey::PackageManifest, TemplateKey::EntryPoint];

    match spec.preset {
        Preset::Full => {
            keys.push(TemplateKey::App);
            if typescript {
                keys.push(TemplateKey::CompilerConfig);
            }
            keys.extend([
                TemplateKey::WatchConfig,
                TemplateKey::DatabaseConfig,
                TemplateKey::AuthMiddleware,
                TemplateKey::ErrorHandler,
                TemplateKey::Logger,
                TemplateKey::HealthRoutes,
                TemplateKey::AuthRoutes,
            ]);
            if spec.features.examples {
                keys.push(TemplateKey::ExampleController);
                keys.push(TemplateKey::ExampleModel);
            }
            keys.push(TemplateKey::EnvFile);
            keys.push(TemplateKey::IgnoreFile);
            if spec.features.readme {
                keys.push(TemplateKey::Readme);
            }
        }
        Preset::Quick => {
            if typescript {
                keys.push(TemplateKey::CompilerConfig);
                keys.push(TemplateKey::WatchConfig);
            }
            keys.push(TemplateKey::EnvFile);
            keys.push(TemplateKey::IgnoreFile);
        }
    }

    keys
}

impl ProjectPlan {
    /// Renders every file for `spec` without touching the filesystem.
    pub fn build(spec: &ProjectSpec) -> Result<Self, RenderError> {
        let files = file_keys(spec)
            .into_iter()
            .map(|key| {
                Ok(FileEntry {
                    path: key.relative_path(spec.language),
                    key,
                    content: hinagata::render(key, spec)?,
                })
            })
            .collect::<Result<Vec<_>, RenderError>>()?;

        Ok(Self {
            directories: directory_set(spec),
            files,
        })
    }

    /// Whether `path` may receive a file: it sits at the root or inside a planned directory.
    pub fn covers(&self, path: &Path) -> bool {
        match path.parent() {
            None => true,
            Some(parent) if parent.as_os_str().is_empty() => true,
            Some(parent) => self.directories.iter().any(|dir| dir == parent),
        }
    }
}
