//! Template registry for generated Express projects.
//!
//! Every file a scaffold can produce is named by a [`TemplateKey`]. Rendering a key against a
//! [`ProjectSpec`] is pure: the same key and spec always yield the same bytes, and nothing here
//! touches the filesystem.
pub mod errors;
mod manifest;
pub mod spec;

pub use errors::RenderError;
pub use spec::{Features, Language, PackageManager, Preset, ProjectSpec, UnknownPackageManager};

use std::{fmt, path::PathBuf};
use tera::{Context, Tera};

/// Identity of a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKey {
    EntryPoint,
    App,
    DatabaseConfig,
    AuthMiddleware,
    ErrorHandler,
    Logger,
    AuthRoutes,
    HealthRoutes,
    ExampleController,
    ExampleModel,
    PackageManifest,
    EnvFile,
    IgnoreFile,
    CompilerConfig,
    WatchConfig,
    Readme,
}

/// Where the text of a key comes from.
enum Source {
    Tera(&'static str),
    Manifest,
}

impl TemplateKey {
    pub const ALL: [TemplateKey; 16] = [
        Self::EntryPoint,
        Self::App,
        Self::DatabaseConfig,
        Self::AuthMiddleware,
        Self::ErrorHandler,
        Self::Logger,
        Self::AuthRoutes,
        Self::HealthRoutes,
        Self::ExampleController,
        Self::ExampleModel,
        Self::PackageManifest,
        Self::EnvFile,
        Self::IgnoreFile,
        Self::CompilerConfig,
        Self::WatchConfig,
        Self::Readme,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::EntryPoint => "entry-point",
            Self::App => "app",
            Self::DatabaseConfig => "database-config",
            Self::AuthMiddleware => "auth-middleware",
            Self::ErrorHandler => "error-handler",
            Self::Logger => "logger",
            Self::AuthRoutes => "auth-routes",
            Self::HealthRoutes => "health-routes",
            Self::ExampleController => "example-controller",
            Self::ExampleModel => "example-model",
            Self::PackageManifest => "package-manifest",
            Self::EnvFile => "env-file",
            Self::IgnoreFile => "ignore-file",
            Self::CompilerConfig => "compiler-config",
            Self::WatchConfig => "watch-config",
            Self::Readme => "readme",
        }
    }

    /// Path of the generated file relative to the project root.
    pub fn relative_path(&self, language: Language) -> PathBuf {
        let ext = language.extension();

        match self {
            Self::EntryPoint => PathBuf::from(format!("index.{ext}")),
            Self::App => PathBuf::from(format!("src/app.{ext}")),
            Self::DatabaseConfig => PathBuf::from(format!("src/config/database.{ext}")),
            Self::AuthMiddleware => PathBuf::from(format!("src/middlewares/auth.{ext}")),
            Self::ErrorHandler => PathBuf::from(format!("src/middlewares/errorHandler.{ext}")),
            Self::Logger => PathBuf::from(format!("src/utils/logger.{ext}")),
            Self::AuthRoutes => PathBuf::from(format!("src/routes/auth.{ext}")),
            Self::HealthRoutes => PathBuf::from(format!("src/routes/index.{ext}")),
            Self::ExampleController => {
                PathBuf::from(format!("src/controllers/userController.{ext}"))
            }
            Self::ExampleModel => PathBuf::from(format!("src/models/User.{ext}")),
            Self::PackageManifest => PathBuf::from("package.json"),
            Self::EnvFile => PathBuf::from(".env"),
            Self::IgnoreFile => PathBuf::from(".gitignore"),
            Self::CompilerConfig => PathBuf::from("tsconfig.json"),
            Self::WatchConfig => PathBuf::from("nodemon.json"),
            Self::Readme => PathBuf::from("README.md"),
        }
    }

    fn source(&self, spec: &ProjectSpec) -> Source {
        use Language::{JavaScript as Js, TypeScript as Ts};

        let template = match (self, spec.language) {
            (Self::PackageManifest, _) => return Source::Manifest,

            (Self::EntryPoint, Ts) if spec.preset == Preset::Quick => {
                include_str!("../templates/ts/quick_index.ts.tera")
            }
            (Self::EntryPoint, Js) if spec.preset == Preset::Quick => {
                include_str!("../templates/js/quick_index.js.tera")
            }
            (Self::EntryPoint, Ts) => include_str!("../templates/ts/index.ts.tera"),
            (Self::EntryPoint, Js) => include_str!("../templates/js/index.js.tera"),
            (Self::App, Ts) => include_str!("../templates/ts/app.ts.tera"),
            (Self::App, Js) => include_str!("../templates/js/app.js.tera"),
            (Self::DatabaseConfig, Ts) => include_str!("../templates/ts/database.ts.tera"),
            (Self::DatabaseConfig, Js) => include_str!("../templates/js/database.js.tera"),
            (Self::AuthMiddleware, Ts) => include_str!("../templates/ts/auth_middleware.ts.tera"),
            (Self::AuthMiddleware, Js) => include_str!("../templates/js/auth_middleware.js.tera"),
            (Self::ErrorHandler, Ts) => include_str!("../templates/ts/error_handler.ts.tera"),
            (Self::ErrorHandler, Js) => include_str!("../templates/js/error_handler.js.tera"),
            (Self::Logger, Ts) => include_str!("../templates/ts/logger.ts.tera"),
            (Self::Logger, Js) => include_str!("../templates/js/logger.js.tera"),
            (Self::AuthRoutes, Ts) => include_str!("../templates/ts/auth_routes.ts.tera"),
            (Self::AuthRoutes, Js) => include_str!("../templates/js/auth_routes.js.tera"),
            (Self::HealthRoutes, Ts) => include_str!("../templates/ts/health_routes.ts.tera"),
            (Self::HealthRoutes, Js) => include_str!("../templates/js/health_routes.js.tera"),
            (Self::ExampleController, Ts) => {
                include_str!("../templates/ts/user_controller.ts.tera")
            }
            (Self::ExampleController, Js) => {
                include_str!("../templates/js/user_controller.js.tera")
            }
            (Self::ExampleModel, Ts) => include_str!("../templates/ts/user_model.ts.tera"),
            (Self::ExampleModel, Js) => include_str!("../templates/js/user_model.js.tera"),

            // shared between languages; variant switches live inside the templates
            (Self::EnvFile, _) => include_str!("../templates/common/env.tera"),
            (Self::IgnoreFile, _) => include_str!("../templates/common/gitignore.tera"),
            (Self::CompilerConfig, _) => include_str!("../templates/common/tsconfig.json.tera"),
            (Self::WatchConfig, _) => include_str!("../templates/common/nodemon.json.tera"),
            (Self::Readme, _) => include_str!("../templates/common/readme.md.tera"),
        };

        Source::Tera(template)
    }
}
impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Turns a project name into something usable as a database identifier,
/// e.g. `My API` -> `my_api_dev`.
fn database_name(project_name: &str) -> String {
    let mut name: String = project_name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    if name.is_empty() {
        name.push_str("app");
    }
    name.push_str("_dev");

    name
}

/// Builds the [`Context`] every text template is rendered with.
fn make_tera_context(spec: &ProjectSpec) -> Context {
    let mut ctx = Context::new();

    ctx.insert("project_name", &spec.name);
    ctx.insert("database_name", &database_name(&spec.name));
    ctx.insert("typescript", &spec.language.is_typescript());
    ctx.insert("ext", spec.language.extension());
    ctx.insert("package_manager", spec.package_manager.as_str());
    ctx.insert("preset", spec.preset.as_str());
    ctx.insert("examples", &spec.features.examples);

    ctx
}

/// Renders the file identified by `key` for the given `spec`.
///
/// # Errors
///
/// Returns a [`RenderError`] if a bundled template fails to render or the package manifest
/// cannot be serialized. Neither depends on user input, so every key is expected to render for
/// every spec.
pub fn render(key: TemplateKey, spec: &ProjectSpec) -> Result<String, RenderError> {
    match key.source(spec) {
        Source::Manifest => Ok(manifest::render(spec)?),
        Source::Tera(template) => {
            let ctx = make_tera_context(spec);

            Tera::one_off(template, &ctx, false)
                .map_err(|error| RenderError::Template { key, source: error })
        }
    }
}
