use crate::{
    assemble::{self, Report},
    config::{self, Settings},
    preview,
    prompt::{self, Console},
};
use hinagata::Preset;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum HajimeError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Prompt(#[from] prompt::PromptError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Assemble(#[from] assemble::AssembleError),
}
impl HajimeError {
    /// Whether the user aborted the prompts rather than something going wrong.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Prompt(prompt::PromptError::Interrupted))
    }
}

/// Resolves the project directory for `name` inside `working_dir`.
///
/// Root and drive prefixes are dropped and `..` never climbs above `working_dir`, so the
/// result always lies beneath it. Returns `None` when nothing of the name is left.
pub fn project_root(working_dir: &Path, name: &str) -> Option<PathBuf> {
    let mut relative = PathBuf::new();

    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::ParentDir => {
                relative.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    if relative.as_os_str().is_empty() {
        None
    } else {
        Some(working_dir.join(relative))
    }
}

/// Asks the questions for `preset` through `console`, then scaffolds the project into
/// `working_dir/<project name>`.
///
/// # Errors
///
/// Returns a [`HajimeError`] if:
///
/// - The settings file exists but cannot be read or parsed.
/// - The project name is left empty, or the user cancels a prompt.
/// - A directory or file cannot be created or written to.
///
/// Failures of the git and install steps are not errors; see [`Report`].
pub fn create_project(
    console: &mut dyn Console,
    preset: Preset,
    working_dir: &Path,
) -> Result<Report, HajimeError> {
    let settings = Settings::discover(working_dir)?;

    let spec = prompt::collect(console, preset, &settings.defaults)?;

    let root = project_root(working_dir, &spec.name)
        .ok_or(prompt::PromptError::MissingProjectName)?;

    log::debug!("scaffolding {} project into {}", preset.as_str(), root.display());

    let report = assemble::scaffold(&spec, &root)?;

    preview::print_summary(&spec, &report.git, &report.install);

    Ok(report)
}
