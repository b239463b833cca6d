use crate::{
    errors::IoError,
    plan::ProjectPlan,
    preview::preview_as_tree,
    steps::{self, StepOutcome},
};
use colored::Colorize;
use hinagata::{ProjectSpec, RenderError};
use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum AssembleError {
    #[error("Project name is required")]
    #[diagnostic(code(hajime::assemble::missing_project_name))]
    MissingProjectName,

    #[error("I/O error within assemble domain")]
    #[diagnostic(code(hajime::assemble::io))]
    Io(#[from] IoError),

    #[error("Error occurred attempting to render template")]
    #[diagnostic(
        code(hajime::assemble::render),
        help("Bundled templates failed to render; please report this")
    )]
    Render(#[from] RenderError),
}

/// What happened during a scaffold run.
#[derive(Debug)]
pub struct Report {
    pub root: PathBuf,
    pub files_written: Vec<PathBuf>,
    pub git: StepOutcome,
    pub install: StepOutcome,
}

/// Creates `path` and any missing parents. An existing directory is left untouched.
fn create_directory(path: &Path) -> Result<(), AssembleError> {
    if path.is_dir() {
        log::debug!("directory exists: {}", path.display());

        return Ok(());
    }

    std::fs::create_dir_all(path).map_err(|error| IoError::mkdir(path, error))?;

    println!("{} {}", "create".blue(), path.display());

    Ok(())
}

/// Writes `contents` to `path`, replacing an existing file without asking.
fn write_file(path: &Path, contents: &str) -> Result<(), AssembleError> {
    let existed = path.exists();

    std::fs::write(path, contents).map_err(|error| IoError::write(path, error))?;

    let verb = if existed {
        "overwrite".yellow()
    } else {
        "create".green()
    };
    println!("{} {}", verb, path.display());

    Ok(())
}

/// Materializes `plan` under `root`: the root and every planned directory first, then files.
///
/// Returns the absolute paths written, in order.
pub fn apply_plan(plan: &ProjectPlan, root: &Path) -> Result<Vec<PathBuf>, AssembleError> {
    create_directory(root)?;

    for dir in &plan.directories {
        create_directory(&root.join(dir))?;
    }

    let mut written = Vec::with_capacity(plan.files.len());

    for file in &plan.files {
        let path = root.join(&file.path);

        write_file(&path, &file.content)?;

        written.push(path);
    }

    Ok(written)
}

/// Scaffolds the project described by `spec` into `root`.
///
/// Directory and file creation are fatal on failure. Repository initialization and dependency
/// installation are best-effort: their failures are logged and recorded in the [`Report`].
///
/// # Errors
///
/// Returns an [`AssembleError`] if:
///
/// - `spec.name` is blank (checked before anything touches the disk).
/// - A bundled template fails to render.
/// - A directory or file cannot be created or written to.
pub fn scaffold(spec: &ProjectSpec, root: &Path) -> Result<Report, AssembleError> {
    if spec.name.trim().is_empty() {
        return Err(AssembleError::MissingProjectName);
    }

    let plan = ProjectPlan::build(spec)?;

    preview_as_tree(&plan, root);

    let files_written = apply_plan(&plan, root)?;

    let git = if spec.features.init_git {
        println!("{}", "Initializing Git repository...".blue());

        let outcome = StepOutcome::from_result(steps::init_repository(root));
        if let StepOutcome::Failed(error) = &outcome {
            log::warn!("git initialization failed: {}", error);
        }
        outcome
    } else {
        StepOutcome::Skipped
    };

    let install = if spec.features.install_dependencies {
        println!("{}", "Installing dependencies...".blue());

        let outcome =
            StepOutcome::from_result(steps::install_dependencies(spec.package_manager, root));
        if let StepOutcome::Failed(error) = &outcome {
            log::warn!("dependency installation failed: {}", error);
        }
        outcome
    } else {
        StepOutcome::Skipped
    };

    Ok(Report {
        root: root.to_path_buf(),
        files_written,
        git,
        install,
    })
}
