use git2::{IndexAddOption, Oid, Repository, Signature};
use hinagata::PackageManager;
use miette::Diagnostic;
use std::{
    path::Path,
    process::{Command, ExitStatus},
};
use thiserror::Error;

const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

#[derive(Debug, Error, Diagnostic)]
pub enum StepError {
    #[error("git error: {0}")]
    #[diagnostic(code(hajime::steps::git))]
    Git(#[from] git2::Error),

    #[error("unable to run '{program}': {source}")]
    #[diagnostic(
        code(hajime::steps::spawn),
        help("Make sure {program} is installed and on your PATH")
    )]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}")]
    #[diagnostic(code(hajime::steps::exit_status))]
    ExitStatus { program: String, status: ExitStatus },
}

/// Result of a best-effort step; failures are reported, never propagated.
#[derive(Debug)]
pub enum StepOutcome {
    Skipped,
    Succeeded,
    Failed(StepError),
}
impl StepOutcome {
    pub fn from_result<T>(result: Result<T, StepError>) -> Self {
        match result {
            Ok(_) => Self::Succeeded,
            Err(error) => Self::Failed(error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// Initializes a repository in `directory`, stages everything not ignored and commits it.
///
/// Re-running on an existing repository adds a commit on top of `HEAD`.
pub fn init_repository(directory: &Path) -> Result<Oid, StepError> {
    let repo = Repository::init(directory)?;

    let mut index = repo.index()?;
    index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None)?;
    index.write()?;

    let tree_id = index.write_tree()?;
    let tree = repo.find_tree(tree_id)?;

    // fall back to a local identity when user.name/user.email are not configured
    let signature = match repo.signature() {
        Ok(signature) => signature,
        Err(error) => {
            log::debug!("no git identity configured ({}), using fallback", error);
            Signature::now("hajime", "hajime@localhost")?
        }
    };

    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<_> = parent.iter().collect();

    let oid = repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        INITIAL_COMMIT_MESSAGE,
        &tree,
        &parents,
    )?;

    log::debug!("created commit {} in {}", oid, directory.display());

    Ok(oid)
}

/// Runs `<package manager> install` in `directory`, inheriting stdio.
pub fn install_dependencies(manager: PackageManager, directory: &Path) -> Result<(), StepError> {
    run_program(manager.as_str(), &["install"], directory)
}

fn run_program(program: &str, args: &[&str], directory: &Path) -> Result<(), StepError> {
    log::debug!("running {} {:?} in {}", program, args, directory.display());

    let status = Command::new(program)
        .args(args)
        .current_dir(directory)
        .status()
        .map_err(|error| StepError::Spawn {
            program: program.to_string(),
            source: error,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(StepError::ExitStatus {
            program: program.to_string(),
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_init_repository_commits_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("package.json"), "{}\n").unwrap();
        fs::write(dir.path().join(".gitignore"), ".env\n").unwrap();
        fs::write(dir.path().join(".env"), "PORT=3000\n").unwrap();

        let oid = init_repository(dir.path()).unwrap();

        let repo = Repository::open(dir.path()).unwrap();
        let commit = repo.find_commit(oid).unwrap();
        let tree = commit.tree().unwrap();

        assert_eq!(commit.message(), Some(INITIAL_COMMIT_MESSAGE));
        assert!(tree.get_name("package.json").is_some());
        assert!(tree.get_name(".env").is_none());
    }

    #[test]
    fn test_init_repository_twice_stacks_commits() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.js"), "// one\n").unwrap();

        let first = init_repository(dir.path()).unwrap();
        fs::write(dir.path().join("index.js"), "// two\n").unwrap();
        let second = init_repository(dir.path()).unwrap();

        let repo = Repository::open(dir.path()).unwrap();
        let commit = repo.find_commit(second).unwrap();

        assert_eq!(commit.parent_id(0).unwrap(), first);
    }

    #[test]
    fn test_missing_program_is_reported_not_panicking() {
        let dir = tempfile::tempdir().unwrap();

        let result = run_program("hajime-no-such-program", &["install"], dir.path());

        assert!(matches!(result, Err(StepError::Spawn { .. })));
        assert!(!StepOutcome::from_result(result).is_success());
    }
}
