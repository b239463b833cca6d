use crate::config::Defaults;
use colored::Colorize;
use hinagata::{Features, Language, PackageManager, Preset, ProjectSpec};
use inquire::{InquireError, Text};
use miette::Diagnostic;
use std::io::{self, BufRead, IsTerminal, Write};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum PromptError {
    #[error("Project name is required")]
    #[diagnostic(
        code(hajime::prompt::missing_project_name),
        help("Enter a name; it is also used as the directory to create")
    )]
    MissingProjectName,

    #[error("Setup cancelled by user")]
    #[diagnostic(code(hajime::prompt::interrupted))]
    Interrupted,

    #[error("Unable to read answer from the terminal")]
    #[diagnostic(code(hajime::prompt::inquire))]
    Inquire(#[source] InquireError),

    #[error("Unable to read answer from standard input")]
    #[diagnostic(code(hajime::prompt::io))]
    Io(#[from] io::Error),
}

/// The input/output capability questions are asked through.
///
/// `ask` returns the raw answer; defaulting and coercion happen in [`collect`], so every
/// implementation only has to move text around.
pub trait Console {
    fn ask(&mut self, message: &str, help: Option<&str>) -> Result<String, PromptError>;

    fn warn(&mut self, message: &str);
}

/// Interactive terminal prompts.
#[derive(Debug, Default)]
pub struct InquireConsole;

impl Console for InquireConsole {
    fn ask(&mut self, message: &str, help: Option<&str>) -> Result<String, PromptError> {
        let mut text = Text::new(message);
        if let Some(help) = help {
            text = text.with_help_message(help);
        }

        text.prompt().map_err(|error| match error {
            InquireError::OperationCanceled | InquireError::OperationInterrupted => {
                PromptError::Interrupted
            }
            other => PromptError::Inquire(other),
        })
    }

    fn warn(&mut self, message: &str) {
        println!("{}", message.red());
    }
}

/// Reads one answer per line. Used when stdin is not a terminal, e.g. piped answers.
///
/// End of input is treated as an empty answer so the question's default applies.
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}
impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn ask(&mut self, message: &str, _help: Option<&str>) -> Result<String, PromptError> {
        write!(self.writer, "{} ", message)?;
        self.writer.flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;

        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn warn(&mut self, message: &str) {
        // a broken writer only loses the warning
        let _ = writeln!(self.writer, "{}", message);
    }
}

/// Picks [`InquireConsole`] for an interactive terminal, otherwise a line reader over stdio.
pub fn terminal_console() -> Box<dyn Console> {
    if io::stdin().is_terminal() {
        Box::new(InquireConsole)
    } else {
        log::debug!("stdin is not a terminal, reading answers line by line");

        Box::new(LineConsole::new(io::stdin().lock(), io::stdout()))
    }
}

/// Lenient yes/no coercion.
///
/// An empty answer takes `default`. When the default is yes, anything other than `n`/`N`
/// counts as yes; when the default is no, only `y`/`Y` counts as yes.
pub fn coerce_yes_no(answer: &str, default: bool) -> bool {
    let answer = answer.trim();

    if answer.is_empty() {
        default
    } else if default {
        !answer.eq_ignore_ascii_case("n")
    } else {
        answer.eq_ignore_ascii_case("y")
    }
}

fn confirm(console: &mut dyn Console, message: &str, default: bool) -> Result<bool, PromptError> {
    let hint = if default { "(Y/n)" } else { "(y/N)" };

    let answer = console.ask(&format!("{} {}", message, hint), None)?;

    Ok(coerce_yes_no(&answer, default))
}

fn ask_package_manager(
    console: &mut dyn Console,
    default: PackageManager,
) -> Result<PackageManager, PromptError> {
    let answer = console.ask(
        &format!("Package manager (npm/yarn/pnpm) [{}]:", default),
        Some("Used for the install step and in the generated README"),
    )?;

    if answer.trim().is_empty() {
        return Ok(default);
    }

    match answer.parse::<PackageManager>() {
        Ok(manager) => Ok(manager),
        Err(error) => {
            log::warn!("{}", error);
            console.warn(&format!(
                "Invalid package manager '{}'! Using {} instead.",
                answer.trim(),
                default
            ));

            Ok(default)
        }
    }
}

/// Asks the question sequence for `preset` and resolves it into a [`ProjectSpec`].
///
/// # Errors
///
/// Returns [`PromptError::MissingProjectName`] when the first answer is blank, before any
/// further question is asked. Console failures and user cancellation are propagated.
pub fn collect(
    console: &mut dyn Console,
    preset: Preset,
    defaults: &Defaults,
) -> Result<ProjectSpec, PromptError> {
    let name = console.ask("Project name:", Some("Also used as the directory to create"))?;
    let name = name.trim();

    if name.is_empty() {
        return Err(PromptError::MissingProjectName);
    }

    let typescript_default = defaults.typescript.unwrap_or(preset == Preset::Full);
    let typescript = confirm(console, "Use TypeScript?", typescript_default)?;

    let package_manager =
        ask_package_manager(console, defaults.package_manager.unwrap_or_default())?;

    let features = match preset {
        Preset::Full => Features {
            readme: confirm(console, "Include README.md?", defaults.readme.unwrap_or(true))?,
            examples: confirm(
                console,
                "Include example controllers/models?",
                defaults.examples.unwrap_or(true),
            )?,
            install_dependencies: confirm(
                console,
                "Install dependencies automatically?",
                defaults.install.unwrap_or(true),
            )?,
            init_git: confirm(
                console,
                "Initialize Git repository?",
                defaults.git.unwrap_or(true),
            )?,
        },
        Preset::Quick => Features::none(),
    };

    let spec = ProjectSpec {
        name: name.to_string(),
        language: if typescript {
            Language::TypeScript
        } else {
            Language::JavaScript
        },
        package_manager,
        preset,
        features,
    };

    log::debug!("resolved project spec: {:?}", spec);

    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(
        input: &str,
        preset: Preset,
        defaults: &Defaults,
    ) -> (Result<ProjectSpec, PromptError>, String) {
        let mut console = LineConsole::new(Cursor::new(input.to_string()), Vec::new());

        let result = collect(&mut console, preset, defaults);

        let output = String::from_utf8(console.into_writer()).unwrap();

        (result, output)
    }

    #[test]
    fn test_coerce_yes_no() {
        assert!(coerce_yes_no("", true));
        assert!(!coerce_yes_no("", false));
        assert!(!coerce_yes_no("n", true));
        assert!(!coerce_yes_no("N", true));
        // anything but a literal "n" is affirmative
        assert!(coerce_yes_no("no", true));
        assert!(coerce_yes_no("maybe", true));
        assert!(coerce_yes_no("Y", false));
        assert!(!coerce_yes_no("yes", false));
    }

    #[test]
    fn test_full_preset_defaults() {
        let (spec, _) = run("shop\n\n\n\n\n\n\n", Preset::Full, &Defaults::default());
        let spec = spec.unwrap();

        assert_eq!(spec.name, "shop");
        assert_eq!(spec.language, Language::TypeScript);
        assert_eq!(spec.package_manager, PackageManager::Npm);
        assert_eq!(spec.preset, Preset::Full);
        assert!(spec.features.readme);
        assert!(spec.features.examples);
        assert!(spec.features.install_dependencies);
        assert!(spec.features.init_git);
    }

    #[test]
    fn test_full_preset_explicit_answers() {
        let (spec, _) = run("  shop  \nn\nYARN\nn\nn\nn\nn\n", Preset::Full, &Defaults::default());
        let spec = spec.unwrap();

        assert_eq!(spec.name, "shop");
        assert_eq!(spec.language, Language::JavaScript);
        assert_eq!(spec.package_manager, PackageManager::Yarn);
        assert_eq!(
            spec.features,
            Features {
                readme: false,
                examples: false,
                install_dependencies: false,
                init_git: false,
            }
        );
    }

    #[test]
    fn test_empty_name_is_fatal_before_other_questions() {
        let (spec, output) = run("   \ny\nnpm\n", Preset::Full, &Defaults::default());

        assert!(matches!(spec, Err(PromptError::MissingProjectName)));
        assert!(!output.contains("TypeScript"));
    }

    #[test]
    fn test_end_of_input_counts_as_empty_name() {
        let (spec, _) = run("", Preset::Quick, &Defaults::default());

        assert!(matches!(spec, Err(PromptError::MissingProjectName)));
    }

    #[test]
    fn test_unknown_package_manager_falls_back_with_warning() {
        let (spec, output) = run("shop\n\nbun\n", Preset::Quick, &Defaults::default());

        assert_eq!(spec.unwrap().package_manager, PackageManager::Npm);
        assert!(output.contains("Invalid package manager 'bun'! Using npm instead."));
    }

    #[test]
    fn test_quick_preset_defaults_to_javascript_without_extras() {
        let (spec, output) = run("tiny\n\n\n", Preset::Quick, &Defaults::default());
        let spec = spec.unwrap();

        assert_eq!(spec.language, Language::JavaScript);
        assert_eq!(spec.features, Features::none());
        assert!(output.contains("Use TypeScript? (y/N)"));
        assert!(!output.contains("README"));
    }

    #[test]
    fn test_settings_override_empty_answers() {
        let defaults = Defaults {
            typescript: Some(false),
            package_manager: Some(PackageManager::Pnpm),
            git: Some(false),
            ..Defaults::default()
        };

        let (spec, output) = run("shop\n\nbun\n\n\n\n\n", Preset::Full, &defaults);
        let spec = spec.unwrap();

        assert_eq!(spec.language, Language::JavaScript);
        assert_eq!(spec.package_manager, PackageManager::Pnpm);
        assert!(!spec.features.init_git);
        assert!(spec.features.readme);
        assert!(output.contains("Using pnpm instead."));
    }
}
