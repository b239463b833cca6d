use crate::{api, prompt};
use clap::{crate_authors, crate_version, Arg, ArgAction, ArgMatches, Command};
use colored::Colorize;
use hinagata::Preset;
use std::process::ExitCode;

/// Shared argument definition for both binaries. Project choices are never flags; they are
/// always asked for.
pub fn command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}

fn init_logger(is_verbose: bool) {
    let level = if is_verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn cancellation_notice() -> String {
    format!("\n{}", "Setup cancelled by user".yellow())
}

/// Exits cleanly on Ctrl-C at any point of the run, including while reading piped answers or
/// waiting on git and the package manager. Files already written are left in place.
fn install_interrupt_handler() {
    let installed = ctrlc::set_handler(|| {
        println!("{}", cancellation_notice());
        std::process::exit(0);
    });

    if let Err(error) = installed {
        log::warn!("unable to install interrupt handler: {}", error);
    }
}

/// Runs the interactive flow for `preset` in the current directory.
pub fn run(matches: &ArgMatches, preset: Preset, banner: &str) -> ExitCode {
    init_logger(matches.get_flag("verbose"));
    install_interrupt_handler();

    println!("{}", banner.bold().cyan());
    println!("{}\n", "=".repeat(banner.chars().count()).cyan());

    let working_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(error) => {
            eprintln!("{} {}", "unable to read current directory:".red(), error);
            return ExitCode::FAILURE;
        }
    };

    let mut console = prompt::terminal_console();

    match api::create_project(console.as_mut(), preset, &working_dir) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) if error.is_cancellation() => {
            println!("{}", cancellation_notice());
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{:?}", miette::Report::new(error));
            ExitCode::FAILURE
        }
    }
}
