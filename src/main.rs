use hajime::{cli, Preset};
use std::process::ExitCode;

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> ExitCode {
    let matches = cli::command(
        "hajime",
        "Scaffolds an Express project with auth, logging and error handling",
    )
    .get_matches();

    cli::run(&matches, Preset::Full, "Express Project Generator")
}
