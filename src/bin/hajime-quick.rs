use hajime::{cli, Preset};
use std::process::ExitCode;

fn main() -> ExitCode {
    let matches = cli::command("hajime-quick", "Scaffolds a minimal Express project").get_matches();

    cli::run(&matches, Preset::Quick, "Express Quick Setup")
}
