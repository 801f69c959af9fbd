// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stderr: CLI tools are expected to report failures on stderr.
// - exit: Calling `std::process::exit()` is standard for CLI apps to signal failure to the shell.
#![allow(clippy::print_stderr, clippy::exit)]

use clap::Parser;
use repo_validators_cli::cli::{self, Cli};
use repo_validators_cli::logging;

fn main() {
    let args = Cli::parse();

    if let Err(e) = logging::init_logging(args.verbose) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let stdout = std::io::stdout();
    match cli::run(&args, &mut stdout.lock()) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
