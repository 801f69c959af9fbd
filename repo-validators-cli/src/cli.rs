use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use repo_validators::{
    ConfigReport, RepositorySource, ValidationError, check_configs, load_configs, output,
    validate_no_spaces, validate_repository_url, validate_subfolder_path, validate_url,
};
use tracing::{debug, info, warn};

#[derive(Debug, Parser)]
#[command(
    name = "repo-validate",
    version,
    about = "Validate repository URLs, web URLs, subfolder paths and repository configuration files"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` overrides it.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check a GitHub or GitLab repository URL
    RepoUrl {
        /// Hosting provider: github or gitlab
        #[arg(short, long)]
        source: String,
        url: String,
    },
    /// Check that a URL is a well-formed, non-local http(s) URL
    Url { url: String },
    /// Check that a value contains no spaces
    NoSpaces { value: String },
    /// Check that a path is a clean relative subfolder path
    Subfolder {
        /// Path inside the repository; an empty string means the root
        path: String,
    },
    /// Check repository configuration files (.json, .yaml, .yml)
    Config {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Run a parsed command, writing verdicts and reports to `out`.
///
/// Returns whether every input was valid.
///
/// # Errors
///
/// Returns an error if a configuration file cannot be loaded or output cannot
/// be written.
pub fn run(cli: &Cli, out: &mut dyn Write) -> anyhow::Result<bool> {
    match &cli.command {
        Command::RepoUrl { source, url } => {
            let verdict = source
                .parse::<RepositorySource>()
                .and_then(|source| validate_repository_url(source, url));
            if let Ok(parsed) = &verdict {
                debug!(
                    source = %parsed.source,
                    repository = %parsed.full_name(),
                    secure = parsed.secure,
                    www = parsed.www,
                    "repository URL accepted"
                );
                if !parsed.secure {
                    warn!(%url, "repository URL uses plain http");
                }
            }
            write_verdict(out, url, verdict.map(|_| ()))
        }
        Command::Url { url } => write_verdict(out, url, validate_url(url).map(|_| ())),
        Command::NoSpaces { value } => write_verdict(out, value, validate_no_spaces(value)),
        Command::Subfolder { path } => write_verdict(out, path, validate_subfolder_path(path)),
        Command::Config { files, json } => {
            let report = check_files(files)?;
            if *json {
                output::write_json(&report, out)?;
            } else {
                output::write_human(&report, out)?;
            }
            Ok(report.ok)
        }
    }
}

fn check_files(files: &[PathBuf]) -> anyhow::Result<ConfigReport> {
    info!(files = files.len(), "checking repository configuration files");
    let mut report = ConfigReport::default();
    for path in files {
        let configs = load_configs(path)?;
        let file_report = check_configs(&configs);
        info!(
            path = %path.display(),
            checked = file_report.checked,
            failed = file_report.failed,
            "checked configuration file"
        );
        report.merge(file_report);
    }
    Ok(report)
}

fn write_verdict(
    out: &mut dyn Write,
    input: &str,
    verdict: Result<(), ValidationError>,
) -> anyhow::Result<bool> {
    match verdict {
        Ok(()) => {
            writeln!(out, "{} '{input}' is valid", "\u{2713}".green())?;
            Ok(true)
        }
        Err(err) => {
            debug!(%err, "input rejected");
            writeln!(out, "{} {err}", "\u{2717}".red())?;
            Ok(false)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["repo-validate", "-vv", "url", "https://example.com"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_config_requires_files() {
        assert!(Cli::try_parse_from(["repo-validate", "config"]).is_err());
    }

    #[test]
    fn test_write_verdict() {
        let mut out = Vec::new();
        assert!(write_verdict(&mut out, "abc", Ok(())).unwrap());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("'abc' is valid"), "got: {text}");
    }
}
