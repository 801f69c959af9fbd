//! Shared output formatting for configuration reports.
//!
//! Provides JSON and plain-text formatters for `ConfigReport`.
//! Color/terminal formatting belongs to the CLI layer.

use std::io::Write;

use crate::report::ConfigReport;

/// Format a `ConfigReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &ConfigReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `ConfigReport` as human-readable plain text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &ConfigReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  REPOSITORY CONFIGURATION CHECK")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;
    writeln!(writer, "  Repositories checked:  {}", report.checked)?;
    writeln!(writer, "  Repositories failed:   {}", report.failed)?;
    writeln!(writer, "  Errors found:          {}", report.errors_count())?;
    writeln!(writer)?;

    if !report.errors.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  REJECTED FIELDS")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for error in &report.errors {
            writeln!(writer, "{}", error.format_human_readable())?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "{}", "=".repeat(80))?;
    if report.ok {
        writeln!(
            writer,
            "\u{2713} All {} repositories passed validation",
            report.checked
        )?;
    } else {
        writeln!(
            writer,
            "\u{2717} {} of {} repositories have invalid fields",
            report.failed, report.checked
        )?;
        writeln!(writer)?;
        writeln!(writer, "  To fix:")?;

        let has_field = |field: &str| report.errors.iter().any(|e| e.field == field);
        if has_field("url") {
            writeln!(
                writer,
                "    - Repository URLs look like https://github.com/<owner>/<repo>"
            )?;
        }
        if has_field("subfolder") {
            writeln!(
                writer,
                "    - Subfolders are relative, without '.', '..' or empty segments"
            )?;
        }
        if has_field("name") || has_field("branch") {
            writeln!(writer, "    - Names and branches cannot contain spaces")?;
        }
        if has_field("homepage") {
            writeln!(writer, "    - Homepages must be public http(s) URLs")?;
        }
    }
    writeln!(writer, "{}", "=".repeat(80))?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::{RepositoryConfig, check_configs};
    use crate::source::RepositorySource;

    fn failing_report() -> ConfigReport {
        let mut config = RepositoryConfig::new(
            "docs",
            RepositorySource::GitLab,
            "https://gitlab.com/team/docs",
        );
        config.subfolder = Some("a//b".to_owned());
        check_configs(&[config])
    }

    #[test]
    fn test_write_human_ok() {
        let report = check_configs(&[]);
        let mut out = Vec::new();
        write_human(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("All 0 repositories passed"), "got: {text}");
        assert!(!text.contains("REJECTED FIELDS"));
    }

    #[test]
    fn test_write_human_lists_errors_and_hints() {
        let mut out = Vec::new();
        write_human(&failing_report(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("REJECTED FIELDS"));
        assert!(text.contains("docs.subfolder: Invalid subfolder path 'a//b'"), "got: {text}");
        assert!(text.contains("1 of 1 repositories have invalid fields"));
        assert!(text.contains("Subfolders are relative"));
        assert!(!text.contains("Repository URLs look like"));
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_json(&failing_report(), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["ok"], false);
        assert_eq!(value["checked"], 1);
        assert_eq!(value["errors"][0]["field"], "subfolder");
        assert_eq!(value["errors"][0]["value"], "a//b");
    }
}
