//! Pure formatting functions for UI output.
//!
//! Line builders return strings so they can be tested; the `display_*`
//! functions print them.

use console::style;

use crate::batch::{BatchReport, FileOutcome};
use crate::domain::Phase;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a warning message in yellow.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), message);
}

/// Status line for one processed item.
///
/// `package.json : 1.3.0` for files, just the version for an inline validate.
pub fn outcome_line(outcome: &FileOutcome) -> String {
    let label = outcome
        .source
        .as_ref()
        .map(|p| format!("{} : ", p.display()));

    match &outcome.result {
        Ok(version) => format!(
            "{}{}",
            label.unwrap_or_default(),
            style(version).green()
        ),
        Err(e) => format!("{}{}", label.unwrap_or_default(), e),
    }
}

/// One line summarizing a finished batch
pub fn summary_line(phase: Phase, report: &BatchReport) -> String {
    let ok = report.succeeded().count();
    let failed = report.failed().count();
    if failed == 0 {
        format!("{}: {} item(s) ok", phase, ok)
    } else {
        format!("{}: {} item(s) ok, {} failed", phase, ok, failed)
    }
}

/// Print one status line per item, then a summary.
///
/// Successful items go to stdout, failures are printed as warnings.
pub fn display_report(phase: Phase, report: &BatchReport) {
    for outcome in &report.outcomes {
        let line = outcome_line(outcome);
        if outcome.is_ok() {
            println!("{}", line);
        } else {
            display_warning(&line);
        }
    }

    let summary = summary_line(phase, report);
    if report.has_failures() {
        display_warning(&summary);
    } else {
        display_success(&summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ManifestSemverError;
    use std::path::PathBuf;

    fn ok(src: Option<&str>, version: &str) -> FileOutcome {
        FileOutcome {
            source: src.map(PathBuf::from),
            destination: src.map(PathBuf::from),
            result: Ok(version.to_string()),
        }
    }

    #[test]
    fn test_outcome_line_for_file() {
        console::set_colors_enabled(false);
        assert_eq!(
            outcome_line(&ok(Some("package.json"), "1.3.0")),
            "package.json : 1.3.0"
        );
    }

    #[test]
    fn test_outcome_line_inline() {
        console::set_colors_enabled(false);
        assert_eq!(outcome_line(&ok(None, "1.0.0+7")), "1.0.0+7");
    }

    #[test]
    fn test_outcome_line_for_failure() {
        let outcome = FileOutcome {
            source: Some(PathBuf::from("b.json")),
            destination: Some(PathBuf::from("b.json")),
            result: Err(ManifestSemverError::MissingVersionField {
                path: PathBuf::from("b.json"),
            }),
        };
        assert_eq!(
            outcome_line(&outcome),
            "b.json : Manifest b.json has no string 'version' field"
        );
    }

    #[test]
    fn test_summary_line() {
        let mut report = BatchReport::default();
        report.push(ok(Some("a.json"), "1.0.0"));
        assert_eq!(summary_line(Phase::Set, &report), "set: 1 item(s) ok");

        report.push(FileOutcome {
            source: Some(PathBuf::from("b.json")),
            destination: None,
            result: Err(ManifestSemverError::manifest_read("b.json", "missing")),
        });
        assert_eq!(
            summary_line(Phase::Set, &report),
            "set: 1 item(s) ok, 1 failed"
        );
    }

    #[test]
    fn test_display_report() {
        // Visual verification test - output is printed to stdout/stderr
        let mut report = BatchReport::default();
        report.push(ok(Some("a.json"), "1.0.0"));
        display_report(Phase::Validate, &report);
    }
}
