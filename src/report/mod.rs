pub mod types;

pub use types::{OutputFormat, Report};

use crate::actuality::ActualityResult;
use crate::pr::PullRequestRef;
use colored::Colorize;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report file: {0}")]
    FileWrite(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Build a Report from the pull request, its live commits and the classification.
pub fn build<C: AsRef<str>>(
    pull_request: PullRequestRef,
    live_commits: &[C],
    actuality: ActualityResult,
) -> Report {
    Report {
        pull_request,
        live_commits: live_commits.len(),
        head_commit: live_commits.last().map(|c| c.as_ref().to_string()),
        actuality,
    }
}

/// Output the report to stdout or to a file.
///
/// Without a path, `Terminal` prints a colored summary and the other formats
/// print their text. With a path, the rendered text is written to the file;
/// `Terminal` falls back to markdown there.
#[instrument(skip(report), fields(pr = %report.pull_request, actual = report.actuality.is_actual))]
pub fn output(
    report: &Report,
    format: OutputFormat,
    output_path: Option<&Path>,
) -> Result<(), ReportError> {
    match (format, output_path) {
        (OutputFormat::Terminal, None) => {
            debug!("writing report to terminal");
            print_terminal_report(report);
            Ok(())
        }
        (format, None) => {
            debug!(?format, "writing report to stdout");
            println!("{}", render(report, format)?);
            Ok(())
        }
        (format, Some(path)) => {
            debug!(?format, path = %path.display(), "writing report to file");
            std::fs::write(path, render(report, format)?)?;
            Ok(())
        }
    }
}

fn render(report: &Report, format: OutputFormat) -> Result<String, ReportError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Markdown | OutputFormat::Terminal => Ok(render_markdown(report)),
    }
}

/// Format and print the report to the terminal with colors.
///
/// acme/widgets#42
/// Commits on branch: 3 | Head: z
///
/// Status: OUT OF DATE (new_commits_added)
/// new commits were added since the solution was last submitted
/// Stored commit: x
fn print_terminal_report(report: &Report) {
    let actuality = &report.actuality;

    println!();
    println!("{}", report.pull_request);
    println!(
        "Commits on branch: {} | Head: {}",
        report.live_commits,
        report.head_commit.as_deref().unwrap_or("-")
    );
    println!();
    println!("Status: {} ({})", badge(actuality.is_actual), actuality.reason);
    if !actuality.comment.is_empty() {
        println!("{}", actuality.comment);
    }
    println!("Stored commit: {}", stored_commit_label(actuality));
    println!();
}

fn render_markdown(report: &Report) -> String {
    let actuality = &report.actuality;
    let mut md = String::new();

    md.push_str(&format!("# Solution check: {}\n\n", report.pull_request));
    md.push_str(&format!(
        "**Commits on branch:** {} | **Head:** `{}`\n\n",
        report.live_commits,
        report.head_commit.as_deref().unwrap_or("-")
    ));

    let status = if actuality.is_actual { "UP TO DATE" } else { "OUT OF DATE" };
    md.push_str(&format!("## Status: {}\n\n", status));
    md.push_str(&format!("- **Reason:** `{}`\n", actuality.reason));
    if !actuality.comment.is_empty() {
        md.push_str(&format!("- **Details:** {}\n", actuality.comment));
    }
    md.push_str(&format!(
        "- **Stored commit:** `{}`\n",
        stored_commit_label(actuality)
    ));

    md
}

fn stored_commit_label(actuality: &ActualityResult) -> &str {
    if actuality.additional_data.is_empty() {
        "-"
    } else {
        &actuality.additional_data
    }
}

/// Helper to colorize the actuality badge for terminal output.
fn badge(is_actual: bool) -> colored::ColoredString {
    if is_actual {
        "UP TO DATE".green().bold()
    } else {
        "OUT OF DATE".red().bold()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actuality::{classify, StoredSolutionCommit};

    const BRANCH: [&str; 3] = ["x", "y", "z"];

    fn sample_ref() -> PullRequestRef {
        PullRequestRef {
            owner: "acme".to_string(),
            repo_name: "widgets".to_string(),
            number: 42,
        }
    }

    fn sample_report(stored: Option<&str>) -> Report {
        let stored = stored.map(StoredSolutionCommit::new);
        let actuality = classify(&BRANCH, stored.as_ref());
        build(sample_ref(), &BRANCH, actuality)
    }

    #[test]
    fn test_build_report_metadata() {
        let report = sample_report(Some("z"));
        assert_eq!(report.live_commits, 3);
        assert_eq!(report.head_commit.as_deref(), Some("z"));
        assert!(report.actuality.is_actual);
    }

    #[test]
    fn test_build_report_empty_branch() {
        let no_commits: [&str; 0] = [];
        let actuality = classify(&no_commits, Some(&StoredSolutionCommit::new("abc")));
        let report = build(sample_ref(), &no_commits, actuality);
        assert_eq!(report.live_commits, 0);
        assert!(report.head_commit.is_none());
    }

    #[test]
    fn test_render_markdown_stale() {
        let md = render_markdown(&sample_report(Some("x")));
        assert!(md.contains("# Solution check: acme/widgets#42"));
        assert!(md.contains("## Status: OUT OF DATE"));
        assert!(md.contains("`new_commits_added`"));
        assert!(md.contains("new commits were added"));
        assert!(md.contains("**Stored commit:** `x`"));
    }

    #[test]
    fn test_render_markdown_actual() {
        let md = render_markdown(&sample_report(Some("z")));
        assert!(md.contains("## Status: UP TO DATE"));
        assert!(!md.contains("**Details:**"));
    }

    #[test]
    fn test_render_markdown_without_stored_commit() {
        let md = render_markdown(&sample_report(None));
        assert!(md.contains("`missing_stored_commit`"));
        assert!(md.contains("**Stored commit:** `-`"));
    }

    #[test]
    fn test_render_json() {
        let json = render(&sample_report(Some("w")), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["actuality"]["reason"], "commit_not_found");
        assert_eq!(value["actuality"]["additionalData"], "w");
    }

    #[test]
    fn test_output_json_to_file() {
        let report = sample_report(Some("z"));
        let path = std::env::temp_dir().join("solution-check-test-output.json");
        output(&report, OutputFormat::Json, Some(&path)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"isActual\": true"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_output_terminal_format_to_file_writes_markdown() {
        let report = sample_report(Some("x"));
        let path = std::env::temp_dir().join("solution-check-test-output.md");
        output(&report, OutputFormat::Terminal, Some(&path)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Solution check"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_output_to_terminal() {
        let report = sample_report(Some("z"));
        // Should not panic
        output(&report, OutputFormat::Terminal, None).unwrap();
        output(&report, OutputFormat::Markdown, None).unwrap();
    }
}
