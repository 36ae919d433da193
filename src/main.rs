mod actuality;
mod config;
mod pr;
mod report;
mod roster;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info, info_span, warn};
use tracing_subscriber::EnvFilter;

use actuality::StoredSolutionCommit;
use report::OutputFormat;
use roster::{ConfigDirectory, RosterProvider, RosterService};

/// Solution Check — CLI tool that tells whether a stored homework solution
/// is still up to date with the GitHub Pull Request it was submitted from.
#[derive(Parser, Debug)]
#[command(name = "solution-check", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare the stored solution commit with the live pull request branch
    Check {
        /// GitHub Pull Request URL (e.g., https://github.com/org/repo/pull/42)
        pr_url: Option<String>,

        /// Last commit hash recorded for the solution
        #[arg(long)]
        stored_commit: Option<String>,

        /// Live branch commits, oldest first, instead of asking GitHub.
        /// An empty value means the branch has no commits.
        #[arg(long, value_delimiter = ',')]
        commits: Option<Vec<String>>,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
        format: OutputFormat,

        /// Optional output file path for the report
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Browse the configured student roster
    Roster {
        #[command(subcommand)]
        query: RosterQuery,
    },
}

#[derive(Subcommand, Debug)]
enum RosterQuery {
    /// List educational programs
    Programs,
    /// List groups of a program
    Groups { program: String },
    /// List students of a group
    Students { group: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Check {
            pr_url,
            stored_commit,
            commits,
            format,
            output,
        } => {
            let _main_span = info_span!("solution_check", pr_url = ?pr_url).entered();

            info!("parsing PR URL");
            let pr_ref = pr::parse_pr_url(pr_url.as_deref())?.ok_or(
                "not a GitHub Pull Request URL, pull request integration is unavailable for this solution",
            )?;
            debug!(owner = %pr_ref.owner, repo = %pr_ref.repo_name, pr = pr_ref.number, "parsed PR URL");

            let live_commits = match commits {
                Some(commits) => {
                    let commits = offline_commits(commits);
                    info!(commits = commits.len(), "using commits from the command line");
                    commits
                }
                None => {
                    info!("loading configuration");
                    let config = config::Config::load()?;

                    info!("fetching pull request commits from GitHub");
                    pr::fetch_pull_request_commits(&pr_ref, &config)
                        .await?
                        .into_iter()
                        .map(|commit| commit.sha)
                        .collect()
                }
            };

            let stored = stored_commit.map(StoredSolutionCommit::new);
            if stored.is_none() {
                warn!("no stored commit given");
            }

            let result = actuality::classify(&live_commits, stored.as_ref());
            info!(actual = result.is_actual, reason = %result.reason, "classified solution");

            let built_report = report::build(pr_ref, &live_commits, result);
            report::output(&built_report, format, output.as_deref())?;
        }
        Command::Roster { query } => {
            let config = config::Config::load()?;
            let email_domain = config.roster.email_domain().to_string();
            let directory = ConfigDirectory::new(config.roster);
            let roster = RosterService::new(directory.clone(), directory, email_domain);
            run_roster_query(&roster, query).await;
        }
    }

    Ok(())
}

/// Drop blank items so `--commits ""` stands for an empty branch.
fn offline_commits(commits: Vec<String>) -> Vec<String> {
    commits
        .into_iter()
        .map(|sha| sha.trim().to_string())
        .filter(|sha| !sha.is_empty())
        .collect()
}

async fn run_roster_query(roster: &dyn RosterProvider, query: RosterQuery) {
    match query {
        RosterQuery::Programs => {
            for program in roster.list_programs().await {
                println!("{}", program.name);
            }
        }
        RosterQuery::Groups { program } => {
            for group in roster.list_groups(&program).await {
                println!("{}", group.name);
            }
        }
        RosterQuery::Students { group } => {
            for student in roster.list_students(&group).await {
                let full_name = [&student.name, &student.surname, &student.middle_name]
                    .into_iter()
                    .filter(|part| !part.is_empty())
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("{}\t{}", full_name, student.email);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed_commits(args: &[&str]) -> Vec<String> {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Check { commits, .. } => offline_commits(commits.unwrap()),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_commits_flag_keeps_order() {
        let commits = parsed_commits(&[
            "solution-check",
            "check",
            "https://github.com/acme/widgets/pull/42",
            "--commits",
            "x,y,z",
        ]);
        assert_eq!(commits, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_empty_commits_flag_is_empty_branch() {
        let commits = parsed_commits(&[
            "solution-check",
            "check",
            "https://github.com/acme/widgets/pull/42",
            "--commits",
            "",
        ]);
        assert!(commits.is_empty());

        let stored = StoredSolutionCommit::new("abc");
        let result = actuality::classify(&commits, Some(&stored));
        assert_eq!(result.reason, actuality::ActualityReason::CommitsRemoved);
    }

    #[test]
    fn test_commits_flag_drops_blank_items() {
        let commits = parsed_commits(&[
            "solution-check",
            "check",
            "https://github.com/acme/widgets/pull/42",
            "--commits",
            "x,,y,",
        ]);
        assert_eq!(commits, vec!["x", "y"]);
    }
}
