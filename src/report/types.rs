use serde::Serialize;

use crate::actuality::ActualityResult;
use crate::pr::PullRequestRef;

/// How a report is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored summary for a terminal
    #[default]
    Terminal,
    /// Markdown document
    Markdown,
    /// Pretty-printed JSON
    Json,
}

/// Actuality check of one solution against its pull request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Pull request the solution points to
    pub pull_request: PullRequestRef,
    /// Number of commits currently on the branch
    pub live_commits: usize,
    /// Branch head, if the branch has any commits
    pub head_commit: Option<String>,
    /// Classification of the stored solution commit
    pub actuality: ActualityResult,
}
