use serde::{Deserialize, Serialize};

/// Owner, repository and number of a GitHub pull request.
/// Produced by parse_pr_url() in pr/mod.rs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestRef {
    pub owner: String,
    pub repo_name: String,
    pub number: u64,
}

impl std::fmt::Display for PullRequestRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo_name, self.number)
    }
}

/// A single commit listed on a pull request branch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequestCommit {
    /// Full commit hash
    pub sha: String,
}

impl AsRef<str> for PullRequestCommit {
    fn as_ref(&self) -> &str {
        &self.sha
    }
}
