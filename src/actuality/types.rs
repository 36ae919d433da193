use serde::Serialize;

/// Commit recorded for a solution at submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSolutionCommit {
    pub commit_hash: String,
}

impl StoredSolutionCommit {
    pub fn new(commit_hash: impl Into<String>) -> Self {
        Self {
            commit_hash: commit_hash.into(),
        }
    }
}

/// Why a solution is or is not up to date with its pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActualityReason {
    /// Stored commit is the head of the branch.
    Actual,
    /// No commit was recorded for the solution.
    MissingStoredCommit,
    /// The branch has no commits left.
    CommitsRemoved,
    /// The recorded commit is no longer on the branch.
    CommitNotFound,
    /// The branch moved past the recorded commit.
    NewCommitsAdded,
}

impl ActualityReason {
    /// Stable code for callers that branch on cause.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActualityReason::Actual => "actual",
            ActualityReason::MissingStoredCommit => "missing_stored_commit",
            ActualityReason::CommitsRemoved => "commits_removed",
            ActualityReason::CommitNotFound => "commit_not_found",
            ActualityReason::NewCommitsAdded => "new_commits_added",
        }
    }

    /// Reviewer-facing explanation. Empty only for `Actual`.
    pub fn comment(&self) -> &'static str {
        match self {
            ActualityReason::Actual => "",
            ActualityReason::MissingStoredCommit => {
                "no commit information was stored for this solution"
            }
            ActualityReason::CommitsRemoved => {
                "commits were removed from the branch (possible force-push)"
            }
            ActualityReason::CommitNotFound => {
                "the solution's last commit was not found on the current branch (possible force-push)"
            }
            ActualityReason::NewCommitsAdded => {
                "new commits were added since the solution was last submitted"
            }
        }
    }
}

impl std::fmt::Display for ActualityReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of comparing a stored solution commit with the live branch.
///
/// Always built through [`ActualityResult::new`], which keeps
/// `is_actual == comment.is_empty()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActualityResult {
    pub is_actual: bool,
    pub comment: String,
    /// Stored commit hash, or "" when none was recorded
    pub additional_data: String,
    pub reason: ActualityReason,
}

impl ActualityResult {
    pub fn new(reason: ActualityReason, additional_data: impl Into<String>) -> Self {
        Self {
            is_actual: reason == ActualityReason::Actual,
            comment: reason.comment().to_string(),
            additional_data: additional_data.into(),
            reason,
        }
    }
}
