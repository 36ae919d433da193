pub mod types;

pub use types::{ActualityReason, ActualityResult, StoredSolutionCommit};

use std::collections::HashSet;

/// Decide whether a stored solution still matches its pull request branch.
///
/// `live_commits` is the branch history, oldest first. Checks run from
/// "nothing recorded" to "recorded but outdated" and the first that fails
/// decides the reason:
///
/// 1. no stored commit
/// 2. branch has no commits
/// 3. stored commit is not on the branch
/// 4. stored commit is not the branch head
pub fn classify<C: AsRef<str>>(
    live_commits: &[C],
    last_stored: Option<&StoredSolutionCommit>,
) -> ActualityResult {
    let Some(stored) = last_stored else {
        return ActualityResult::new(ActualityReason::MissingStoredCommit, "");
    };
    let stored_hash = stored.commit_hash.as_str();

    let live: HashSet<&str> = live_commits.iter().map(|c| c.as_ref()).collect();

    let reason = if live.is_empty() {
        ActualityReason::CommitsRemoved
    } else if !live.contains(stored_hash) {
        ActualityReason::CommitNotFound
    } else if live_commits.last().map(|c| c.as_ref()) != Some(stored_hash) {
        ActualityReason::NewCommitsAdded
    } else {
        ActualityReason::Actual
    };

    ActualityResult::new(reason, stored_hash)
}
