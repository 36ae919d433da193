use tracing::{debug, instrument, warn};

use super::types::{PullRequestCommit, PullRequestRef};
use super::PrError;
use crate::config::Config;

/// GitHub caps the page size of the pull request commits endpoint at 100.
const COMMITS_PER_PAGE: usize = 100;

/// GitHub lists at most 250 commits per pull request, which fits in 3 pages.
const MAX_COMMIT_PAGES: usize = 3;

/// Fetch every commit on a pull request branch, oldest first.
///
/// Pages through `GET /repos/{owner}/{repo}/pulls/{number}/commits` until
/// a short page comes back or `MAX_COMMIT_PAGES` pages were read. The order
/// GitHub reports is kept, so the last element is the branch head.
#[instrument(skip(config), fields(pr = %pr_ref))]
pub async fn fetch_pull_request_commits(
    pr_ref: &PullRequestRef,
    config: &Config,
) -> Result<Vec<PullRequestCommit>, PrError> {
    let token = config.github_token().ok_or(PrError::MissingToken)?;
    let client = reqwest::Client::new();
    let url = commits_url(config.github.api_base(), pr_ref);

    let mut commits = Vec::new();
    for page in 1..=MAX_COMMIT_PAGES {
        debug!(page, "fetching PR commits page from GitHub API");
        let batch = client
            .get(&url)
            .query(&[("per_page", COMMITS_PER_PAGE), ("page", page)])
            .header("User-Agent", "solution-check")
            .header("Accept", "application/vnd.github+json")
            .bearer_auth(&token)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<PullRequestCommit>>()
            .await?;

        let received = batch.len();
        commits.extend(batch);
        if received < COMMITS_PER_PAGE {
            debug!(commits = commits.len(), "received PR commits");
            return Ok(commits);
        }
    }

    warn!(
        commits = commits.len(),
        pages = MAX_COMMIT_PAGES,
        "page limit reached, later commits were not fetched"
    );
    Ok(commits)
}

fn commits_url(api_base: &str, pr_ref: &PullRequestRef) -> String {
    format!(
        "{}/repos/{}/{}/pulls/{}/commits",
        api_base.trim_end_matches('/'),
        pr_ref.owner,
        pr_ref.repo_name,
        pr_ref.number
    )
}
