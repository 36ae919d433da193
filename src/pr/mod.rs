pub mod commits;
pub mod types;

pub use commits::fetch_pull_request_commits;
pub use types::{PullRequestCommit, PullRequestRef};

use thiserror::Error;

/// Literal scheme and host every recognised pull request URL starts with.
const PR_URL_PREFIX: &str = "https://github.com/";

#[derive(Debug, Error)]
pub enum PrError {
    #[error("GitHub API request failed: {0}")]
    ApiRequest(#[from] reqwest::Error),

    #[error("Pull request URL is required")]
    MissingUrl,

    #[error("Pull request number out of range: {0}")]
    InvalidNumber(String),

    #[error("GitHub token not found in config or environment")]
    MissingToken,
}

/// Parse a GitHub pull request URL into owner, repository and number.
///
/// Recognises `https://github.com/{owner}/{repo}/pull/{number}` anywhere in
/// the input, so a URL embedded in a longer text still matches. Anything
/// after the digits (`/files`, an anchor, more text) is ignored.
///
/// Returns `Ok(None)` when nothing matches and `PrError::MissingUrl` when no
/// input was given at all. A digit run too large for `u64` is reported as
/// `PrError::InvalidNumber` rather than swallowed.
pub fn parse_pr_url<'a>(
    url: impl Into<Option<&'a str>>,
) -> Result<Option<PullRequestRef>, PrError> {
    let url = url.into().ok_or(PrError::MissingUrl)?;

    for (start, _) in url.match_indices(PR_URL_PREFIX) {
        if let Some(pr_ref) = match_after_prefix(&url[start + PR_URL_PREFIX.len()..])? {
            return Ok(Some(pr_ref));
        }
    }

    Ok(None)
}

/// Match `{owner}/{repo}/pull/{digits}` at the start of `rest`.
fn match_after_prefix(rest: &str) -> Result<Option<PullRequestRef>, PrError> {
    let Some((owner, rest)) = rest.split_once('/') else {
        return Ok(None);
    };
    let Some((repo_name, rest)) = rest.split_once('/') else {
        return Ok(None);
    };
    if owner.is_empty() || repo_name.is_empty() {
        return Ok(None);
    }
    let Some(rest) = rest.strip_prefix("pull/") else {
        return Ok(None);
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Ok(None);
    }

    let digits = &rest[..digits_len];
    let number = digits
        .parse::<u64>()
        .map_err(|_| PrError::InvalidNumber(digits.to_string()))?;

    Ok(Some(PullRequestRef {
        owner: owner.to_string(),
        repo_name: repo_name.to_string(),
        number,
    }))
}
