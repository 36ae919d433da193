pub mod config_directory;
pub mod types;

pub use config_directory::ConfigDirectory;
pub use types::{DirectoryEntry, Group, Program, ProgramListing, Student};

use async_trait::async_trait;
use std::collections::BTreeMap;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, instrument, warn};

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Roster source {source_name} unavailable: {reason}")]
    Unavailable { source_name: String, reason: String },
}

/// Read access to programs, groups and students.
/// Implementations must be Send + Sync so one instance can serve many requests.
#[async_trait]
pub trait RosterProvider: Send + Sync {
    async fn list_programs(&self) -> Vec<Program>;

    /// Groups of `program`, empty if the program is unknown.
    async fn list_groups(&self, program: &str) -> Vec<Group>;

    /// Students of `group`, empty if the group is unknown or the directory fails.
    async fn list_students(&self, group: &str) -> Vec<Student>;
}

/// Source of the program -> group titles listing (the timetable site).
#[async_trait]
pub trait ProgramDirectory: Send + Sync {
    async fn fetch_programs(&self) -> Result<Vec<ProgramListing>, RosterError>;
}

/// Source of per-group student records (the directory service).
#[async_trait]
pub trait StudentDirectory: Send + Sync {
    async fn search_group(&self, group: &str) -> Result<Vec<DirectoryEntry>, RosterError>;
}

/// Roster built from a program source and a student source.
///
/// The program listing is fetched on first use and kept for the lifetime
/// of the service; a failed fetch is logged and remembered as empty.
/// Student lookups always go to the directory.
pub struct RosterService<P, S> {
    programs: P,
    students: S,
    email_domain: String,
    program_groups: OnceCell<BTreeMap<String, Vec<String>>>,
}

impl<P: ProgramDirectory, S: StudentDirectory> RosterService<P, S> {
    pub fn new(programs: P, students: S, email_domain: impl Into<String>) -> Self {
        Self {
            programs,
            students,
            email_domain: email_domain.into(),
            program_groups: OnceCell::new(),
        }
    }

    async fn program_groups(&self) -> &BTreeMap<String, Vec<String>> {
        self.program_groups
            .get_or_init(|| async {
                match self.programs.fetch_programs().await {
                    Ok(listings) => {
                        debug!(programs = listings.len(), "loaded program listing");
                        merge_listings(listings)
                    }
                    Err(e) => {
                        warn!(error = %e, "failed to load programs, roster stays empty");
                        BTreeMap::new()
                    }
                }
            })
            .await
    }

    fn to_student(&self, entry: DirectoryEntry) -> Option<Student> {
        let cn = entry.cn?;
        let display_name = entry.display_name?;

        let mut parts = display_name.split(' ');
        let mut next_part = || parts.next().unwrap_or_default().to_string();

        Some(Student {
            name: next_part(),
            surname: next_part(),
            middle_name: next_part(),
            email: format!("{}@{}", cn, self.email_domain),
        })
    }
}

#[async_trait]
impl<P: ProgramDirectory, S: StudentDirectory> RosterProvider for RosterService<P, S> {
    async fn list_programs(&self) -> Vec<Program> {
        self.program_groups()
            .await
            .keys()
            .map(|name| Program { name: name.clone() })
            .collect()
    }

    async fn list_groups(&self, program: &str) -> Vec<Group> {
        let Some(titles) = self.program_groups().await.get(program) else {
            return Vec::new();
        };
        split_group_titles(titles)
            .map(|name| Group {
                name: name.to_string(),
            })
            .collect()
    }

    #[instrument(skip(self))]
    async fn list_students(&self, group: &str) -> Vec<Student> {
        match self.students.search_group(group).await {
            Ok(entries) => entries
                .into_iter()
                .filter_map(|entry| self.to_student(entry))
                .collect(),
            Err(e) => {
                warn!(error = %e, "student lookup failed");
                Vec::new()
            }
        }
    }
}

/// Merge listings by program name, concatenating group titles of duplicates.
fn merge_listings(listings: Vec<ProgramListing>) -> BTreeMap<String, Vec<String>> {
    let mut merged: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for listing in listings {
        merged
            .entry(listing.name)
            .or_default()
            .extend(listing.group_titles);
    }
    merged
}

/// Split raw titles like `"21.Б01, 21.Б02"` into trimmed, non-empty group names.
fn split_group_titles(titles: &[String]) -> impl Iterator<Item = &str> {
    titles
        .iter()
        .flat_map(|title| title.split(','))
        .map(str::trim)
        .filter(|name| !name.is_empty())
}
