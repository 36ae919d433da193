use async_trait::async_trait;

use super::types::{DirectoryEntry, ProgramListing};
use super::{ProgramDirectory, RosterError, StudentDirectory};
use crate::config::RosterConfig;

/// Program and student source backed by the `[roster]` config table.
/// Stands in for the timetable site and the directory service offline.
#[derive(Debug, Clone)]
pub struct ConfigDirectory {
    config: RosterConfig,
}

impl ConfigDirectory {
    pub fn new(config: RosterConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProgramDirectory for ConfigDirectory {
    async fn fetch_programs(&self) -> Result<Vec<ProgramListing>, RosterError> {
        Ok(self
            .config
            .programs
            .iter()
            .map(|(name, titles)| ProgramListing {
                name: name.clone(),
                group_titles: titles.clone(),
            })
            .collect())
    }
}

#[async_trait]
impl StudentDirectory for ConfigDirectory {
    async fn search_group(&self, group: &str) -> Result<Vec<DirectoryEntry>, RosterError> {
        if let Some(orphan) = self
            .config
            .students
            .iter()
            .find(|student| student.group.trim().is_empty())
        {
            return Err(RosterError::Unavailable {
                source_name: "config".to_string(),
                reason: format!(
                    "student entry {} has no group",
                    orphan.cn.as_deref().unwrap_or("<no cn>")
                ),
            });
        }

        Ok(self
            .config
            .students
            .iter()
            .filter(|student| student.group == group)
            .map(|student| DirectoryEntry {
                cn: student.cn.clone(),
                display_name: student.display_name.clone(),
            })
            .collect())
    }
}
