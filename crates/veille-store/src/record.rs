//! The project record store.
//!
//! Owns the canonical project list for a session and mirrors it into a single
//! blob after every change (full snapshot, never incremental).
//!
//! Projects are held as `Arc<Project>` and never mutated in place: appending a
//! finding builds a new `Project` and swaps the `Arc`, so a snapshot taken
//! earlier keeps seeing the previous version.

use std::sync::Arc;

use veille_core::entities::{Finding, NewProject, Project, Strategy};
use veille_core::errors::CoreError;
use veille_core::ids::{PREFIX_PROJECT, generate_id};

use crate::blob::BlobStore;
use crate::error::StoreError;

/// Blob key holding the whole project list.
pub const PROJECTS_KEY: &str = "veille_projects";

/// Attempts at drawing an unused project id before giving up.
const MAX_ID_ATTEMPTS: usize = 8;

/// Result of a mutation whose persistence may have failed.
///
/// The in-memory change has been applied either way; `warning` carries the
/// write failure, if any.
#[derive(Debug)]
#[must_use]
pub struct Persisted<T> {
    pub value: T,
    pub warning: Option<StoreError>,
}

impl<T> Persisted<T> {
    fn from_save(value: T, saved: Result<(), StoreError>) -> Self {
        Self {
            value,
            warning: saved.err(),
        }
    }

    /// Warning rendered for display.
    #[must_use]
    pub fn warning_message(&self) -> Option<String> {
        self.warning.as_ref().map(ToString::to_string)
    }
}

/// Read and decode the persisted project list.
///
/// # Errors
///
/// Returns [`StoreError::Storage`] if the blob cannot be read and
/// [`StoreError::Serialize`] if it is not a valid project list.
pub fn load_all<B: BlobStore>(blob: &B) -> Result<Vec<Project>, StoreError> {
    match blob.get_blob(PROJECTS_KEY)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new()),
    }
}

/// In-memory project list kept in sync with a blob store.
pub struct RecordStore<B> {
    blob: B,
    projects: Vec<Arc<Project>>,
}

impl<B: BlobStore> RecordStore<B> {
    /// Load the persisted list, starting empty when it is missing or unusable.
    pub fn open(blob: B) -> Self {
        let projects = match load_all(&blob) {
            Ok(projects) => projects,
            Err(error) => {
                tracing::warn!(%error, "discarding unreadable project data; starting empty");
                Vec::new()
            }
        };
        tracing::debug!(count = projects.len(), "record store opened");
        Self {
            blob,
            projects: projects.into_iter().map(Arc::new).collect(),
        }
    }

    /// The backing blob store.
    pub const fn blob(&self) -> &B {
        &self.blob
    }

    /// Serialize the full list and overwrite the blob.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if encoding or the blob write fails.
    pub fn save_all(&self) -> Result<(), StoreError> {
        let projects: Vec<&Project> = self.projects.iter().map(AsRef::as_ref).collect();
        let raw = serde_json::to_string(&projects)?;
        self.blob.set_blob(PROJECTS_KEY, &raw)
    }

    fn save_logged(&self) -> Result<(), StoreError> {
        let saved = self.save_all();
        if let Err(error) = &saved {
            tracing::warn!(%error, "failed to persist projects; in-memory state kept");
        }
        saved
    }

    /// Create a project from user input and its strategy, appended last.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] (wrapped) for an empty name. The list
    /// is unchanged on error.
    pub fn create_project(
        &mut self,
        input: NewProject,
        strategy: Strategy,
    ) -> Result<Persisted<Arc<Project>>, StoreError> {
        input.validate()?;
        let id = self.fresh_project_id()?;
        let project = Arc::new(Project::from_strategy(id, input, strategy));
        self.projects.push(Arc::clone(&project));
        tracing::info!(project_id = %project.id, name = %project.name, "project created");
        Ok(Persisted::from_save(project, self.save_logged()))
    }

    fn fresh_project_id(&self) -> Result<String, StoreError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = generate_id(PREFIX_PROJECT)?;
            if self.get(&id).is_none() {
                return Ok(id);
            }
        }
        Err(CoreError::Other(anyhow::anyhow!("could not allocate a unique project id")).into())
    }

    /// Prepend `finding` to a project's findings, replacing the project.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] (wrapped) when no project has that id.
    pub fn append_finding(
        &mut self,
        project_id: &str,
        finding: Finding,
    ) -> Result<Persisted<Arc<Project>>, StoreError> {
        let slot = self
            .projects
            .iter_mut()
            .find(|project| project.id == project_id)
            .ok_or_else(|| CoreError::project_not_found(project_id))?;
        let updated = Arc::new(slot.with_finding(finding));
        *slot = Arc::clone(&updated);
        tracing::info!(
            project_id,
            findings = updated.findings.len(),
            "finding appended"
        );
        Ok(Persisted::from_save(updated, self.save_logged()))
    }

    /// Remove a project. Missing ids are a no-op and do not touch the blob.
    pub fn delete_project(&mut self, project_id: &str) -> Persisted<Option<Arc<Project>>> {
        let Some(index) = self
            .projects
            .iter()
            .position(|project| project.id == project_id)
        else {
            return Persisted {
                value: None,
                warning: None,
            };
        };
        let removed = self.projects.remove(index);
        tracing::info!(project_id, "project deleted");
        Persisted::from_save(Some(removed), self.save_logged())
    }

    /// Cheap copy of the current list, in creation order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Arc<Project>> {
        self.projects.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Project>> {
        self.projects.iter()
    }

    #[must_use]
    pub fn get(&self, project_id: &str) -> Option<Arc<Project>> {
        self.projects
            .iter()
            .find(|project| project.id == project_id)
            .cloned()
    }

    /// Locate a finding across all projects.
    #[must_use]
    pub fn find_finding(&self, finding_id: &str) -> Option<(Arc<Project>, Finding)> {
        self.projects.iter().find_map(|project| {
            project
                .finding(finding_id)
                .map(|finding| (Arc::clone(project), finding.clone()))
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
