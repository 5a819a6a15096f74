//! `MonitorService`: user intents in, gateway calls and store mutations out.
//!
//! Gateway calls are the only suspension points. The record store sits behind
//! a synchronous mutex that is locked only around store calls, never across
//! an `.await`, so refreshes of different projects can overlap while their
//! mutations stay serialized.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::join_all;
use tracing::{info, warn};
use veille_config::DateLocale;
use veille_core::entities::{Finding, NewProject, Project, Strategy, TrendsReport};
use veille_core::errors::CoreError;
use veille_core::ids::{PREFIX_FINDING, generate_id};
use veille_core::responses::{
    DeleteResponse, FindingDetail, ProjectCreateResponse, ProjectSummary, RefreshAllResponse,
    RefreshFailure, RefreshResponse,
};
use veille_gateway::ResearchGateway;
use veille_store::{BlobStore, RecordStore, StoreError, clear_selection, load_selection, save_selection};

use crate::error::ServiceError;
use crate::in_flight::InFlight;
use crate::timestamp;

/// Orchestrates research projects over a gateway and a blob store.
pub struct MonitorService<G, B> {
    gateway: G,
    store: Mutex<RecordStore<B>>,
    in_flight: InFlight,
    locale: DateLocale,
}

impl<G: ResearchGateway, B: BlobStore> MonitorService<G, B> {
    /// Open the record store over `blob` and wire it to `gateway`.
    pub fn new(gateway: G, blob: B, locale: DateLocale) -> Self {
        Self {
            gateway,
            store: Mutex::new(RecordStore::open(blob)),
            in_flight: InFlight::default(),
            locale,
        }
    }

    pub const fn gateway(&self) -> &G {
        &self.gateway
    }

    fn store(&self) -> MutexGuard<'_, RecordStore<B>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Projects ───────────────────────────────────────────────────

    /// Ask the gateway for a strategy, then store the project and select it.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Core`] for an empty name (no gateway call is
    /// made) and [`ServiceError::Gateway`] if the strategy request fails. The
    /// store is unchanged on error.
    pub async fn create_project(
        &self,
        input: NewProject,
    ) -> Result<ProjectCreateResponse, ServiceError> {
        input.validate()?;
        let strategy = self
            .gateway
            .request_strategy(&input.name, &input.description, input.location.as_deref())
            .await?;

        let mut store = self.store();
        let persisted = store.create_project(input, strategy)?;
        let mut warnings: Vec<String> = persisted.warning_message().into_iter().collect();
        if let Err(error) = save_selection(store.blob(), &persisted.value.id) {
            warn!(%error, "failed to persist selection");
            warnings.push(error.to_string());
        }

        Ok(ProjectCreateResponse {
            project: Project::clone(&persisted.value),
            selected: true,
            storage_warning: join_warnings(warnings),
        })
    }

    /// Remove a project and its findings. Unknown ids are a no-op.
    pub fn delete_project(&self, project_id: &str) -> DeleteResponse {
        let mut store = self.store();
        let persisted = store.delete_project(project_id);
        let mut warnings: Vec<String> = persisted.warning_message().into_iter().collect();

        let mut selection_cleared = false;
        if load_selection(store.blob()).as_deref() == Some(project_id) {
            match clear_selection(store.blob()) {
                Ok(()) => selection_cleared = true,
                Err(error) => {
                    warn!(%error, "failed to clear selection");
                    warnings.push(error.to_string());
                }
            }
        }

        DeleteResponse {
            id: project_id.to_string(),
            deleted: persisted.value.is_some(),
            selection_cleared,
            storage_warning: join_warnings(warnings),
        }
    }

    /// Projects in creation order.
    pub fn list_projects(&self) -> Vec<ProjectSummary> {
        let store = self.store();
        let selected = load_selection(store.blob());
        store
            .iter()
            .map(|project| ProjectSummary::from_project(project, selected.as_deref()))
            .collect()
    }

    /// # Errors
    ///
    /// Returns [`ServiceError::Core`] (`NotFound`) for an unknown id.
    pub fn project(&self, project_id: &str) -> Result<Arc<Project>, ServiceError> {
        self.store()
            .get(project_id)
            .ok_or_else(|| CoreError::project_not_found(project_id).into())
    }

    /// Findings of a project, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Core`] (`NotFound`) for an unknown project.
    pub fn findings(&self, project_id: &str) -> Result<Vec<Finding>, ServiceError> {
        Ok(self.project(project_id)?.findings.clone())
    }

    /// A finding with its formatted blocks.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Core`] (`NotFound`) for an unknown finding.
    pub fn finding_detail(&self, finding_id: &str) -> Result<FindingDetail, ServiceError> {
        let (project, finding) = self
            .store()
            .find_finding(finding_id)
            .ok_or_else(|| CoreError::finding_not_found(finding_id))?;
        Ok(FindingDetail {
            project_id: project.id.clone(),
            blocks: finding.blocks(),
            finding,
        })
    }

    // ── Selection ──────────────────────────────────────────────────

    /// Select an existing project.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Core`] (`NotFound`) for an unknown id and
    /// [`ServiceError::Store`] if the selection cannot be persisted.
    pub fn select(&self, project_id: &str) -> Result<Arc<Project>, ServiceError> {
        let store = self.store();
        let project = store
            .get(project_id)
            .ok_or_else(|| CoreError::project_not_found(project_id))?;
        save_selection(store.blob(), project_id)?;
        info!(project_id, "project selected");
        Ok(project)
    }

    /// The selected project id, if it still names a stored project.
    pub fn selection(&self) -> Option<String> {
        let store = self.store();
        load_selection(store.blob()).filter(|id| store.get(id).is_some())
    }

    // ── Refresh ────────────────────────────────────────────────────

    /// Whether a refresh for `project_id` is outstanding.
    pub fn is_refreshing(&self, project_id: &str) -> bool {
        self.in_flight.contains(project_id)
    }

    /// Fetch a new grounded report and prepend it as a finding.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::Busy`] if a refresh for this project is outstanding
    ///   (the gateway is not called).
    /// - [`ServiceError::Gateway`] if the trends request fails.
    /// - `NotFound` if the project is unknown, or was deleted while the
    ///   request was outstanding (the late result is discarded).
    pub async fn refresh(&self, project_id: &str) -> Result<RefreshResponse, ServiceError> {
        let project = self.project(project_id)?;
        let _guard = self.in_flight.acquire(project_id)?;
        info!(project_id, "refreshing project");

        let report = self
            .gateway
            .request_trends_report(
                &project.name,
                &project.keywords,
                Some(&project.description),
                project.location.as_deref(),
            )
            .await?;
        let finding = self.finding_from(report)?;

        let appended = self.store().append_finding(project_id, finding);
        let persisted = match appended {
            Ok(persisted) => persisted,
            Err(error) => {
                if error.is_not_found() {
                    warn!(project_id, "project deleted during refresh; discarding result");
                }
                return Err(error.into());
            }
        };
        let storage_warning = persisted.warning_message();
        let updated = persisted.value;
        let finding = updated
            .latest_finding()
            .cloned()
            .ok_or_else(|| StoreError::from(CoreError::project_not_found(project_id)))?;

        Ok(RefreshResponse {
            project_id: updated.id.clone(),
            total_findings: updated.findings.len(),
            finding,
            storage_warning,
        })
    }

    /// Refresh the given project, or the selected one.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NoSelection`] when `project_id` is `None` and
    /// nothing is selected, otherwise as [`Self::refresh`].
    pub async fn refresh_target(
        &self,
        project_id: Option<&str>,
    ) -> Result<RefreshResponse, ServiceError> {
        let id = match project_id {
            Some(id) => id.to_string(),
            None => self.selection().ok_or(ServiceError::NoSelection)?,
        };
        self.refresh(&id).await
    }

    /// Refresh every project concurrently and collect per-project outcomes.
    pub async fn refresh_all(&self) -> RefreshAllResponse {
        let ids: Vec<String> = self.store().iter().map(|p| p.id.clone()).collect();
        let outcomes = join_all(ids.iter().map(|id| self.refresh(id))).await;

        let mut response = RefreshAllResponse {
            refreshed: Vec::new(),
            failed: Vec::new(),
        };
        for (id, outcome) in ids.into_iter().zip(outcomes) {
            match outcome {
                Ok(refreshed) => response.refreshed.push(refreshed),
                Err(error) => {
                    warn!(project_id = %id, %error, "refresh failed");
                    response.failed.push(RefreshFailure {
                        project_id: id,
                        error: error.to_string(),
                    });
                }
            }
        }
        response
    }

    fn finding_from(&self, report: TrendsReport) -> Result<Finding, ServiceError> {
        Ok(Finding {
            id: generate_id(PREFIX_FINDING)?,
            created_at: timestamp::now(self.locale),
            raw_content: report.report_text,
            citations: report.citations,
        })
    }

    // ── Assistant ──────────────────────────────────────────────────

    /// Ad-hoc strategy for a topic. Nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Core`] for an empty topic and
    /// [`ServiceError::Gateway`] if the request fails.
    pub async fn assist_strategy(
        &self,
        topic: &str,
        context: &str,
        scope: Option<&str>,
    ) -> Result<Strategy, ServiceError> {
        let topic = required_topic(topic)?;
        Ok(self.gateway.request_strategy(topic, context, scope).await?)
    }

    /// Ad-hoc grounded report for a topic. Nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Core`] for an empty topic and
    /// [`ServiceError::Gateway`] if the request fails.
    pub async fn assist_trends(
        &self,
        topic: &str,
        context: Option<&str>,
        scope: Option<&str>,
    ) -> Result<TrendsReport, ServiceError> {
        let topic = required_topic(topic)?;
        Ok(self
            .gateway
            .request_trends_report(topic, &[], context, scope)
            .await?)
    }
}

fn required_topic(topic: &str) -> Result<&str, CoreError> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(CoreError::Validation(String::from("topic must not be empty")));
    }
    Ok(topic)
}

fn join_warnings(warnings: Vec<String>) -> Option<String> {
    if warnings.is_empty() {
        None
    } else {
        Some(warnings.join("; "))
    }
}
