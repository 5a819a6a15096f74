//! Per-project in-flight markers.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use crate::error::ServiceError;

/// Set of project ids with an outstanding gateway call.
#[derive(Debug, Default)]
pub struct InFlight {
    ids: Mutex<HashSet<String>>,
}

impl InFlight {
    /// Mark `project_id` busy until the returned guard is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Busy`] if the project is already marked.
    pub fn acquire(&self, project_id: &str) -> Result<InFlightGuard<'_>, ServiceError> {
        let mut ids = self.ids.lock().unwrap_or_else(PoisonError::into_inner);
        if !ids.insert(project_id.to_string()) {
            return Err(ServiceError::Busy {
                project_id: project_id.to_string(),
            });
        }
        Ok(InFlightGuard {
            owner: self,
            project_id: project_id.to_string(),
        })
    }

    #[must_use]
    pub fn contains(&self, project_id: &str) -> bool {
        self.ids
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(project_id)
    }
}

/// Clears its project's mark on drop, whatever the call's outcome.
#[derive(Debug)]
pub struct InFlightGuard<'a> {
    owner: &'a InFlight,
    project_id: String,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.owner
            .ids
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.project_id);
    }
}
