//! Persisted "currently selected project" marker.
//!
//! Selection is presentation state, kept in its own blob so the project list
//! blob only ever holds projects. The id is stored as a JSON string.

use crate::blob::BlobStore;
use crate::error::StoreError;

/// Blob key holding the selected project id.
pub const SELECTION_KEY: &str = "veille_active_project";

/// Read the selected project id. Unreadable or blank values count as none.
pub fn load_selection<B: BlobStore>(blob: &B) -> Option<String> {
    let raw = match blob.get_blob(SELECTION_KEY) {
        Ok(value) => value?,
        Err(error) => {
            tracing::warn!(%error, "ignoring unreadable selection");
            return None;
        }
    };
    match serde_json::from_str::<String>(&raw) {
        Ok(id) => Some(id.trim().to_string()).filter(|id| !id.is_empty()),
        Err(error) => {
            tracing::warn!(%error, "ignoring malformed selection");
            None
        }
    }
}

/// Persist the selected project id.
///
/// # Errors
///
/// Returns [`StoreError`] if the blob write fails.
pub fn save_selection<B: BlobStore>(blob: &B, project_id: &str) -> Result<(), StoreError> {
    blob.set_blob(SELECTION_KEY, &serde_json::to_string(project_id)?)
}

/// Forget the selection.
///
/// # Errors
///
/// Returns [`StoreError`] if the blob cannot be removed.
pub fn clear_selection<B: BlobStore>(blob: &B) -> Result<(), StoreError> {
    blob.remove_blob(SELECTION_KEY)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::blob::{FileBlobStore, MemoryBlobStore};

    #[test]
    fn selection_roundtrip_and_clear() {
        let blob = MemoryBlobStore::new();
        assert_eq!(load_selection(&blob), None);

        save_selection(&blob, "prj-00000001").unwrap();
        assert_eq!(load_selection(&blob).as_deref(), Some("prj-00000001"));
        assert_eq!(blob.raw(SELECTION_KEY).as_deref(), Some("\"prj-00000001\""));

        clear_selection(&blob).unwrap();
        assert_eq!(load_selection(&blob), None);
    }

    #[test]
    fn blank_selection_is_none() {
        let blob = MemoryBlobStore::with_blob(SELECTION_KEY, "\"  \"");
        assert_eq!(load_selection(&blob), None);
    }

    #[test]
    fn bare_id_is_not_a_selection() {
        let blob = MemoryBlobStore::with_blob(SELECTION_KEY, "prj-00000001");
        assert_eq!(load_selection(&blob), None);
    }

    #[test]
    fn selection_file_holds_valid_json() {
        let temp = tempfile::tempdir().unwrap();
        let blob = FileBlobStore::new(temp.path());
        save_selection(&blob, "prj-0000abcd").unwrap();

        let path = temp.path().join(format!("{SELECTION_KEY}.json"));
        let on_disk = std::fs::read_to_string(path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&on_disk).unwrap();
        assert_eq!(parsed, serde_json::json!("prj-0000abcd"));
        assert_eq!(load_selection(&blob).as_deref(), Some("prj-0000abcd"));
    }
}
