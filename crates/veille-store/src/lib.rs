//! # veille-store
//!
//! Blob persistence and the project record store for Veille.
//!
//! - [`BlobStore`]: string blobs by key, with a file-backed implementation
//!   ([`FileBlobStore`]) and an in-memory fake ([`MemoryBlobStore`]).
//! - [`RecordStore`]: the canonical project list, persisted in full under
//!   [`PROJECTS_KEY`] after every change.
//! - Selection helpers for the presentation layer's active project.

mod blob;
mod error;
mod record;
mod selection;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use error::StoreError;
pub use record::{PROJECTS_KEY, Persisted, RecordStore, load_all};
pub use selection::{SELECTION_KEY, clear_selection, load_selection, save_selection};
