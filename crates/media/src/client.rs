//! Client abstraction over the vendored media-service SDK.

use std::path::Path;

use thiserror::Error;

use crate::entry::{Category, CategoryId, EntryDraft, EntryId, MediaEntry, UploadToken};

/// Failure reported by the remote media service.
///
/// The SDK's own exceptions are flattened into these variants at the adapter
/// boundary; the conversion logic only ever branches on which call failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MediaError {
    #[error("could not establish a media session: {0}")]
    Session(String),

    #[error("upload failed: {0}")]
    Upload(String),

    #[error("entry creation failed: {0}")]
    EntryCreate(String),

    #[error("category operation failed: {0}")]
    Category(String),

    #[error("entry update failed: {0}")]
    EntryUpdate(String),
}

/// Entry point to the remote service.
///
/// One session is opened per job run and never reused across jobs; the
/// credentials behind it belong to the SDK adapter, the plugin only supplies
/// the acting user's username.
pub trait MediaService: Send + Sync {
    fn open_session(&self, username: &str) -> Result<Box<dyn MediaSession>, MediaError>;
}

/// An authenticated session against the remote service.
pub trait MediaSession {
    /// Upload file content; the returned token is redeemed by `add_entry`.
    fn upload(&self, path: &Path) -> Result<UploadToken, MediaError>;

    /// Create a media entry from previously uploaded content.
    fn add_entry(&self, draft: &EntryDraft, token: &UploadToken) -> Result<MediaEntry, MediaError>;

    /// List categories whose full path equals `full_name` exactly.
    fn list_categories(&self, full_name: &str) -> Result<Vec<Category>, MediaError>;

    /// Create a category under `parent`.
    fn add_category(&self, parent: CategoryId, name: &str) -> Result<Category, MediaError>;

    /// Attach an entry to a category.
    fn attach_to_category(&self, category: CategoryId, entry: &EntryId) -> Result<(), MediaError>;

    /// Replace the entry's entitled editor/publisher lists.
    fn update_collaborators(&self, entry: &EntryId, users: &[String]) -> Result<(), MediaError>;
}
