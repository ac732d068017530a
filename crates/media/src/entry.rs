//! Remote asset and category records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a remote media entry (opaque, service-assigned).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A persisted entry id can come back blank from the host; treat that
    /// the same as absent.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl core::fmt::Display for EntryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Identifier of a remote category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

impl core::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Token returned by the upload call, redeemed when creating the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UploadToken(pub String);

/// The fields we set when creating a remote entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub name: String,
    pub description: String,
    /// Usernames entitled to edit the entry.
    pub entitled_editors: Vec<String>,
    /// Usernames entitled to publish the entry.
    pub entitled_publishers: Vec<String>,
}

impl EntryDraft {
    /// Draft with the same user list as editors and publishers, which is how
    /// course admins are granted on every upload.
    pub fn with_collaborators(
        name: impl Into<String>,
        description: impl Into<String>,
        collaborators: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            entitled_editors: collaborators.clone(),
            entitled_publishers: collaborators,
        }
    }
}

/// A remote media entry as reported by the service after creation.
///
/// Never mutated after creation except for the collaborator lists
/// (see `MediaSession::update_collaborators`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaEntry {
    pub id: EntryId,
    pub name: String,
    pub description: String,
    pub thumbnail_url: Option<String>,
    /// Duration in seconds, when the service has finished probing.
    pub duration: Option<u64>,
    /// Owning username on the remote service.
    pub owner: Option<String>,
    pub tags: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A remote category node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub parent_id: Option<CategoryId>,
    /// Full `>`-joined path from the root.
    pub full_name: String,
}
