//! Conversion failure taxonomy.

use thiserror::Error;

use medialift_media::{EntryId, MediaError};

/// Everything that can abort a conversion run.
///
/// Each remote stage gets its own variant so failures are logged distinctly;
/// none of these propagate past the job runner, which converts them into a
/// logged no-op outcome.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("the base category path must be set in admin settings")]
    MissingBaseCategoryPath,

    #[error("the player skin must be set in admin settings")]
    MissingPlayerSkin,

    #[error("failed to copy file {filename} to a temporary location")]
    TempCopy {
        filename: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("could not establish a media session")]
    Session(#[source] MediaError),

    #[error("could not upload the video")]
    Upload(#[source] MediaError),

    #[error("could not create the media entry")]
    EntryCreate(#[source] MediaError),

    #[error("could not retrieve categories")]
    CategoryList(#[source] MediaError),

    #[error("could not find the base category {0}")]
    BaseCategoryMissing(String),

    #[error("could not create the course category")]
    CourseCategoryCreate(#[source] MediaError),

    #[error("could not create the leaf category")]
    LeafCategoryCreate(#[source] MediaError),

    #[error("could not add the entry to its category")]
    CategoryAttach(#[source] MediaError),

    #[error("could not update the media entry {entry}")]
    CollaboratorUpdate {
        entry: EntryId,
        #[source]
        source: MediaError,
    },

    /// The host created the module but it carries no remote entry id, so the
    /// replacement cannot be trusted (and the old module must stay).
    #[error("the created module is missing a remote entry id")]
    MissingEntryId,

    #[error("could not encode entry metadata")]
    Metadata(#[from] serde_json::Error),

    /// Opaque failure from a host collaborator (module deleted since the
    /// event fired, database unavailable, ...).
    #[error(transparent)]
    Host(#[from] anyhow::Error),
}
