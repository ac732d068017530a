//! `medialift-media` — contract for the remote media-hosting service.
//!
//! The actual client (wire protocol, credentials, session tokens) is a
//! vendored SDK supplied by the deployment; this crate only specifies the
//! calls the conversion logic makes against it and the shapes it gets back.

pub mod category;
pub mod client;
pub mod entry;

pub use category::{CATEGORY_LEAF, CategoryPath};
pub use client::{MediaError, MediaService, MediaSession};
pub use entry::{Category, CategoryId, EntryDraft, EntryId, MediaEntry, UploadToken};
