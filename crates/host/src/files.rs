//! File-storage seam.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use medialift_core::ContextId;

/// A file stored in a host content area.
pub trait AreaFile: Send + Sync {
    fn filename(&self) -> &str;

    /// MIME type as recorded by the host (e.g. `video/mp4`).
    fn mime_type(&self) -> &str;

    fn size(&self) -> u64;

    /// Copy the file content to a temporary path on local disk. The caller
    /// owns the copy and removes it when done.
    fn copy_to_temp(&self) -> Result<PathBuf>;
}

/// Listing of files by (context, component, area).
///
/// The host preserves no defined ordering for an area's files; callers that
/// care (the main-video scan) must pick a deterministic rule of their own.
pub trait FileStore: Send + Sync {
    fn area_files(
        &self,
        context: ContextId,
        component: &str,
        area: &str,
    ) -> Result<Vec<Arc<dyn AreaFile>>>;
}

/// A video file by MIME-type prefix, the way the host classifies media.
pub fn is_video(file: &dyn AreaFile) -> bool {
    file.mime_type().starts_with("video")
}
