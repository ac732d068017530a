//! Admin-editable plugin settings.

use serde::{Deserialize, Serialize};

/// Settings surfaced on the host's admin page for this plugin.
///
/// The required fields are validated where they are used, not at load time,
/// so a half-configured plugin degrades into logged per-job failures instead
/// of refusing to start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Base remote-category path, e.g. `server>site>channels`. Required;
    /// the path must already exist on the service.
    pub base_category_path: Option<String>,
    /// Numeric skin identifier controlling the embedded player's look.
    /// Required.
    pub player_skin: Option<u64>,
    /// Use the course short name instead of the numeric course id as the
    /// category path segment.
    #[serde(default)]
    pub use_short_name: bool,
    /// Base URL of the media service frontend used in player embed links.
    pub service_url: String,
}

impl PluginConfig {
    pub fn new(
        base_category_path: impl Into<String>,
        player_skin: u64,
        service_url: impl Into<String>,
    ) -> Self {
        Self {
            base_category_path: Some(base_category_path.into()),
            player_skin: Some(player_skin),
            use_short_name: false,
            service_url: service_url.into(),
        }
    }

    pub fn with_short_name(mut self, use_short_name: bool) -> Self {
        self.use_short_name = use_short_name;
        self
    }
}
