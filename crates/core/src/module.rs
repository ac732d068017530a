//! Module-kind taxonomy and text-bearing fields.

use serde::{Deserialize, Serialize};

/// The kind of a course module, as named by the host.
///
/// Only three kinds get special treatment: plain file resources (candidates
/// for conversion), video resources (already backed by a remote asset), and
/// pages (which carry a second text field). Everything else is `Other` and
/// still gets its intro text scanned for embedded videos.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModuleKind {
    /// An uploaded-file resource ("resource").
    FileResource,
    /// A remote-video resource ("kalvidres").
    VideoResource,
    /// A rich-text page ("page").
    Page,
    /// Any other module kind, kept verbatim.
    Other(String),
}

impl ModuleKind {
    /// The host's name for this module kind.
    pub fn host_name(&self) -> &str {
        match self {
            ModuleKind::FileResource => "resource",
            ModuleKind::VideoResource => "kalvidres",
            ModuleKind::Page => "page",
            ModuleKind::Other(name) => name,
        }
    }

    pub fn from_host_name(name: &str) -> Self {
        match name {
            "resource" => ModuleKind::FileResource,
            "kalvidres" => ModuleKind::VideoResource,
            "page" => ModuleKind::Page,
            other => ModuleKind::Other(other.to_string()),
        }
    }

    /// The component string used when listing this module's file areas.
    pub fn component(&self) -> String {
        format!("mod_{}", self.host_name())
    }
}

impl From<String> for ModuleKind {
    fn from(value: String) -> Self {
        Self::from_host_name(&value)
    }
}

impl From<ModuleKind> for String {
    fn from(value: ModuleKind) -> Self {
        value.host_name().to_string()
    }
}

impl core::fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.host_name())
    }
}

/// A text field on a module instance that can carry embedded-file markers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextField {
    Intro,
    Content,
}

impl TextField {
    /// Database column / file-area name for this field.
    pub fn name(&self) -> &'static str {
        match self {
            TextField::Intro => "intro",
            TextField::Content => "content",
        }
    }
}

impl core::fmt::Display for TextField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_names_round_trip() {
        for name in ["resource", "kalvidres", "page", "forum"] {
            let kind = ModuleKind::from_host_name(name);
            assert_eq!(kind.host_name(), name);
        }
        assert_eq!(
            ModuleKind::from_host_name("forum"),
            ModuleKind::Other("forum".to_string())
        );
    }

    #[test]
    fn component_is_prefixed() {
        assert_eq!(ModuleKind::FileResource.component(), "mod_resource");
        assert_eq!(ModuleKind::Page.component(), "mod_page");
    }
}
