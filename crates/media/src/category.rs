//! Category paths mirroring course organization on the remote service.

use serde::{Deserialize, Serialize};

/// Leaf segment appended under every course category. Entries are attached
/// to this node, not to the course node itself.
pub const CATEGORY_LEAF: &str = "InContext";

/// The category path for one course: `base > course segment > leaf`.
///
/// Derived, never persisted; recomputed per course on each job run. The base
/// path is created administratively and must already exist; the course and
/// leaf segments are created on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPath {
    base: String,
    course_segment: String,
}

impl CategoryPath {
    pub fn new(base: impl Into<String>, course_segment: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            course_segment: course_segment.into(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn course_segment(&self) -> &str {
        &self.course_segment
    }

    /// Full path of the leaf node, as the service's category listing filters
    /// expect it.
    pub fn full_name(&self) -> String {
        format!("{}>{}>{}", self.base, self.course_segment, CATEGORY_LEAF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_segments() {
        let path = CategoryPath::new("server>site>channels", "1234");
        assert_eq!(path.full_name(), "server>site>channels>1234>InContext");
    }
}
