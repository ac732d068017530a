//! Content-change event payloads delivered by the host.

use serde::{Deserialize, Serialize};

use crate::id::{ContextId, CourseId, InstanceId, ModuleId};
use crate::module::ModuleKind;

/// Snapshot of a course-module create/update event.
///
/// These are the fields the host hands to observers; jobs carry a copy so
/// they can run long after the event fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleEvent {
    /// The course module id (the host calls this the object id).
    pub module_id: ModuleId,
    /// The activity instance behind the module.
    pub instance_id: InstanceId,
    pub context_id: ContextId,
    pub course_id: CourseId,
    pub module_kind: ModuleKind,
    /// Display name of the module at event time.
    pub module_name: String,
}

/// A course-content event observed from the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ContentEvent {
    ModuleCreated(ModuleEvent),
    ModuleUpdated(ModuleEvent),
    CourseRestored { course_id: CourseId },
}
