//! Module lifecycle and course lookup seam.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use medialift_core::{ContextId, CourseId, InstanceId, ModuleId, ModuleKind, TextField, UserId};
use medialift_media::EntryId;

/// The course fields the conversion logic reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub short_name: String,
    /// Default grouping inherited by replacement modules.
    pub default_grouping_id: u64,
}

/// A course module as placed in a course (visibility, grouping, section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInfo {
    pub id: ModuleId,
    pub kind: ModuleKind,
    pub instance: InstanceId,
    pub context_id: ContextId,
    pub course_id: CourseId,
    pub name: String,
    pub section: u32,
    pub visible: bool,
    pub group_mode: u8,
    /// Admin-assigned id number, carried over to the replacement module.
    pub id_number: String,
    /// Availability rules as the host's JSON blob, if any.
    pub availability: Option<String>,
}

/// The instance record behind a module: its text fields, plus the remote
/// entry id for video-resource instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleData {
    pub intro: String,
    pub intro_format: u8,
    /// Pages (and similar) carry a second text field.
    pub content: Option<String>,
    /// Present only on video-resource instances.
    pub entry_id: Option<EntryId>,
}

/// Descriptor for the replacement video-resource module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoModuleSpec {
    pub entry_id: EntryId,
    /// Player source URL embedded in the module.
    pub source: String,
    pub video_title: String,
    pub width: u32,
    pub height: u32,
    /// Encoded metadata blob stored alongside the module.
    pub metadata: String,
    pub name: String,
    pub intro: String,
    pub intro_format: u8,
    pub visible: bool,
    pub id_number: String,
    pub group_mode: u8,
    pub grouping_id: u64,
    pub availability: Option<String>,
    pub course_id: CourseId,
    pub section: u32,
}

/// What the host reports after creating a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedModule {
    pub instance: InstanceId,
    /// The remote entry id the created instance ended up with. Its presence
    /// is the success predicate for the whole conversion.
    pub entry_id: Option<EntryId>,
}

impl CreatedModule {
    /// True when the module was persisted with a usable remote asset.
    pub fn has_entry(&self) -> bool {
        self.entry_id.as_ref().is_some_and(|id| !id.is_empty())
    }
}

/// Module lifecycle and course lookups, backed by the host's database layer.
///
/// Reads can happen several times per job run; the only mutations are the
/// single commit point (create + delete) and text-field updates.
pub trait ModuleStore: Send + Sync {
    fn course(&self, id: CourseId) -> Result<Course>;

    /// Course and module info for a module id. Fails when the module has
    /// been deleted since the triggering event.
    fn course_and_module(&self, module: ModuleId) -> Result<(Course, ModuleInfo)>;

    /// All modules of a course (restore handling walks these).
    fn course_modules(&self, course: CourseId) -> Result<Vec<ModuleInfo>>;

    fn module_data(&self, kind: &ModuleKind, instance: InstanceId) -> Result<ModuleData>;

    /// Create a video-resource module via the host's module-creation
    /// facility.
    fn create_module(&self, spec: &VideoModuleSpec, course: &Course) -> Result<CreatedModule>;

    fn delete_module(&self, module: ModuleId) -> Result<()>;

    /// Overwrite one text field of a module instance.
    fn set_text_field(
        &self,
        kind: &ModuleKind,
        instance: InstanceId,
        field: TextField,
        text: &str,
    ) -> Result<()>;

    /// Drop any cached view of the course structure.
    fn invalidate_course_cache(&self, course: CourseId) -> Result<()>;

    /// Usernames of the course's capability-qualified admins — the users
    /// granted as editors/publishers on every upload for the course.
    fn course_admins(&self, course: CourseId) -> Result<Vec<String>>;

    fn username(&self, user: UserId) -> Result<String>;
}
