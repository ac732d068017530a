//! Conversion job records.
//!
//! A job is a snapshot of event data plus the acting user, tagged with the
//! work it asks for. Jobs are created by the dispatcher and owned by the
//! host's adhoc job queue; all retry bookkeeping (attempt counts, fail
//! delay) lives with the host scheduler, not here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::event::ModuleEvent;
use crate::id::{CourseId, UserId};

/// Unique job identifier (queue-side; the host assigns its own ids too).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for JobId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a conversion job should do, with the data it needs to do it.
///
/// One variant per job kind, with named fields validated at construction
/// rather than a loose bag of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JobSpec {
    /// Replace a file-resource module with a remote-video module.
    ConvertResource { event: ModuleEvent },
    /// Rewrite embedded video links in a module's text fields.
    ConvertText { event: ModuleEvent },
    /// Refresh the collaborator list of an existing remote asset.
    AddCollaborators { event: ModuleEvent },
    /// Convert every file-resource module of a restored course.
    ConvertRestoredCourse { course_id: CourseId },
}

impl JobSpec {
    /// Stable kind tag, used for routing and logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            JobSpec::ConvertResource { .. } => "convert_resource",
            JobSpec::ConvertText { .. } => "convert_text",
            JobSpec::AddCollaborators { .. } => "add_collaborators",
            JobSpec::ConvertRestoredCourse { .. } => "convert_restored_course",
        }
    }

    /// The (module kind, numeric id) pair identifying the job's target in
    /// diagnostic log lines. Course-scoped jobs report the course id.
    pub fn subject(&self) -> (String, u64) {
        match self {
            JobSpec::ConvertResource { event }
            | JobSpec::ConvertText { event }
            | JobSpec::AddCollaborators { event } => (
                event.module_kind.host_name().to_string(),
                event.module_id.as_u64(),
            ),
            JobSpec::ConvertRestoredCourse { course_id } => {
                ("course".to_string(), course_id.as_u64())
            }
        }
    }
}

/// A queued background job: spec + acting user identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionJob {
    pub id: JobId,
    pub spec: JobSpec,
    /// The user whose identity the remote session is opened under.
    pub acting_user: UserId,
    pub created_at: DateTime<Utc>,
}

impl ConversionJob {
    pub fn new(spec: JobSpec, acting_user: UserId) -> Self {
        Self {
            id: JobId::new(),
            spec,
            acting_user,
            created_at: Utc::now(),
        }
    }
}
