//! `medialift-core` — domain foundation for the media conversion plugin.
//!
//! This crate contains **pure domain** primitives (no host or remote-service
//! concerns): typed identifiers, the module-kind taxonomy, content-change
//! event payloads, and the conversion job records queued for the host's
//! background worker.

pub mod event;
pub mod id;
pub mod job;
pub mod module;

pub use event::{ContentEvent, ModuleEvent};
pub use id::{ContextId, CourseId, InstanceId, ModuleId, UserId};
pub use job::{ConversionJob, JobId, JobSpec};
pub use module::{ModuleKind, TextField};
