//! `medialift-host` — the contracts this plugin expects from its host.
//!
//! The host application supplies the event bus, the adhoc job runner
//! (including retry/backoff), the database layer, and file storage. This
//! crate specifies only the slices of those the conversion logic touches,
//! as trait seams with opaque (`anyhow`) errors; deployments implement them
//! over the real host APIs, tests over in-memory fakes.

pub mod config;
pub mod files;
pub mod modules;
pub mod queue;

pub use config::PluginConfig;
pub use files::{AreaFile, FileStore, is_video};
pub use modules::{
    Course, CreatedModule, ModuleData, ModuleInfo, ModuleStore, VideoModuleSpec,
};
pub use queue::{InMemoryJobQueue, JobQueue};
