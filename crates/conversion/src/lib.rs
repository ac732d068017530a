//! `medialift-conversion` — the conversion logic surface.
//!
//! Ties the host seams and the remote media client together:
//!
//! - `dispatcher`: maps content-change events to queued jobs
//! - `guard`: fail-delay ceiling applied around every job body
//! - `orchestrator`: upload/organize/replace sequence for file resources
//! - `text`: embedded-video link rewriting in module text fields
//! - `runner`: the host-facing job entry point (never propagates errors)

pub mod dispatcher;
pub mod embed;
pub mod error;
pub mod guard;
pub mod orchestrator;
pub mod runner;
pub mod text;


pub use dispatcher::Dispatcher;
pub use error::ConvertError;
pub use guard::{FailDelayPolicy, Guarded, run_guarded};
pub use orchestrator::{Conversion, Converter};
pub use runner::{JobOutcome, JobRunner};
