//! Host-facing job entry point.
//!
//! The host's worker hands a queued job and its current accumulated fail
//! delay to `JobRunner::run`. Whatever happens inside, no error propagates
//! back: every failure is logged with enough context to find the affected
//! record and reported as a terminal outcome, leaving retry scheduling
//! entirely to the host.

use std::time::Duration;

use tracing::{info, warn};

use medialift_core::{ConversionJob, JobSpec, ModuleEvent, ModuleKind, TextField, UserId};

use crate::guard::{FailDelayPolicy, Guarded, run_guarded};
use crate::orchestrator::{Conversion, Converter};
use crate::text;

/// Terminal outcome of one job execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    /// The job's side effects were applied.
    Completed,
    /// Abandoned by the fail-delay guard before doing anything.
    Skipped,
    /// Nothing to do (no candidate file, no markers, ...).
    NoWork,
    /// A failure was caught and logged; no further action.
    Failed,
}

/// Runs conversion jobs behind the fail-delay guard.
pub struct JobRunner {
    converter: Converter,
    policy: FailDelayPolicy,
}

impl JobRunner {
    pub fn new(converter: Converter) -> Self {
        Self {
            converter,
            policy: FailDelayPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FailDelayPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Execute one job. `fail_delay` is the accumulated backoff the host
    /// reports for this job instance.
    pub fn run(&self, job: &ConversionJob, fail_delay: Duration) -> JobOutcome {
        match run_guarded(&self.policy, fail_delay, &job.spec, || self.execute(job)) {
            Guarded::Stopped => JobOutcome::Skipped,
            Guarded::Ran(outcome) => outcome,
        }
    }

    fn execute(&self, job: &ConversionJob) -> JobOutcome {
        match &job.spec {
            JobSpec::ConvertResource { event } => self.convert_resource(event, job.acting_user),
            JobSpec::ConvertText { event } => self.convert_text(event, job.acting_user),
            JobSpec::AddCollaborators { event } => self.add_collaborators(event, job.acting_user),
            JobSpec::ConvertRestoredCourse { course_id } => {
                match self
                    .converter
                    .convert_restored_course(*course_id, job.acting_user)
                {
                    Ok(()) => JobOutcome::Completed,
                    Err(err) => {
                        warn!(course = %course_id, error = %err, "could not convert restored course");
                        JobOutcome::Failed
                    }
                }
            }
        }
    }

    fn convert_resource(&self, event: &ModuleEvent, user: UserId) -> JobOutcome {
        // The module may have been deleted since the job was queued.
        let (course, info) = match self.converter.modules().course_and_module(event.module_id) {
            Ok(found) => found,
            Err(err) => {
                info!(
                    kind = %event.module_kind,
                    module = %event.module_id,
                    error = %err,
                    "could not convert course module"
                );
                return JobOutcome::Failed;
            }
        };
        match self.converter.convert_and_replace_module(&course, &info, user) {
            Ok(Conversion::Replaced) => JobOutcome::Completed,
            Ok(Conversion::NoCandidate) | Ok(Conversion::DelegatedToText) => JobOutcome::NoWork,
            Err(err) => {
                warn!(
                    kind = %event.module_kind,
                    module = %event.module_id,
                    course = %event.course_id,
                    error = %err,
                    "could not convert course module"
                );
                JobOutcome::Failed
            }
        }
    }

    fn convert_text(&self, event: &ModuleEvent, user: UserId) -> JobOutcome {
        let info = match self.converter.modules().course_and_module(event.module_id) {
            Ok((_, info)) => info,
            Err(err) => {
                info!(
                    kind = %event.module_kind,
                    module = %event.module_id,
                    error = %err,
                    "could not convert course module"
                );
                return JobOutcome::Failed;
            }
        };

        let mut changed = false;
        let mut fields = vec![TextField::Intro];
        // Pages carry page content that must be rewritten as well.
        if info.kind == ModuleKind::Page {
            fields.push(TextField::Content);
        }
        for field in fields {
            match text::rewrite_module_text(&self.converter, &info, field, user) {
                Ok(Some(new_text)) => {
                    if let Err(err) = self.converter.modules().set_text_field(
                        &info.kind,
                        info.instance,
                        field,
                        &new_text,
                    ) {
                        warn!(
                            kind = %info.kind,
                            module = %info.id,
                            field = %field,
                            error = %err,
                            "could not store rewritten text"
                        );
                        return JobOutcome::Failed;
                    }
                    changed = true;
                }
                Ok(None) => {}
                Err(err) => {
                    warn!(
                        kind = %info.kind,
                        module = %info.id,
                        field = %field,
                        error = %err,
                        "could not convert course module"
                    );
                    return JobOutcome::Failed;
                }
            }
        }
        if changed {
            JobOutcome::Completed
        } else {
            JobOutcome::NoWork
        }
    }

    fn add_collaborators(&self, event: &ModuleEvent, user: UserId) -> JobOutcome {
        match self.converter.add_collaborators(event, user) {
            Ok(()) => JobOutcome::Completed,
            Err(err) => {
                warn!(
                    kind = %event.module_kind,
                    instance = %event.instance_id,
                    error = %err,
                    "could not add collaborators"
                );
                JobOutcome::Failed
            }
        }
    }
}
