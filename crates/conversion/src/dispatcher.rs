//! Event-to-job dispatch.

use medialift_core::{ContentEvent, ConversionJob, JobSpec, ModuleEvent, ModuleKind, UserId};
use medialift_host::JobQueue;

/// Maps incoming content-change events to queued background jobs.
///
/// Nothing is processed synchronously; each enqueue is fire-and-forget into
/// the host scheduler.
pub struct Dispatcher<Q> {
    queue: Q,
}

impl<Q: JobQueue> Dispatcher<Q> {
    pub fn new(queue: Q) -> Self {
        Self { queue }
    }

    /// Observe one event, enqueueing whatever jobs it calls for.
    pub fn on_event(&self, event: &ContentEvent, acting_user: UserId) {
        match event {
            ContentEvent::ModuleCreated(data) | ContentEvent::ModuleUpdated(data) => {
                self.on_module_change(data, acting_user);
            }
            ContentEvent::CourseRestored { course_id } => {
                self.queue.enqueue(ConversionJob::new(
                    JobSpec::ConvertRestoredCourse {
                        course_id: *course_id,
                    },
                    acting_user,
                ));
            }
        }
    }

    fn on_module_change(&self, data: &ModuleEvent, acting_user: UserId) {
        // File resources are fully handled by the convert job, intro
        // included; a separate text job would double-convert.
        if data.module_kind == ModuleKind::FileResource {
            self.queue.enqueue(ConversionJob::new(
                JobSpec::ConvertResource {
                    event: data.clone(),
                },
                acting_user,
            ));
            return;
        }
        // Existing video resources need their collaborator list refreshed.
        if data.module_kind == ModuleKind::VideoResource {
            self.queue.enqueue(ConversionJob::new(
                JobSpec::AddCollaborators {
                    event: data.clone(),
                },
                acting_user,
            ));
        }
        self.queue.enqueue(ConversionJob::new(
            JobSpec::ConvertText {
                event: data.clone(),
            },
            acting_user,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medialift_core::{ContextId, CourseId, InstanceId, ModuleId};
    use medialift_host::InMemoryJobQueue;
    use std::sync::Arc;

    fn module_event(kind: ModuleKind) -> ContentEvent {
        ContentEvent::ModuleCreated(ModuleEvent {
            module_id: ModuleId::new(42),
            instance_id: InstanceId::new(17),
            context_id: ContextId::new(99),
            course_id: CourseId::new(7),
            module_kind: kind,
            module_name: "Week 1 lecture".to_string(),
        })
    }

    fn dispatch(event: &ContentEvent) -> Vec<ConversionJob> {
        let queue = Arc::new(InMemoryJobQueue::new());
        let dispatcher = Dispatcher::new(queue.clone());
        dispatcher.on_event(event, UserId::new(3));
        queue.drain()
    }

    #[test]
    fn file_resource_gets_exactly_one_convert_job() {
        let jobs = dispatch(&module_event(ModuleKind::FileResource));
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].spec.kind_name(), "convert_resource");
        assert_eq!(jobs[0].acting_user, UserId::new(3));
    }

    #[test]
    fn video_resource_gets_collaborators_and_text_jobs() {
        let jobs = dispatch(&module_event(ModuleKind::VideoResource));
        let kinds: Vec<_> = jobs.iter().map(|j| j.spec.kind_name()).collect();
        assert_eq!(kinds, vec!["add_collaborators", "convert_text"]);
    }

    #[test]
    fn other_modules_get_only_a_text_job() {
        let jobs = dispatch(&module_event(ModuleKind::Page));
        let kinds: Vec<_> = jobs.iter().map(|j| j.spec.kind_name()).collect();
        assert_eq!(kinds, vec!["convert_text"]);
    }

    #[test]
    fn updates_dispatch_like_creates() {
        let ContentEvent::ModuleCreated(data) = module_event(ModuleKind::FileResource) else {
            unreachable!()
        };
        let jobs = dispatch(&ContentEvent::ModuleUpdated(data));
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].spec.kind_name(), "convert_resource");
    }

    #[test]
    fn course_restore_gets_a_course_scoped_job() {
        let jobs = dispatch(&ContentEvent::CourseRestored {
            course_id: CourseId::new(7),
        });
        assert_eq!(jobs.len(), 1);
        assert_eq!(
            jobs[0].spec,
            JobSpec::ConvertRestoredCourse {
                course_id: CourseId::new(7)
            }
        );
        assert_eq!(jobs[0].acting_user, UserId::new(3));
    }
}
