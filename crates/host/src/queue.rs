//! Adhoc job queue seam.

use std::sync::{Arc, Mutex};

use medialift_core::ConversionJob;

/// Fire-and-forget enqueue into the host's adhoc job store.
///
/// The dispatcher never observes a return value; failed enqueues are the
/// host's problem, and execution (with its retry/backoff engine) is entirely
/// host-driven.
pub trait JobQueue: Send + Sync {
    fn enqueue(&self, job: ConversionJob);
}

impl<Q> JobQueue for Arc<Q>
where
    Q: JobQueue + ?Sized,
{
    fn enqueue(&self, job: ConversionJob) {
        (**self).enqueue(job);
    }
}

/// In-memory queue for tests/dev: records everything enqueued.
#[derive(Debug, Default)]
pub struct InMemoryJobQueue {
    jobs: Mutex<Vec<ConversionJob>>,
}

impl InMemoryJobQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything enqueued so far.
    pub fn jobs(&self) -> Vec<ConversionJob> {
        self.jobs.lock().expect("queue lock poisoned").clone()
    }

    /// Remove and return all queued jobs.
    pub fn drain(&self) -> Vec<ConversionJob> {
        std::mem::take(&mut *self.jobs.lock().expect("queue lock poisoned"))
    }
}

impl JobQueue for InMemoryJobQueue {
    fn enqueue(&self, job: ConversionJob) {
        // A poisoned lock only happens after a panicking test; losing the
        // enqueue there is fine.
        if let Ok(mut jobs) = self.jobs.lock() {
            jobs.push(job);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medialift_core::{CourseId, JobSpec, UserId};

    #[test]
    fn records_enqueued_jobs_in_order() {
        let queue = InMemoryJobQueue::new();
        queue.enqueue(ConversionJob::new(
            JobSpec::ConvertRestoredCourse {
                course_id: CourseId::new(1),
            },
            UserId::new(5),
        ));
        queue.enqueue(ConversionJob::new(
            JobSpec::ConvertRestoredCourse {
                course_id: CourseId::new(2),
            },
            UserId::new(5),
        ));

        let jobs = queue.drain();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].spec.subject().1, 1);
        assert_eq!(jobs[1].spec.subject().1, 2);
        assert!(queue.jobs().is_empty());
    }
}
