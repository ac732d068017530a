//! Fail-delay guard.
//!
//! The host retries failed adhoc jobs with doubling backoff, and nothing
//! serializes those retries against the job's target; a job that keeps
//! half-succeeding can pile up duplicate remote uploads. This guard abandons
//! a job once the host-reported accumulated delay shows it has already
//! failed repeatedly.

use std::time::Duration;

use tracing::error;

use medialift_core::JobSpec;

/// Three failed attempts with doubling backoff starting at one minute add up
/// to four minutes of accumulated delay.
pub const DEFAULT_FAIL_DELAY_CEILING: Duration = Duration::from_secs(4 * 60);

/// Stateless stop policy: all retry bookkeeping lives with the host
/// scheduler, this only compares the delay it reports against a ceiling.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FailDelayPolicy {
    ceiling: Duration,
}

impl Default for FailDelayPolicy {
    fn default() -> Self {
        Self {
            ceiling: DEFAULT_FAIL_DELAY_CEILING,
        }
    }
}

impl FailDelayPolicy {
    pub fn new(ceiling: Duration) -> Self {
        Self { ceiling }
    }

    /// True when the accumulated fail delay says to abandon the job.
    pub fn should_stop(&self, fail_delay: Duration) -> bool {
        fail_delay > self.ceiling
    }
}

/// Result of running a body behind the guard.
#[derive(Debug, PartialEq, Eq)]
pub enum Guarded<T> {
    Ran(T),
    /// The body was never entered; exactly one diagnostic line was logged.
    Stopped,
}

/// Wrap a job body with the fail-delay policy.
///
/// On the stop path this makes no remote calls and emits one log line
/// naming the job's target, then reports back as work-free success so the
/// host stops rescheduling.
pub fn run_guarded<T>(
    policy: &FailDelayPolicy,
    fail_delay: Duration,
    spec: &JobSpec,
    body: impl FnOnce() -> T,
) -> Guarded<T> {
    if policy.should_stop(fail_delay) {
        let (kind, id) = spec.subject();
        error!(
            kind = %kind,
            id,
            fail_delay_secs = fail_delay.as_secs(),
            "stopping conversion of course module due to high fail delay"
        );
        return Guarded::Stopped;
    }
    Guarded::Ran(body())
}

#[cfg(test)]
mod tests {
    use super::*;
    use medialift_core::CourseId;

    fn spec() -> JobSpec {
        JobSpec::ConvertRestoredCourse {
            course_id: CourseId::new(9),
        }
    }

    #[test]
    fn delay_at_the_ceiling_still_runs() {
        let policy = FailDelayPolicy::default();
        assert!(!policy.should_stop(DEFAULT_FAIL_DELAY_CEILING));
        assert!(policy.should_stop(DEFAULT_FAIL_DELAY_CEILING + Duration::from_secs(1)));
    }

    #[test]
    fn body_runs_under_the_ceiling() {
        let ran = run_guarded(
            &FailDelayPolicy::default(),
            Duration::from_secs(60),
            &spec(),
            || 42,
        );
        assert_eq!(ran, Guarded::Ran(42));
    }

    #[test]
    fn body_is_never_entered_past_the_ceiling() {
        let mut entered = false;
        let ran = run_guarded(
            &FailDelayPolicy::default(),
            Duration::from_secs(5 * 60),
            &spec(),
            || entered = true,
        );
        assert_eq!(ran, Guarded::Stopped);
        assert!(!entered);
    }

    #[test]
    fn custom_ceiling_is_respected() {
        let policy = FailDelayPolicy::new(Duration::from_secs(10));
        assert!(policy.should_stop(Duration::from_secs(11)));
        assert!(!policy.should_stop(Duration::from_secs(10)));
    }
}
