use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use web_time::{Duration, Instant};

pub type TaskId = u64;

pub type UiTask = Box<dyn FnOnce()>;

/// Host-provided queue of deferred work on the UI thread.
///
/// Implementations must run tasks on the thread that owns the attacher and
/// never while another task from the same queue is running. Cancelling an id
/// that already ran (or never existed) is a no-op.
pub trait UiScheduler {
    fn post_delayed(&self, delay: Duration, task: UiTask) -> TaskId;

    fn cancel(&self, id: TaskId);

    fn post(&self, task: UiTask) -> TaskId {
        self.post_delayed(Duration::ZERO, task)
    }
}

/// Handle to a scheduled task. Dropping the handle cancels the task.
pub struct TaskRegistration {
    scheduler: Rc<dyn UiScheduler>,
    id: Option<TaskId>,
}

impl TaskRegistration {
    pub fn schedule(
        scheduler: &Rc<dyn UiScheduler>,
        delay: Duration,
        task: impl FnOnce() + 'static,
    ) -> Self {
        let id = scheduler.post_delayed(delay, Box::new(task));
        Self {
            scheduler: Rc::clone(scheduler),
            id: Some(id),
        }
    }

    pub fn id(&self) -> Option<TaskId> {
        self.id
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel(id);
        }
    }

    /// Forgets the task without cancelling it, e.g. after it has already run.
    pub fn release(mut self) {
        self.id = None;
    }
}

impl Drop for TaskRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel(id);
        }
    }
}

impl std::fmt::Debug for TaskRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskRegistration")
            .field("id", &self.id)
            .finish()
    }
}

#[derive(Default)]
struct SchedulerState {
    now: Duration,
    next_id: TaskId,
    queue: BTreeMap<(Duration, TaskId), UiTask>,
    deadlines: FxHashMap<TaskId, Duration>,
}

impl SchedulerState {
    fn pop_due(&mut self, target: Duration) -> Option<UiTask> {
        let (&(deadline, id), _) = self.queue.iter().next()?;
        if deadline > target {
            return None;
        }
        self.deadlines.remove(&id);
        self.now = self.now.max(deadline);
        self.queue.remove(&(deadline, id))
    }
}

/// Virtual-time scheduler driven explicitly by its owner.
///
/// Time only moves when [`ManualScheduler::advance_by`] is called, which
/// makes every deferred transition deterministic. Tasks with equal deadlines
/// run in the order they were posted.
#[derive(Default)]
pub struct ManualScheduler {
    state: RefCell<SchedulerState>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed virtual time since creation.
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    pub fn pending_count(&self) -> usize {
        self.state.borrow().queue.len()
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.state.borrow().deadlines.contains_key(&id)
    }

    /// Deadline of the earliest queued task, relative to creation.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.state
            .borrow()
            .queue
            .keys()
            .next()
            .map(|(deadline, _)| *deadline)
    }

    /// Runs everything due at the current instant without moving time.
    pub fn run_pending(&self) -> usize {
        self.advance_by(Duration::ZERO)
    }

    /// Moves time forward, running due tasks in deadline order.
    ///
    /// Tasks posted by running tasks are picked up in the same call when
    /// their deadline falls inside the window. Returns the number of tasks
    /// that ran.
    pub fn advance_by(&self, delta: Duration) -> usize {
        let target = self.state.borrow().now + delta;
        self.advance_to(target)
    }

    pub fn advance_to(&self, target: Duration) -> usize {
        let mut ran = 0;
        loop {
            // The borrow must end before the task runs: tasks post and cancel.
            let task = self.state.borrow_mut().pop_due(target);
            match task {
                Some(task) => {
                    task();
                    ran += 1;
                }
                None => break,
            }
        }
        let mut state = self.state.borrow_mut();
        state.now = state.now.max(target);
        ran
    }
}

impl UiScheduler for ManualScheduler {
    fn post_delayed(&self, delay: Duration, task: UiTask) -> TaskId {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        let deadline = state.now + delay;
        state.queue.insert((deadline, id), task);
        state.deadlines.insert(id, deadline);
        log::trace!("scheduled ui task {id} at {deadline:?}");
        id
    }

    fn cancel(&self, id: TaskId) {
        let removed = {
            let mut state = self.state.borrow_mut();
            let deadline = state.deadlines.remove(&id);
            deadline.and_then(|deadline| state.queue.remove(&(deadline, id)))
        };
        // Dropped outside the borrow; the task may own registrations.
        if removed.is_some() {
            log::trace!("cancelled ui task {id}");
        }
    }
}

/// Wall-clock scheduler for hosts with their own event loop.
///
/// The host calls [`SystemScheduler::pump`] from its loop and may use
/// [`SystemScheduler::next_wakeup`] to sleep until the next deadline instead
/// of polling.
pub struct SystemScheduler {
    origin: Instant,
    queue: ManualScheduler,
}

impl Default for SystemScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemScheduler {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            queue: ManualScheduler::new(),
        }
    }

    /// Runs every task whose deadline has passed.
    pub fn pump(&self) -> usize {
        self.pump_at(Instant::now())
    }

    pub fn pump_at(&self, now: Instant) -> usize {
        let elapsed = now.saturating_duration_since(self.origin);
        self.queue.advance_to(elapsed)
    }

    pub fn next_wakeup(&self) -> Option<Instant> {
        self.queue
            .next_deadline()
            .map(|deadline| self.origin + deadline)
    }

    pub fn has_pending(&self) -> bool {
        self.queue.pending_count() > 0
    }
}

impl UiScheduler for SystemScheduler {
    fn post_delayed(&self, delay: Duration, task: UiTask) -> TaskId {
        // Deadlines are relative to the origin, so account for wall time
        // that passed since the last pump.
        let elapsed = Instant::now().saturating_duration_since(self.origin);
        let offset = elapsed.saturating_sub(self.queue.now());
        self.queue.post_delayed(offset + delay, task)
    }

    fn cancel(&self, id: TaskId) {
        self.queue.cancel(id)
    }
}

#[cfg(test)]
#[path = "tests/scheduler_tests.rs"]
mod tests;
