use super::*;
use std::cell::RefCell;
use std::rc::Rc;

fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> UiTask) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let make = move |label: &'static str| -> UiTask {
        let sink = Rc::clone(&sink);
        Box::new(move || sink.borrow_mut().push(label))
    };
    (log, make)
}

#[test]
fn tasks_run_in_deadline_order() {
    let scheduler = ManualScheduler::new();
    let (log, task) = recorder();

    scheduler.post_delayed(Duration::from_millis(30), task("late"));
    scheduler.post_delayed(Duration::from_millis(10), task("early"));
    scheduler.post(task("now"));

    assert_eq!(scheduler.advance_by(Duration::from_millis(20)), 2);
    assert_eq!(*log.borrow(), vec!["now", "early"]);
    assert_eq!(scheduler.now(), Duration::from_millis(20));

    scheduler.advance_by(Duration::from_millis(10));
    assert_eq!(*log.borrow(), vec!["now", "early", "late"]);
    assert_eq!(scheduler.pending_count(), 0);
}

#[test]
fn task_does_not_run_one_tick_before_deadline() {
    let scheduler = ManualScheduler::new();
    let (log, task) = recorder();
    scheduler.post_delayed(Duration::from_millis(1000), task("minimize"));

    scheduler.advance_by(Duration::from_millis(999));
    assert!(log.borrow().is_empty());

    scheduler.advance_by(Duration::from_millis(1));
    assert_eq!(*log.borrow(), vec!["minimize"]);
}

#[test]
fn cancelled_task_never_runs() {
    let scheduler = ManualScheduler::new();
    let (log, task) = recorder();
    let id = scheduler.post_delayed(Duration::from_millis(5), task("cancelled"));
    assert!(scheduler.is_pending(id));

    scheduler.cancel(id);
    scheduler.cancel(id);
    assert!(!scheduler.is_pending(id));

    scheduler.advance_by(Duration::from_millis(50));
    assert!(log.borrow().is_empty());
}

#[test]
fn registration_cancels_on_drop() {
    let scheduler: Rc<ManualScheduler> = Rc::new(ManualScheduler::new());
    let handle: Rc<dyn UiScheduler> = scheduler.clone();
    let (log, _) = recorder();

    {
        let sink = Rc::clone(&log);
        let _registration = TaskRegistration::schedule(&handle, Duration::from_millis(5), move || {
            sink.borrow_mut().push("dropped")
        });
    }
    scheduler.advance_by(Duration::from_millis(10));
    assert!(log.borrow().is_empty());

    let sink = Rc::clone(&log);
    let registration = TaskRegistration::schedule(&handle, Duration::from_millis(5), move || {
        sink.borrow_mut().push("kept")
    });
    scheduler.advance_by(Duration::from_millis(5));
    registration.release();
    assert_eq!(*log.borrow(), vec!["kept"]);
}

#[test]
fn tasks_posted_from_tasks_run_within_window() {
    let scheduler = Rc::new(ManualScheduler::new());
    let (log, task) = recorder();
    let task = Rc::new(task);

    {
        let inner = Rc::clone(&scheduler);
        let task = Rc::clone(&task);
        scheduler.post_delayed(
            Duration::from_millis(10),
            Box::new(move || {
                inner.post_delayed(Duration::from_millis(5), task("chained"));
            }),
        );
    }

    scheduler.advance_by(Duration::from_millis(14));
    assert!(log.borrow().is_empty());
    scheduler.advance_by(Duration::from_millis(1));
    assert_eq!(*log.borrow(), vec!["chained"]);
}

#[test]
fn system_scheduler_runs_due_tasks_when_pumped() {
    let scheduler = SystemScheduler::new();
    let (log, task) = recorder();
    scheduler.post_delayed(Duration::from_millis(5), task("due"));
    assert!(scheduler.has_pending());

    let wakeup = scheduler.next_wakeup().expect("deadline queued");
    assert_eq!(scheduler.pump_at(wakeup + Duration::from_millis(1)), 1);
    assert_eq!(*log.borrow(), vec!["due"]);
    assert!(scheduler.next_wakeup().is_none());
}
