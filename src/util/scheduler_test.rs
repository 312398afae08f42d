use super::*;
use std::rc::Rc;

fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    let make = move |label: &'static str| -> Task {
        let sink = sink.clone();
        Box::new(move || sink.borrow_mut().push(label))
    };
    (log, make)
}

#[test]
fn tasks_run_only_when_due() {
    let clock = ManualScheduler::new();
    let (log, task) = recorder();
    clock.schedule(Duration::from_millis(100), task("show"));

    clock.advance_ms(99);
    assert!(log.borrow().is_empty());
    clock.advance_ms(1);
    assert_eq!(*log.borrow(), vec!["show"]);
    assert_eq!(clock.pending(), 0);
}

#[test]
fn tasks_run_in_due_order_with_stable_ties() {
    let clock = ManualScheduler::new();
    let (log, task) = recorder();
    clock.schedule(Duration::from_millis(4000), task("hide"));
    clock.schedule(Duration::from_millis(100), task("a"));
    clock.schedule(Duration::from_millis(100), task("b"));

    clock.advance_ms(5000);
    assert_eq!(*log.borrow(), vec!["a", "b", "hide"]);
    assert_eq!(clock.now(), Duration::from_millis(5000));
}

#[test]
fn nested_schedules_are_relative_to_parent_due_time() {
    let clock = Rc::new(ManualScheduler::new());
    let fired_at = Rc::new(Cell::new(Duration::ZERO));

    let inner_clock = clock.clone();
    let inner_fired = fired_at.clone();
    clock.schedule(
        Duration::from_millis(4000),
        Box::new(move || {
            let at_clock = inner_clock.clone();
            inner_clock.schedule(
                Duration::from_millis(300),
                Box::new(move || inner_fired.set(at_clock.now())),
            );
        }),
    );

    clock.advance_ms(4299);
    assert_eq!(fired_at.get(), Duration::ZERO);
    clock.advance_ms(1);
    assert_eq!(fired_at.get(), Duration::from_millis(4300));
}
