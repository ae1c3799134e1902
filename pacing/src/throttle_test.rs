use super::*;

use crate::scheduler::ManualScheduler;

type Calls<A> = Rc<RefCell<Vec<(Duration, A)>>>;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn recording<A: 'static>(limit: Duration, clock: &ManualScheduler) -> (Throttled<A, ManualScheduler>, Calls<A>) {
    let calls: Calls<A> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let at = clock.clone();
    let throttled = throttle(move |args: A| sink.borrow_mut().push((at.now(), args)), limit, clock.clone());
    (throttled, calls)
}

// =============================================================
// Leading edge
// =============================================================

#[test]
fn first_call_fires_immediately() {
    let clock = ManualScheduler::new();
    let (g, calls) = recording::<u8>(ms(200), &clock);

    g.call(1);
    assert_eq!(*calls.borrow(), vec![(Duration::ZERO, 1)]);
    assert!(g.is_cooling_down());
}

#[test]
fn receiver_and_every_argument_of_leading_call_arrive() {
    let clock = ManualScheduler::new();
    let (g, calls) = recording::<(&str, Vec<i32>)>(ms(200), &clock);

    g.call(("form", vec![7, 8]));
    g.call(("window", vec![9]));

    assert_eq!(*calls.borrow(), vec![(Duration::ZERO, ("form", vec![7, 8]))]);
}

#[test]
fn call_inside_window_is_dropped_and_next_window_fires() {
    let clock = ManualScheduler::new();
    let (g, calls) = recording::<u32>(ms(200), &clock);

    g.call(0);
    clock.advance(ms(50));
    g.call(50);
    clock.advance(ms(200));
    g.call(250);

    assert_eq!(*calls.borrow(), vec![(ms(0), 0), (ms(250), 250)]);
}

#[test]
fn dropped_calls_are_never_replayed() {
    let clock = ManualScheduler::new();
    let (g, calls) = recording::<u8>(ms(100), &clock);

    g.call(1);
    g.call(2);
    g.call(3);
    clock.run_until_idle();
    clock.advance(ms(1000));

    assert_eq!(*calls.borrow(), vec![(Duration::ZERO, 1)]);
    assert!(!g.is_cooling_down());
}

#[test]
fn steady_stream_is_spaced_by_limit() {
    let clock = ManualScheduler::new();
    let (g, calls) = recording::<u64>(ms(100), &clock);

    for t in 0..500 {
        g.call(t);
        clock.advance(ms(7));
    }

    let calls = calls.borrow();
    assert!(calls.len() > 1);
    assert_eq!(calls[0].0, Duration::ZERO);
    for pair in calls.windows(2) {
        assert!(pair[1].0 - pair[0].0 >= ms(100), "invocations closer than the limit: {pair:?}");
    }
}

#[test]
fn cooldown_clears_exactly_at_limit() {
    let clock = ManualScheduler::new();
    let (g, calls) = recording::<u8>(ms(200), &clock);

    g.call(1);
    clock.advance(ms(199));
    g.call(2);
    assert!(g.is_cooling_down());
    clock.advance(ms(1));
    assert!(!g.is_cooling_down());
    g.call(3);

    assert_eq!(*calls.borrow(), vec![(ms(0), 1), (ms(200), 3)]);
}

// =============================================================
// Instances
// =============================================================

#[test]
fn clones_share_cooldown() {
    let clock = ManualScheduler::new();
    let (g, calls) = recording::<u8>(ms(50), &clock);
    let h = g.clone();

    g.call(1);
    h.call(2);

    assert_eq!(calls.borrow().len(), 1);
    assert!(h.is_cooling_down());
}

#[test]
fn independent_instances_keep_separate_windows() {
    let clock = ManualScheduler::new();
    let (a, a_calls) = recording::<u8>(ms(50), &clock);
    let (b, b_calls) = recording::<u8>(ms(50), &clock);

    a.call(1);
    b.call(2);

    assert_eq!(a_calls.borrow().len(), 1);
    assert_eq!(b_calls.borrow().len(), 1);
}

#[test]
fn reentrant_call_is_dropped() {
    let clock = ManualScheduler::new();
    let hits = Rc::new(RefCell::new(0_u32));
    let slot: Rc<RefCell<Option<Throttled<(), ManualScheduler>>>> = Rc::new(RefCell::new(None));

    let counter = Rc::clone(&hits);
    let again = Rc::clone(&slot);
    let g = throttle(
        move |()| {
            *counter.borrow_mut() += 1;
            if let Some(g) = again.borrow().as_ref() {
                g.call(());
            }
        },
        ms(10),
        clock.clone(),
    );
    *slot.borrow_mut() = Some(g.clone());

    g.call(());
    assert_eq!(*hits.borrow(), 1);
}
