use std::cell::Cell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;

/// Drive a poll loop on a simulated clock that unmounts at `horizon`.
///
/// Returns how many ticks ran.
fn simulate(interval: Duration, horizon: Duration) -> usize {
    let handle = PollHandle::new();
    let clock = Rc::new(Cell::new(Duration::ZERO));
    let ticks = Rc::new(Cell::new(0_usize));

    let sleep_handle = handle.clone();
    let sleep_clock = clock.clone();
    let sleep = move |d: Duration| {
        let next = sleep_clock.get() + d;
        if next > horizon {
            sleep_handle.cancel();
        }
        sleep_clock.set(next);
        std::future::ready(())
    };
    let tick_count = ticks.clone();
    let tick = move || {
        tick_count.set(tick_count.get() + 1);
        std::future::ready(())
    };

    block_on(run_poll_loop(handle, interval, sleep, tick));
    ticks.get()
}

#[test]
fn one_refresh_after_sixty_seconds() {
    assert_eq!(simulate(REFRESH_INTERVAL, Duration::from_secs(60)), 1);
}

#[test]
fn no_refresh_before_first_interval() {
    assert_eq!(simulate(REFRESH_INTERVAL, Duration::from_secs(59)), 0);
}

#[test]
fn refreshes_accumulate_per_interval() {
    assert_eq!(simulate(REFRESH_INTERVAL, Duration::from_secs(5 * 60 + 30)), 5);
}

#[test]
fn cancelled_handle_stops_before_first_tick() {
    let handle = PollHandle::new();
    handle.cancel();
    let ticks = Rc::new(Cell::new(0_usize));
    let tick_count = ticks.clone();
    block_on(run_poll_loop(
        handle,
        REFRESH_INTERVAL,
        |_| std::future::ready(()),
        move || {
            tick_count.set(tick_count.get() + 1);
            std::future::ready(())
        },
    ));
    assert_eq!(ticks.get(), 0);
}

#[test]
fn clones_share_liveness() {
    let handle = PollHandle::new();
    let other = handle.clone();
    assert!(other.is_alive());
    handle.cancel();
    assert!(!other.is_alive());
}
