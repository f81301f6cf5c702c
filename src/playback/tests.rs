use super::*;
use crate::config::PlaybackSettings;
use std::time::{Duration, Instant};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn elapsed_seconds_floors_scaled_time() {
    assert_eq!(elapsed_seconds(Duration::ZERO, 1.0), 0);
    assert_eq!(elapsed_seconds(Duration::from_millis(999), 1.0), 0);
    assert_eq!(elapsed_seconds(Duration::from_millis(1000), 1.0), 1);
    assert_eq!(elapsed_seconds(Duration::from_millis(2500), 2.0), 5);
    assert_eq!(elapsed_seconds(Duration::from_millis(10_000), 0.25), 2);
    assert_eq!(elapsed_seconds(Duration::from_secs(3), 4.0), 12);
}

#[test]
fn clock_runs_inside_duration() {
    let t = Instant::now();
    let mut clock = PlaybackClock::new(t, 1.0);
    assert_eq!(clock.tick(t, 10), Tick::Running(0));
    assert_eq!(clock.tick(t + Duration::from_millis(9_999), 10), Tick::Running(9));
    assert_eq!(clock.start(), t);
}

#[test]
fn clock_wraps_and_resets_start() {
    let t = Instant::now();
    let mut clock = PlaybackClock::new(t, 1.0);
    let now = t + Duration::from_millis(11_000);

    assert_eq!(clock.elapsed_seconds(now), 11);
    assert_eq!(clock.tick(now, 10), Tick::Wrapped);
    assert_eq!(clock.start(), now);

    // Next frame starts over from zero.
    assert_eq!(clock.tick(now + Duration::from_millis(500), 10), Tick::Running(0));
}

#[test]
fn clock_wraps_exactly_at_duration() {
    let t = Instant::now();
    let mut clock = PlaybackClock::new(t, 2.0);
    assert_eq!(clock.tick(t + Duration::from_millis(4_999), 10), Tick::Running(9));
    assert_eq!(clock.tick(t + Duration::from_millis(5_000), 10), Tick::Wrapped);
}

#[test]
fn zero_duration_wraps_every_tick() {
    let t = Instant::now();
    let mut clock = PlaybackClock::new(t, 1.0);
    for i in 0..5 {
        let now = t + Duration::from_millis(16 * i);
        assert_eq!(clock.tick(now, 0), Tick::Wrapped);
        assert_eq!(clock.start(), now);
    }
}

#[test]
fn clock_ignores_invalid_speeds() {
    let t = Instant::now();
    let mut clock = PlaybackClock::new(t, 0.0);
    assert_eq!(clock.speed(), 1.0);

    assert!(!clock.set_speed(-1.0));
    assert!(!clock.set_speed(f64::NAN));
    assert!(!clock.set_speed(f64::INFINITY));
    assert_eq!(clock.speed(), 1.0);

    assert!(clock.set_speed(0.1));
    assert_eq!(clock.elapsed_seconds(t + Duration::from_secs(25)), 2);
}

#[test]
fn clock_handles_now_before_start() {
    let t = Instant::now() + Duration::from_secs(5);
    let clock = PlaybackClock::new(t, 3.0);
    assert_eq!(clock.elapsed_seconds(t - Duration::from_secs(1)), 0);
}

#[test]
fn speed_control_steps_on_a_grid() {
    let mut speed = SpeedControl::new(&PlaybackSettings::default());
    assert!(approx(speed.value(), 1.0));

    speed.increase();
    speed.increase();
    assert!(approx(speed.increase(), 1.3));

    for _ in 0..3 {
        speed.decrease();
    }
    assert!(approx(speed.value(), 1.0));
}

#[test]
fn speed_control_clamps_to_bounds() {
    let mut speed = SpeedControl::new(&PlaybackSettings::default());
    for _ in 0..100 {
        speed.increase();
    }
    assert!(approx(speed.value(), 4.0));
    assert!(approx(speed.ratio(), 1.0));

    for _ in 0..100 {
        speed.decrease();
    }
    assert!(approx(speed.value(), 0.1));
    assert!(approx(speed.ratio(), 0.0));

    assert!(approx(speed.reset(), 1.0));
}

#[test]
fn speed_control_clamps_out_of_range_default() {
    let settings = PlaybackSettings {
        default_speed: 9.0,
        ..PlaybackSettings::default()
    };
    let speed = SpeedControl::new(&settings);
    assert!(approx(speed.value(), 4.0));
}

#[test]
fn speed_grid_is_anchored_at_min() {
    let settings = PlaybackSettings {
        min_speed: 0.25,
        default_speed: 0.25,
        speed_step: 0.1,
        ..PlaybackSettings::default()
    };
    let mut speed = SpeedControl::new(&settings);
    assert_eq!(speed.increase(), 0.35);
    assert_eq!(speed.increase(), 0.45);
    assert_eq!(speed.decrease(), 0.35);
    assert_eq!(speed.decrease(), 0.25);
    assert_eq!(speed.decrease(), 0.25);
}
