use super::*;

// =============================================================
// parse_target
// =============================================================

#[test]
fn parses_plain_integer() {
    assert_eq!(parse_target("100").unwrap(), 100);
}

#[test]
fn parses_signed_and_padded() {
    assert_eq!(parse_target("  -42").unwrap(), -42);
    assert_eq!(parse_target("+7").unwrap(), 7);
}

#[test]
fn ignores_trailing_garbage() {
    assert_eq!(parse_target("250+").unwrap(), 250);
    assert_eq!(parse_target("3.9").unwrap(), 3);
    assert_eq!(parse_target("1e3").unwrap(), 1);
}

#[test]
fn rejects_non_numeric() {
    assert!(matches!(parse_target("abc"), Err(SitewireError::CounterTarget(raw)) if raw == "abc"));
    assert!(parse_target("").is_err());
    assert!(parse_target("-").is_err());
    assert!(parse_target(" x12").is_err());
}

#[test]
fn rejects_overflow() {
    assert!(parse_target("99999999999999999999999").is_err());
}

// =============================================================
// CounterAnimation
// =============================================================

#[test]
fn hundred_reaches_exactly_hundred() {
    let frames: Vec<i64> = CounterAnimation::new(100, 100).collect();
    assert_eq!(frames.len(), 101);
    assert_eq!(frames.first(), Some(&1));
    assert_eq!(frames.last(), Some(&100));
    assert!(frames.iter().all(|v| *v <= 100));
}

#[test]
fn frames_are_non_decreasing() {
    let frames: Vec<i64> = CounterAnimation::new(1234, 100).collect();
    assert!(frames.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(frames.last(), Some(&1234));
}

#[test]
fn awkward_targets_never_overshoot() {
    for target in [1, 3, 7, 13, 99, 101, 333, 1001, 98_765] {
        let frames: Vec<i64> = CounterAnimation::new(target, 100).collect();
        assert!(frames.iter().all(|v| *v <= target), "target {target} overshot");
        assert_eq!(frames.last(), Some(&target));
        assert!(frames.len() <= 102, "target {target} took {} frames", frames.len());
    }
}

#[test]
fn small_target_rounds_up_early() {
    let mut anim = CounterAnimation::new(5, 100);
    // 0.05 rounds up to 1 on the first step.
    assert_eq!(anim.next(), Some(1));
}

#[test]
fn zero_target_shows_zero_once() {
    let frames: Vec<i64> = CounterAnimation::new(0, 100).collect();
    assert_eq!(frames, vec![0]);
}

#[test]
fn negative_target_shows_target_immediately() {
    let frames: Vec<i64> = CounterAnimation::new(-20, 100).collect();
    assert_eq!(frames, vec![-20]);
}

#[test]
fn step_count_sets_duration() {
    let frames: Vec<i64> = CounterAnimation::new(10, 10).collect();
    assert_eq!(frames, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10]);
}

#[test]
fn zero_steps_treated_as_one() {
    let frames: Vec<i64> = CounterAnimation::new(50, 0).collect();
    assert_eq!(frames, vec![50, 50]);
}

#[test]
fn finished_after_exhaustion() {
    let mut anim = CounterAnimation::new(2, 2);
    assert!(!anim.is_finished());
    while anim.next().is_some() {}
    assert!(anim.is_finished());
    assert_eq!(anim.next(), None);
    assert_eq!(anim.target(), 2);
}
