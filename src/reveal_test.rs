use super::*;

fn hit(target: usize, ratio: f64) -> IntersectionSample {
    IntersectionSample::new(target, true, ratio)
}

#[test]
fn kind_classes() {
    assert_eq!(RevealKind::Fade.class(), "fade-in");
    assert_eq!(RevealKind::Slide.class(), "slide-in");
    assert_eq!(RevealKind::Counter.class(), "visible");
    assert_eq!(RevealKind::Fade.selector(), ".fade-on-scroll");
    assert_eq!(RevealKind::Slide.selector(), ".slide-on-scroll");
}

#[test]
fn new_set_is_all_pending() {
    let set = RevealSet::new(RevealKind::Fade, 3, 0.1);
    assert_eq!(set.len(), 3);
    assert_eq!(set.pending(), 3);
    assert!(!set.is_empty());
    assert!(!set.is_revealed(0));
}

#[test]
fn empty_set_reports_empty() {
    let set = RevealSet::new(RevealKind::Slide, 0, 0.1);
    assert!(set.is_empty());
    assert_eq!(set.pending(), 0);
}

#[test]
fn reveal_at_threshold() {
    let mut set = RevealSet::new(RevealKind::Fade, 2, 0.1);
    let out = set.on_entries(&[hit(1, 0.1)]);
    assert_eq!(out, vec![Reveal { target: 1, class: "fade-in" }]);
    assert!(set.is_revealed(1));
    assert!(!set.is_revealed(0));
    assert_eq!(set.pending(), 1);
}

#[test]
fn intersecting_below_threshold_still_reveals() {
    let mut set = RevealSet::new(RevealKind::Fade, 1, 0.1);
    assert_eq!(set.on_entries(&[hit(0, 0.05)]), vec![Reveal { target: 0, class: "fade-in" }]);
    assert!(set.is_revealed(0));
}

#[test]
fn not_intersecting_stays_pending() {
    let mut set = RevealSet::new(RevealKind::Slide, 1, 0.1);
    assert!(set.on_entries(&[IntersectionSample::new(0, false, 0.5)]).is_empty());
    assert!(!set.is_revealed(0));
}

#[test]
fn reveal_is_one_shot() {
    let mut set = RevealSet::new(RevealKind::Slide, 1, 0.1);
    assert_eq!(set.on_entries(&[hit(0, 0.4)]).len(), 1);
    assert!(set.on_entries(&[hit(0, 1.0)]).is_empty());
    // Leaving the viewport never un-reveals.
    assert!(set.on_entries(&[IntersectionSample::new(0, false, 0.0)]).is_empty());
    assert!(set.is_revealed(0));
}

#[test]
fn duplicate_entries_in_one_batch_reveal_once() {
    let mut set = RevealSet::new(RevealKind::Fade, 1, 0.1);
    let out = set.on_entries(&[hit(0, 0.2), hit(0, 0.3)]);
    assert_eq!(out.len(), 1);
}

#[test]
fn batch_order_is_preserved() {
    let mut set = RevealSet::new(RevealKind::Fade, 4, 0.1);
    let out = set.on_entries(&[
        hit(3, 0.5),
        hit(0, 0.5),
        IntersectionSample::new(2, false, 0.0),
        hit(1, 0.9),
    ]);
    let targets: Vec<usize> = out.iter().map(|r| r.target).collect();
    assert_eq!(targets, vec![3, 0, 1]);
}

#[test]
fn unknown_index_ignored() {
    let mut set = RevealSet::new(RevealKind::Fade, 1, 0.1);
    assert!(set.on_entries(&[hit(7, 1.0)]).is_empty());
    assert!(!set.is_revealed(7));
}

#[test]
fn threshold_is_carried_for_the_observer() {
    let set = RevealSet::new(RevealKind::Counter, 1, 1.0);
    assert_eq!(set.kind(), RevealKind::Counter);
    assert!((set.threshold() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn counter_reveal_uses_visible_class() {
    let mut set = RevealSet::new(RevealKind::Counter, 1, 1.0);
    assert!(set.on_entries(&[IntersectionSample::new(0, false, 0.99)]).is_empty());
    assert_eq!(set.on_entries(&[hit(0, 1.0)]), vec![Reveal { target: 0, class: "visible" }]);
}

#[test]
fn revealed_count_is_monotonic() {
    let mut set = RevealSet::new(RevealKind::Fade, 5, 0.1);
    let batches = [
        vec![hit(0, 0.5), IntersectionSample::new(1, false, 0.0)],
        vec![IntersectionSample::new(0, false, 0.0), hit(2, 0.2)],
        vec![IntersectionSample::new(4, false, 0.09), hit(1, 0.1)],
        vec![IntersectionSample::new(2, false, 0.0)],
    ];
    let mut last_pending = set.pending();
    for batch in &batches {
        set.on_entries(batch);
        assert!(set.pending() <= last_pending);
        last_pending = set.pending();
    }
    assert!(set.is_revealed(0) && set.is_revealed(1) && set.is_revealed(2));
    assert!(!set.is_revealed(3) && !set.is_revealed(4));
}
