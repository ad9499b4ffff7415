use super::*;

fn skills() -> SkillsState {
    SkillsState::new([("HTML5", 90), ("Python", 75)])
}

#[test]
fn bars_start_idle_at_zero_width() {
    let state = skills();
    assert_eq!(state.bars.len(), 2);
    assert!(state.bars.iter().all(|b| b.phase == RevealPhase::Idle));
    assert_eq!(state.bars[0].width(), "0");
}

#[test]
fn first_visible_sample_arms_then_reveal_sets_target_width() {
    let mut state = skills();
    assert!(state.observe(0, true));
    assert_eq!(state.bars[0].phase, RevealPhase::Armed);
    assert_eq!(state.bars[0].width(), "0");
    assert!(state.reveal(0));
    assert_eq!(state.bars[0].width(), "90%");
}

#[test]
fn reveal_fires_once_per_bar_across_reentries() {
    let mut state = skills();
    let mut fired = 0;
    for _ in 0..5 {
        if state.observe(1, true) {
            fired += 1;
        }
        state.observe(1, false);
    }
    assert_eq!(fired, 1);
    assert!(state.reveal(1));
    assert!(!state.reveal(1));
    assert!(!state.observe(1, true));
    assert_eq!(state.bars[1].phase, RevealPhase::Revealed);
}

#[test]
fn non_intersecting_samples_do_not_arm() {
    let mut state = skills();
    assert!(!state.observe(0, false));
    assert!(!state.observe(0, false));
    assert!(!state.is_latched(0));
    assert!(state.observe(0, true));
    assert!(state.is_latched(0));
}

#[test]
fn first_intersecting_sample_arms_without_a_second_report() {
    let mut state = skills();
    assert!(state.observe(0, true));
    assert!(state.reveal(0));
    assert_eq!(state.bars[0].width(), "90%");
}

#[test]
fn bars_are_independent() {
    let mut state = skills();
    assert!(state.observe(0, true));
    assert!(!state.is_latched(1));
    assert!(state.observe(1, true));
}

#[test]
fn reveal_of_idle_bar_is_ignored() {
    let mut state = skills();
    assert!(!state.reveal(0));
    assert_eq!(state.bars[0].phase, RevealPhase::Idle);
}

#[test]
fn out_of_range_index_is_ignored() {
    let mut state = skills();
    assert!(!state.observe(9, true));
    assert!(!state.reveal(9));
    assert!(!state.is_latched(9));
}

#[test]
fn width_clamps_to_one_hundred_percent() {
    let mut state = SkillsState::new([("Rust", 140)]);
    state.observe(0, true);
    state.reveal(0);
    assert_eq!(state.bars[0].width(), "100%");
}
