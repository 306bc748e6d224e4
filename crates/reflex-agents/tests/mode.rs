use reflex_agents::{Mode, ModeThresholds};
use reflex_core::AgentObservation;

fn observed(returned: u32, carrying: u32) -> AgentObservation {
    AgentObservation {
        num_returned: returned,
        num_carrying: carrying,
        ..AgentObservation::default()
    }
}

#[test]
fn returning_once_nearly_everything_is_delivered() {
    let t = ModeThresholds::default();
    assert_eq!(t.classify(&observed(8, 0), 10), Mode::Returning);
    assert_eq!(t.classify(&observed(7, 3), 10), Mode::Foraging);
}

#[test]
fn returning_once_carrying_the_limit() {
    let t = ModeThresholds::default();
    assert_eq!(t.classify(&observed(0, 3), 10), Mode::Foraging);
    assert_eq!(t.classify(&observed(0, 4), 10), Mode::Returning);
}

#[test]
fn small_boards_start_out_returning() {
    // initial - margin saturates at zero, so zero delivered already meets it.
    let t = ModeThresholds::default();
    assert_eq!(t.classify(&observed(0, 0), 2), Mode::Returning);
    assert_eq!(t.classify(&observed(0, 0), 0), Mode::Returning);
    assert_eq!(t.classify(&observed(0, 0), 3), Mode::Foraging);
}

#[test]
fn thresholds_are_tunable() {
    let t = ModeThresholds {
        carrying_limit: 2,
        returned_margin: 0,
    };
    assert_eq!(t.classify(&observed(0, 2), 10), Mode::Returning);
    assert_eq!(t.classify(&observed(9, 0), 10), Mode::Foraging);
    assert_eq!(t.classify(&observed(10, 0), 10), Mode::Returning);
}
