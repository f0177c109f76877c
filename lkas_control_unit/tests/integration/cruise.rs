//! Cruise arbitration across cycles: brake hold-off, reset, resume.

use lkas_common::command::{ActuationRequest, CruiseIntent, CycleCommand};
use lkas_common::message::ButtonKind;
use lkas_common::params::ControllerParams;
use lkas_common::vehicle::VehicleState;
use lkas_control_unit::output::CycleOutput;
use lkas_control_unit::sequencer::{CommandSequencer, SequencerState};

fn sequencer() -> CommandSequencer {
    CommandSequencer::new(&ControllerParams::default()).unwrap()
}

fn button(out: &CycleOutput) -> Option<ButtonKind> {
    out.as_slice().iter().find_map(|m| m.as_button()).map(|b| b.kind)
}

fn cruise(intent: CruiseIntent) -> CycleCommand {
    CycleCommand::new(ActuationRequest::disengaged(), intent)
}

fn braking() -> VehicleState {
    VehicleState {
        brake_pressed: true,
        ..Default::default()
    }
}

#[test]
fn braking_holds_first_cancel_then_releases() {
    let seq = sequencer();
    let mut state = SequencerState::new();

    let first = seq.step(&mut state, &braking(), &cruise(CruiseIntent::CANCEL));
    assert_eq!(button(&first), None);
    assert_eq!(state.cancel_hold_counter, 1);

    for _ in 1..7 {
        let out = seq.step(&mut state, &braking(), &cruise(CruiseIntent::CANCEL));
        assert_eq!(button(&out), None);
    }
    assert_eq!(state.cancel_hold_counter, 7);

    // Cycles 7..=9 are off-cadence.
    for _ in 7..10 {
        let out = seq.step(&mut state, &braking(), &cruise(CruiseIntent::CANCEL));
        assert_eq!(button(&out), None);
    }

    let tenth = seq.step(&mut state, &braking(), &cruise(CruiseIntent::CANCEL));
    assert_eq!(state.cancel_hold_counter, 11);
    assert_eq!(button(&tenth), Some(ButtonKind::Cancel));
}

#[test]
fn hold_counter_resets_when_cancel_drops() {
    let seq = sequencer();
    let mut state = SequencerState::new();
    for _ in 0..5 {
        seq.step(&mut state, &braking(), &cruise(CruiseIntent::CANCEL));
    }
    assert_eq!(state.cancel_hold_counter, 5);

    seq.step(&mut state, &braking(), &cruise(CruiseIntent::NONE));
    assert_eq!(state.cancel_hold_counter, 0);

    // Re-asserting cancel restarts the hold-off: cycle 10 is due but held.
    for _ in 6..10 {
        seq.step(&mut state, &braking(), &cruise(CruiseIntent::CANCEL));
    }
    let out = seq.step(&mut state, &braking(), &cruise(CruiseIntent::CANCEL));
    assert_eq!(state.cycle_index, 11);
    assert_eq!(state.cancel_hold_counter, 5);
    assert_eq!(button(&out), None);
}

#[test]
fn resume_every_five_cycles() {
    let seq = sequencer();
    let mut state = SequencerState::new();
    let resumes: Vec<u64> = (0..40u64)
        .filter(|_| {
            let out = seq.step(&mut state, &VehicleState::default(), &cruise(CruiseIntent::RESUME));
            button(&out) == Some(ButtonKind::Resume)
        })
        .collect();
    assert_eq!(resumes, (0..40).step_by(5).collect::<Vec<_>>());
}

#[test]
fn no_resume_without_intent() {
    let seq = sequencer();
    let mut state = SequencerState::new();
    for _ in 0..40 {
        let out = seq.step(&mut state, &VehicleState::default(), &cruise(CruiseIntent::NONE));
        assert_eq!(button(&out), None);
    }
}

#[test]
fn resume_not_blocked_by_brake() {
    let seq = sequencer();
    let mut state = SequencerState::new();
    let out = seq.step(&mut state, &braking(), &cruise(CruiseIntent::RESUME));
    assert_eq!(button(&out), Some(ButtonKind::Resume));
}

#[test]
fn conflicting_intents_resolve_to_cancel() {
    let seq = sequencer();
    let mut state = SequencerState::new();
    let both = CruiseIntent {
        cancel: true,
        resume: true,
    };
    let mut pressed = Vec::new();
    for _ in 0..20 {
        let out = seq.step(&mut state, &VehicleState::default(), &cruise(both));
        pressed.extend(button(&out));
    }
    assert_eq!(pressed, vec![ButtonKind::Cancel, ButtonKind::Cancel]);
    assert_eq!(state.cancel_hold_counter, 20);
}
