//! Message cadences and per-cycle ordering over long runs.

use lkas_common::command::{ActuationRequest, CruiseIntent, CycleCommand};
use lkas_common::message::{ButtonKind, OutboundMessage};
use lkas_common::params::ControllerParams;
use lkas_common::vehicle::VehicleState;
use lkas_control_unit::output::CycleOutput;
use lkas_control_unit::sequencer::{CommandSequencer, SequencerState};

fn run(cycles: u64, vehicle: VehicleState, command: CycleCommand) -> Vec<CycleOutput> {
    let seq = CommandSequencer::new(&ControllerParams::default()).unwrap();
    let mut state = SequencerState::new();
    (0..cycles)
        .map(|_| seq.step(&mut state, &vehicle, &command))
        .collect()
}

fn button_cycles(outputs: &[CycleOutput], kind: ButtonKind) -> Vec<usize> {
    outputs
        .iter()
        .enumerate()
        .filter(|(_, out)| {
            out.as_slice()
                .iter()
                .any(|m| m.as_button().is_some_and(|b| b.kind == kind))
        })
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn alert_only_on_multiples_of_fifty() {
    let outputs = run(251, VehicleState::default(), CycleCommand::default());
    let alerts: Vec<usize> = outputs
        .iter()
        .enumerate()
        .filter(|(_, out)| out.as_slice().iter().any(|m| m.as_alert().is_some()))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(alerts, vec![0, 50, 100, 150, 200, 250]);
}

#[test]
fn exactly_one_cancel_per_ten_cycles() {
    let command = CycleCommand::new(ActuationRequest::disengaged(), CruiseIntent::CANCEL);
    let outputs = run(120, VehicleState::default(), command);
    let cancels = button_cycles(&outputs, ButtonKind::Cancel);
    assert_eq!(cancels, (0..120).step_by(10).collect::<Vec<_>>());

    // Any window of 10 consecutive cycles holds exactly one cancel.
    for start in 0..=110 {
        let in_window = cancels.iter().filter(|&&c| c >= start && c < start + 10).count();
        assert_eq!(in_window, 1, "window starting at {start}");
    }
}

#[test]
fn priority_order_holds_on_busy_cycles() {
    let command = CycleCommand::new(ActuationRequest::engaged(0.3), CruiseIntent::CANCEL);
    let outputs = run(101, VehicleState::default(), command);

    // Cycle 0, 50 and 100 carry all three messages.
    for idx in [0, 50, 100] {
        let kinds: Vec<u8> = outputs[idx]
            .as_slice()
            .iter()
            .map(OutboundMessage::priority)
            .collect();
        assert_eq!(kinds, vec![0, 1, 2], "cycle {idx}");
    }
    assert!(outputs.iter().all(CycleOutput::is_well_ordered));
    assert!(
        outputs
            .iter()
            .all(|out| matches!(out.as_slice().last(), Some(OutboundMessage::Steering(_))))
    );
}
