//! Steering path: rate limiting, clamping and ramp-down over many cycles.

use lkas_common::command::{ActuationRequest, CruiseIntent, CycleCommand};
use lkas_common::params::{ControllerParams, TorqueLimits};
use lkas_common::vehicle::VehicleState;
use lkas_control_unit::sequencer::{CommandSequencer, SequencerState};

fn params(max_torque: i32, rate: i32) -> ControllerParams {
    ControllerParams {
        torque: TorqueLimits {
            max_torque,
            max_rate_per_cycle: rate,
            max_rate_near_driver_override: rate / 2,
            driver_override_threshold: 100,
        },
        ..Default::default()
    }
}

fn full_left() -> CycleCommand {
    CycleCommand::new(ActuationRequest::engaged(1.0), CruiseIntent::NONE)
}

#[test]
fn full_request_ramps_to_clamp() {
    let seq = CommandSequencer::new(&params(1500, 50)).unwrap();
    let mut state = SequencerState::new();
    let vehicle = VehicleState::default();

    let first = seq.step(&mut state, &vehicle, &full_left());
    assert_eq!(first.steering().map(|s| s.torque), Some(50));

    for _ in 1..30 {
        seq.step(&mut state, &vehicle, &full_left());
    }
    assert_eq!(state.last_applied_torque, 1500);

    // Stays clamped afterwards.
    let later = seq.step(&mut state, &vehicle, &full_left());
    assert_eq!(later.steering().map(|s| s.torque), Some(1500));
}

#[test]
fn disengaged_decays_to_zero_within_bound() {
    let rate = 50;
    let seq = CommandSequencer::new(&params(1500, rate)).unwrap();
    let vehicle = VehicleState::default();
    let idle = CycleCommand::default();

    for initial in [1500, 1475, 49, 1, -1, -730, -1500] {
        let mut state = SequencerState {
            last_applied_torque: initial,
            ..SequencerState::new()
        };
        let bound = (initial.unsigned_abs()).div_ceil(rate as u32);
        let mut previous = initial;
        for _ in 0..bound {
            seq.step(&mut state, &vehicle, &idle);
            let now = state.last_applied_torque;
            assert!(now.abs() <= previous.abs(), "not monotone: {previous} -> {now}");
            assert!((now - previous).abs() <= rate);
            assert!(now.signum() * initial.signum() >= 0, "overshot zero");
            previous = now;
        }
        assert_eq!(state.last_applied_torque, 0, "initial {initial}");
    }
}

#[test]
fn steering_emitted_every_cycle_regardless_of_inputs() {
    let seq = CommandSequencer::new(&ControllerParams::default()).unwrap();
    let mut state = SequencerState::new();

    for i in 0..500u32 {
        let vehicle = VehicleState {
            driver_torque: (i as i32 % 41) * 10 - 200,
            brake_pressed: i % 3 == 0,
            button_counter: (i % 16) as u8,
            lane_departure_visible: i % 7 == 0,
            steer_required_visible: i % 11 == 0,
            steer_alerts_allowed: i % 2 == 0,
        };
        let command = CycleCommand::new(
            ActuationRequest {
                steer: ((i % 9) as f64 - 4.0) / 4.0,
                active: i % 5 != 0,
            },
            CruiseIntent {
                cancel: i % 13 < 4,
                resume: i % 4 == 0,
            },
        );
        let out = seq.step(&mut state, &vehicle, &command);
        let steering: Vec<_> = out.as_slice().iter().filter_map(|m| m.as_steering()).collect();
        assert_eq!(steering.len(), 1);
        assert_eq!(steering[0].frame, u64::from(i));
        assert!(out.is_well_ordered());
        assert!(state.last_applied_torque.abs() <= 800);
    }
}

#[test]
fn applied_steer_tracks_limited_torque() {
    let seq = CommandSequencer::new(&params(1000, 100)).unwrap();
    let mut state = SequencerState::new();
    let cmd = CycleCommand::new(ActuationRequest::engaged(-0.25), CruiseIntent::NONE);
    let out = seq.step(&mut state, &VehicleState::default(), &cmd);
    assert_eq!(state.last_applied_torque, -100);
    assert!((out.applied_steer + 0.1).abs() < 1e-12);

    let out = seq.step(&mut state, &VehicleState::default(), &cmd);
    assert_eq!(state.last_applied_torque, -200);
    assert!((out.applied_steer + 0.2).abs() < 1e-12);
}

#[test]
fn disengaged_decay_bound_holds_with_driver_opposing() {
    let rate = 50;
    let seq = CommandSequencer::new(&params(1500, rate)).unwrap();
    let idle = CycleCommand::default();

    for initial in [1500i32, 500, 49, -1, -730, -1500] {
        let fighting = VehicleState {
            driver_torque: -initial.signum() * 500,
            ..Default::default()
        };
        let mut state = SequencerState {
            last_applied_torque: initial,
            ..SequencerState::new()
        };
        let bound = initial.unsigned_abs().div_ceil(rate as u32);
        for _ in 0..bound {
            let (_, trace) = seq.step_traced(&mut state, &fighting, &idle);
            assert!(trace.driver_override || state.last_applied_torque == 0);
        }
        assert_eq!(state.last_applied_torque, 0, "initial {initial}");
    }
}

#[test]
fn opposing_driver_releases_as_fast_as_hands_off() {
    let seq = CommandSequencer::new(&params(1500, 50)).unwrap();
    let idle = CycleCommand::default();
    let fighting = VehicleState {
        driver_torque: -500,
        ..Default::default()
    };

    let mut free = SequencerState {
        last_applied_torque: 500,
        ..SequencerState::new()
    };
    let mut fought = free;
    for _ in 0..10 {
        seq.step(&mut free, &VehicleState::default(), &idle);
        seq.step(&mut fought, &fighting, &idle);
        assert!(fought.last_applied_torque.abs() <= free.last_applied_torque.abs());
    }
    assert_eq!(fought.last_applied_torque, 0);
}

#[test]
fn driver_override_slows_growth() {
    let seq = CommandSequencer::new(&params(1500, 50)).unwrap();
    let mut state = SequencerState {
        last_applied_torque: 600,
        ..SequencerState::new()
    };
    let fighting = VehicleState {
        driver_torque: -400,
        ..Default::default()
    };
    for expected in [625, 650, 675] {
        seq.step(&mut state, &fighting, &full_left());
        assert_eq!(state.last_applied_torque, expected);
    }

    // Driver lets go: normal ramp resumes.
    seq.step(&mut state, &VehicleState::default(), &full_left());
    assert_eq!(state.last_applied_torque, 725);
}
