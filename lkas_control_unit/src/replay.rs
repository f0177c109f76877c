//! Replay host: drives the sequencer from a recorded input trace.
//!
//! Input is JSON lines, one `CycleInput` per control cycle:
//!
//! ```json
//! {"vehicle":{"driver_torque":0,"brake_pressed":false,"button_counter":3},
//!  "command":{"actuation":{"steer":0.25,"active":true},"cruise":{"cancel":false,"resume":false}}}
//! ```
//!
//! Missing fields take their defaults. Blank lines are skipped. Output is
//! one JSON line per cycle with the cycle index, the ordered messages and
//! the applied actuation.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use lkas_common::command::CycleCommand;
use lkas_common::config::ConfigError;
use lkas_common::vehicle::VehicleState;

use crate::output::CycleOutput;
use crate::sequencer::{CommandSequencer, SequencerState};
use crate::stats::EmissionStats;

/// Errors raised while replaying a trace.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// Reading the trace or writing output failed.
    #[error("replay I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A trace line is not a valid `CycleInput`.
    #[error("malformed input on line {line}: {source}")]
    Parse {
        /// 1-based line number in the trace.
        line: usize,
        source: serde_json::Error,
    },

    /// Serializing an output record failed.
    #[error("failed to encode output: {0}")]
    Encode(serde_json::Error),

    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// One recorded control cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleInput {
    /// Decoded vehicle state.
    pub vehicle: VehicleState,
    /// Host command.
    pub command: CycleCommand,
}

#[derive(Serialize)]
struct OutputRecord<'a> {
    cycle: u64,
    #[serde(flatten)]
    output: &'a CycleOutput,
}

/// A sequencer session plus its statistics.
#[derive(Debug, Clone)]
pub struct ReplaySession {
    sequencer: CommandSequencer,
    state: SequencerState,
    stats: EmissionStats,
}

impl ReplaySession {
    /// Start a fresh session.
    pub const fn new(sequencer: CommandSequencer) -> Self {
        Self {
            sequencer,
            state: SequencerState::new(),
            stats: EmissionStats::new(),
        }
    }

    /// Current sequencer state.
    pub const fn state(&self) -> &SequencerState {
        &self.state
    }

    /// Statistics so far.
    pub const fn stats(&self) -> &EmissionStats {
        &self.stats
    }

    /// Run one cycle and record it.
    pub fn step(&mut self, input: &CycleInput) -> CycleOutput {
        let (output, trace) =
            self.sequencer
                .step_traced(&mut self.state, &input.vehicle, &input.command);
        self.stats.record(&output, &trace);
        output
    }

    /// Replay every line of `reader`, writing one JSON line per cycle.
    ///
    /// Stops at the first malformed line; cycles before it have been
    /// written and counted.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        reader: R,
        mut writer: W,
    ) -> Result<EmissionStats, ReplayError> {
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let input: CycleInput = serde_json::from_str(&line)
                .map_err(|source| ReplayError::Parse { line: idx + 1, source })?;

            let cycle = self.state.cycle_index;
            let output = self.step(&input);
            let record = OutputRecord {
                cycle,
                output: &output,
            };
            serde_json::to_writer(&mut writer, &record).map_err(ReplayError::Encode)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;

        tracing::debug!(cycles = self.stats.cycles, "replay finished");
        Ok(self.stats)
    }
}
