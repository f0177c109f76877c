//! System-wide constants for the LKAS workspace.
//!
//! Single source of truth for default tuning, message cadences and the
//! bounds enforced by parameter validation.

use static_assertions::const_assert;

// ─── Torque ─────────────────────────────────────────────────────────

/// Upper bound accepted for `max_torque` (signed 16-bit steering field).
pub const TORQUE_LIMIT: i32 = i16::MAX as i32;

/// Default maximum steering torque command [raw units].
pub const MAX_TORQUE_DEFAULT: i32 = 800;

/// Default per-cycle torque change limit [raw units/cycle].
pub const MAX_RATE_PER_CYCLE_DEFAULT: i32 = 10;

/// Default per-cycle change limit while the driver overrides [raw units/cycle].
pub const MAX_RATE_NEAR_OVERRIDE_DEFAULT: i32 = 5;

/// Default driver torque above which an opposing input counts as override.
pub const DRIVER_OVERRIDE_THRESHOLD_DEFAULT: i32 = 15;

// ─── Cadences ───────────────────────────────────────────────────────

/// Cancel button requests go out every N cycles (10 Hz at 100 Hz).
pub const CANCEL_DIVISOR_DEFAULT: u32 = 10;

/// Resume button requests go out every N cycles (20 Hz at 100 Hz).
pub const RESUME_DIVISOR_DEFAULT: u32 = 5;

/// HUD alert message goes out every N cycles (2 Hz at 100 Hz).
pub const ALERT_DIVISOR_DEFAULT: u32 = 50;

/// Cancel requests are held back while braking until the hold counter
/// reaches this value (~70 ms at 100 Hz).
pub const CANCEL_HOLD_THRESHOLD_DEFAULT: u32 = 7;

// ─── Cycle ──────────────────────────────────────────────────────────

/// Nominal control cycle period in microseconds (100 Hz).
pub const CYCLE_TIME_US: u64 = 10_000;

/// Most messages a single cycle can emit: alert + button + steering.
pub const MAX_MESSAGES_PER_CYCLE: usize = 3;

const_assert!(MAX_RATE_NEAR_OVERRIDE_DEFAULT <= MAX_RATE_PER_CYCLE_DEFAULT);
const_assert!(MAX_RATE_PER_CYCLE_DEFAULT <= MAX_TORQUE_DEFAULT);
const_assert!(MAX_TORQUE_DEFAULT <= TORQUE_LIMIT);
