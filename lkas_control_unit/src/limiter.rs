//! Steering torque limiter.
//!
//! Bounds a requested torque against the absolute limit and the previous
//! command:
//!
//! - `|out| <= max_torque` always.
//! - `|out - previous| <= max_rate_per_cycle` in normal operation.
//! - When the driver pushes against the commanded direction harder than
//!   `driver_override_threshold`, the command yields: growth in magnitude is
//!   capped at `max_rate_near_driver_override` per cycle while release toward
//!   zero keeps the full `max_rate_per_cycle`. A driver override never makes
//!   the command let go slower than it would without the driver.
//!
//! The commanded direction is the sign of the clamped request, falling back
//! to the sign of `previous` when the request is zero.

use lkas_common::params::TorqueLimits;

/// Limiter result with the override decision exposed for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TorqueLimitResult {
    /// Limited torque to apply this cycle.
    pub torque: i32,
    /// The driver-override yield was active.
    pub driver_override: bool,
}

/// Limit `requested` given the previous command and current driver torque.
///
/// Pure and infallible; inputs are assumed pre-validated.
#[inline]
pub fn limit_torque(requested: i32, previous: i32, driver_torque: i32, limits: &TorqueLimits) -> i32 {
    limit_torque_detailed(requested, previous, driver_torque, limits).torque
}

/// Same as [`limit_torque`], also reporting whether the driver override fired.
pub fn limit_torque_detailed(
    requested: i32,
    previous: i32,
    driver_torque: i32,
    limits: &TorqueLimits,
) -> TorqueLimitResult {
    let max = i64::from(limits.max_torque);
    let target = i64::from(requested).clamp(-max, max);
    let previous = i64::from(previous);

    let direction = if target != 0 { target.signum() } else { previous.signum() };
    let driver = i64::from(driver_torque);
    let driver_override = direction != 0
        && driver.signum() == -direction
        && driver.abs() > i64::from(limits.driver_override_threshold);

    let rate = i64::from(limits.max_rate_per_cycle);
    let (lo, hi) = if driver_override {
        override_window(previous, i64::from(limits.max_rate_near_driver_override), rate)
    } else {
        (previous - rate, previous + rate)
    };

    let stepped = target.clamp(lo, hi);
    // Bounded by ±max_torque <= i16::MAX, so the narrowing is lossless.
    let torque = stepped.clamp(-max, max) as i32;

    TorqueLimitResult {
        torque,
        driver_override,
    }
}

/// Reachable range under override: `release` toward zero, `grow` away from
/// it. Past zero the opposite side counts as growth. Requires `grow <= release`.
#[inline]
fn override_window(previous: i64, grow: i64, release: i64) -> (i64, i64) {
    match previous.signum() {
        1 => ((previous - release).max(-grow), previous + grow),
        -1 => (previous - grow, (previous + release).min(grow)),
        _ => (-grow, grow),
    }
}
