//! Knob Defaults and Hysteresis Tuning
//!
//! The hysteresis values here were tuned by hand on headsets and have no
//! derivation behind them. They are preserved for behavioral compatibility and
//! exposed through `TrackerConfig` so each control can retune them.

/// Default lower bound of the knob's travel (degrees).
pub const DEFAULT_MIN_ANGLE_DEG: f32 = -90.0;

/// Default upper bound of the knob's travel (degrees).
pub const DEFAULT_MAX_ANGLE_DEG: f32 = 90.0;

/// Default starting value in [0, 1] - centered.
pub const DEFAULT_KNOB_VALUE: f32 = 0.5;

/// Hand distance from the pivot (meters) above which the knob follows the
/// hand's position around the axis instead of the wrist's twist.
///
/// 10 cm: roughly the radius at which a user grabs the rim of a dial rather
/// than pinching its center.
pub const DEFAULT_POSITION_TRACKED_RADIUS_M: f32 = 0.1;

/// Multiplier applied to twist-derived rotation.
///
/// Wrists only twist about ±90° comfortably, so twist is amplified to let a
/// full knob range be covered in one grab.
pub const DEFAULT_TWIST_SENSITIVITY: f32 = 1.5;

/// Fractional margin applied to a mode threshold while that mode is active.
///
/// Empirical. 10% keeps the radial/twist decision from chattering when the
/// hand hovers at the radius boundary.
pub const MODE_SWITCH_DEADZONE: f32 = 0.1;

/// Margin for the up/forward twist split - half the radial deadzone.
///
/// Empirical. The alignment signal is already in [0, 1] so a smaller band
/// suffices.
pub const VERTICAL_DEADZONE: f32 = MODE_SWITCH_DEADZONE * 0.5;

/// `|forward.y|` above which the device is considered pointing along the
/// knob axis and twist is read about its up vector instead (≈ cos 45°).
pub const VERTICAL_ALIGNMENT_THRESHOLD: f32 = 0.707;
