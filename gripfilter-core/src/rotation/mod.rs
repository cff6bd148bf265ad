//! Knob and dial rotation
//!
//! - [`TrackerConfig`]: travel range, snapping, clamping and source-selection
//!   tuning
//! - [`DualSourceRotationTracker`]: turns per-frame hand poses into a knob
//!   angle and value
//! - [`Knob`]: the dial's value between grabs; `grab` starts a
//!   [`KnobSession`](crate::session::KnobSession)
//!
//! ```rust
//! use gripfilter_core::rotation::{Knob, RotationSource, TrackerConfig};
//! use gripfilter_core::{Pose, ReferenceFrame};
//! use glam::{Quat, Vec3};
//!
//! let frame = ReferenceFrame::new(Vec3::ZERO, Quat::IDENTITY);
//! let mut knob = Knob::new(TrackerConfig::default());
//!
//! // Grab the rim 20 cm out along +X, then drag it a quarter of the way round
//! let mut session = knob.grab(&frame, &Pose::from_position(Vec3::new(0.2, 0.0, 0.0)));
//! assert_eq!(session.active_source(), RotationSource::Radial);
//!
//! let turned = session.tick(&frame, &Pose::from_position(Vec3::new(0.2, 0.0, 0.2)));
//! assert!((turned.angle + 45.0).abs() < 1e-3);
//! session.end();
//!
//! assert!((knob.value() - 0.25).abs() < 1e-4);
//! ```

mod config;
mod knob;
mod tracker;

pub use config::TrackerConfig;
pub use knob::Knob;
pub use tracker::{DualSourceRotationTracker, KnobReading, RotationInput, RotationSource};
