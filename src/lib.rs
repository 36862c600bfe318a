#![cfg_attr(not(test), no_std)]
#![doc = include_str!("../README.md")]
//!
//! ## Design Principles
//!
//! - **Host-agnostic**: the window and the auto-rotate setting are traits the
//!   host implements, so the controller runs anywhere samples arrive
//! - **Deterministic**: noisy continuous samples become discrete, stable
//!   orientation decisions through a strict quadrant partition
//! - **Race-free by contract**: sensor decisions are queued and applied on
//!   the thread that owns the window, in emission order
//!
//! ## Module Organization
//!
//! - [`tilt_angle`]: tilt angle estimation from raw samples
//! - [`Window`] / [`RotationSettings`]: platform seams implemented by the host
//! - [`ScreenOrientation`]: the four cardinal orientations and quadrant
//!   classification
//! - [`RotationController`]: lifecycle, manual toggle, and the sensor bridge
//!
//! ## Concurrency
//!
//! The controller holds no lock of its own. Every mutating operation takes
//! `&mut self`; a host whose sensor callbacks arrive on a different thread
//! than its UI actions wraps the controller in one mutex (or funnels all
//! calls onto one thread). [`on_accel_sample`](RotationController::on_accel_sample)
//! only classifies and enqueues, so it is cheap enough for callback context;
//! [`apply_pending`](RotationController::apply_pending) performs the window
//! side effects and belongs on the thread that owns the window.

mod angle;
mod control;
mod host;
mod sensor;
mod types;

pub use angle::tilt_angle;
pub use host::{RotationSettings, Window};
pub use types::ScreenOrientation;

/// Controller error type.
///
/// Settings-read failures are handled fail-open inside the controller and
/// never surface here; the only errors callers see come from the host's
/// window-orientation transport.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
  /// The bound window rejected an orientation request.
  Window(E),
}

/// Screen rotation controller.
///
/// Owns the orientation state machine: the cached portrait/landscape flag,
/// the manual-toggle handshake flags, and the queue of sensor decisions
/// awaiting application on the owning thread.
///
/// # Type Parameters
///
/// - `W`: host window (must implement [`Window`])
/// - `S`: platform auto-rotate setting (must implement [`RotationSettings`])
///
/// Construction is explicit; create one per window you want driven, wherever
/// your composition root lives.
pub struct RotationController<W, S> {
  settings: S,
  window: Option<W>,
  active: bool,
  landscape: bool,
  override_pending: bool,
  sensor_suspended: bool,
  pending: heapless::Deque<ScreenOrientation, 16>,
}

impl<W, S> RotationController<W, S>
where
  W: Window,
  S: RotationSettings,
{
  /// Create a controller in its initial state: portrait, no window bound, no
  /// override pending.
  ///
  /// # Arguments
  ///
  /// - `settings`: read-only view of the platform's auto-rotate preference
  pub fn new(settings: S) -> Self {
    Self {
      settings,
      window: None,
      active: false,
      landscape: false,
      override_pending: false,
      sensor_suspended: false,
      pending: heapless::Deque::new(),
    }
  }
}
