//! Host platform seams.
//!
//! The controller never talks to the platform directly. The host supplies a
//! [`Window`] it wants rotated and a [`RotationSettings`] view of the global
//! auto-rotate preference, and wires its sensor callback to
//! [`RotationController::on_accel_sample`](crate::RotationController::on_accel_sample).

use crate::ScreenOrientation;

/// A window whose rendered orientation can be requested.
///
/// On hosts whose orientation API cannot fail, use
/// `type Error = core::convert::Infallible`.
pub trait Window {
  type Error;

  /// Ask the host to render this window in the given orientation.
  fn request_orientation(&mut self, orientation: ScreenOrientation) -> Result<(), Self::Error>;
}

/// Read-only view of the platform's global auto-rotate preference.
pub trait RotationSettings {
  type Error;

  /// Whether sensor-driven rotation is enabled system-wide.
  ///
  /// A failed read (setting absent on this platform) is handled fail-open by
  /// the controller: rotation proceeds as if enabled.
  fn auto_rotate_enabled(&self) -> Result<bool, Self::Error>;
}
