//! Lifecycle, the manual full-screen toggle, and owning-thread application.

use crate::{Error, RotationController, RotationSettings, ScreenOrientation, Window};

impl<W, S> RotationController<W, S>
where
  W: Window,
  S: RotationSettings,
{
  /// Bind a window and begin accepting sensor samples.
  ///
  /// Rebinding is safe: the previously bound window (if any) is replaced and
  /// returned, and no duplicate sample intake results.
  pub fn start(&mut self, window: W) -> Option<W> {
    self.active = true;
    self.window.replace(window)
  }

  /// Stop accepting samples and release the bound window.
  ///
  /// Queued decisions are discarded with it. Safe to call while a sensor
  /// callback is in flight (the late sample is dropped) and when not started
  /// (returns `None`).
  pub fn stop(&mut self) -> Option<W> {
    self.active = false;
    self.pending.clear();
    self.window.take()
  }

  /// Current cached orientation family. No side effects.
  pub fn is_landscape_oriented(&self) -> bool {
    self.landscape
  }

  /// Manual full-screen toggle.
  ///
  /// With the system auto-rotate setting off this is a plain bounded toggle:
  /// the cached flag flips and the opposite plain orientation is requested.
  ///
  /// With auto-rotate on, the opposite orientation is requested immediately
  /// but the cached flag is left alone; sensor forwarding is suspended until
  /// a sample confirms the device physically rotated into the requested
  /// family (see [`on_accel_sample`](Self::on_accel_sample)), which prevents
  /// the very next sample from undoing the toggle.
  ///
  /// No-op while no window is bound.
  pub fn toggle_rotation(&mut self) -> Result<(), Error<W::Error>> {
    if self.window.is_none() {
      return Ok(());
    }

    let auto_rotate = match self.settings.auto_rotate_enabled() {
      Ok(enabled) => enabled,
      Err(_) => {
        #[cfg(feature = "defmt")]
        defmt::warn!("auto-rotate setting unavailable, assuming enabled");
        true
      }
    };

    if !auto_rotate {
      self.landscape = !self.landscape;
      let target = if self.landscape { ScreenOrientation::Landscape } else { ScreenOrientation::Portrait };
      return self.request(target);
    }

    // Arm the handshake; the flag flips once the sensor confirms the move.
    self.sensor_suspended = true;
    self.override_pending = true;
    let target = if self.landscape { ScreenOrientation::Portrait } else { ScreenOrientation::Landscape };
    self.request(target)
  }

  /// Drain queued sensor decisions, in emission order, into window requests.
  ///
  /// Call on the thread that owns the window. Each applied decision also
  /// updates the cached orientation flag. Nothing to do (including after
  /// `stop()`) is fine.
  pub fn apply_pending(&mut self) -> Result<(), Error<W::Error>> {
    while let Some(decision) = self.pending.pop_front() {
      self.request(decision)?;
      self.landscape = decision.is_landscape();
    }
    Ok(())
  }

  // Late callbacks after stop() land here with no window bound; dropped.
  fn request(&mut self, orientation: ScreenOrientation) -> Result<(), Error<W::Error>> {
    match &mut self.window {
      Some(window) => window.request_orientation(orientation).map_err(Error::Window),
      None => Ok(()),
    }
  }
}
