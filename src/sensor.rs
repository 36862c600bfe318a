//! Sensor event bridge: raw samples in, queued rotation decisions out.

use micromath::vector::Vector3d;

use crate::{angle::tilt_angle, RotationController, RotationSettings, ScreenOrientation, Window};

impl<W, S> RotationController<W, S>
where
  W: Window,
  S: RotationSettings,
{
  /// Feed one raw accelerometer sample.
  ///
  /// Call this from the host's sensor callback, at whatever rate the platform
  /// delivers. The sample is classified and, when rotation is warranted, a
  /// decision is queued for [`apply_pending`](Self::apply_pending); no window
  /// side effect happens here.
  ///
  /// Gates, in order:
  /// - samples are dropped entirely while the controller is stopped;
  /// - nothing is forwarded while the system auto-rotate setting is off
  ///   (a failed read logs and counts as on);
  /// - after a manual toggle, forwarding stays suspended until a sample lands
  ///   in the orientation family the toggle asked for; that first matching
  ///   sample flips the cached flag, re-arms forwarding, and is itself
  ///   forwarded.
  pub fn on_accel_sample(&mut self, sample: Vector3d<f32>) {
    if !self.active {
      return;
    }

    let angle = tilt_angle(sample);

    match self.settings.auto_rotate_enabled() {
      Ok(false) => return,
      Ok(true) => {}
      Err(_) => {
        #[cfg(feature = "defmt")]
        defmt::warn!("auto-rotate setting unavailable, assuming enabled");
      }
    }

    let quadrant = angle.and_then(ScreenOrientation::from_angle);

    if self.override_pending {
      match quadrant {
        // The device physically reached the family the toggle requested.
        Some(q) if q.is_landscape() != self.landscape => {
          self.landscape = q.is_landscape();
          self.override_pending = false;
          self.sensor_suspended = false;
        }
        _ => {}
      }
    }

    if self.sensor_suspended {
      return;
    }

    if let Some(decision) = quadrant {
      self.push_decision(decision);
    }
  }

  fn push_decision(&mut self, decision: ScreenOrientation) {
    if self.pending.is_full() {
      let _ = self.pending.pop_front();
    }
    let _ = self.pending.push_back(decision);
  }
}
