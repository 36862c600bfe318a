//! Tilt angle estimation from raw accelerometer samples.

use micromath::{vector::Vector3d, F32Ext};

/// Estimate the device tilt angle in degrees `[0, 360)` from one raw
/// accelerometer sample, or `None` when the sample cannot be trusted.
///
/// A sample is rejected when its in-plane magnitude is small compared to the
/// z component (device lying near flat), where the derived angle would be
/// dominated by noise. 0° is upright portrait, angles grow clockwise.
pub fn tilt_angle(sample: Vector3d<f32>) -> Option<u16> {
  let x = -sample.x;
  let y = -sample.y;
  let z = -sample.z;

  let magnitude = x * x + y * y;
  if magnitude * 4.0 < z * z {
    return None;
  }

  // `F32Ext` named explicitly so test builds use the same approximations
  // as `no_std` targets instead of the libm intrinsics.
  let angle = F32Ext::atan2(-y, x).to_degrees();
  let mut orientation = 90 - F32Ext::round(angle) as i32;
  while orientation >= 360 {
    orientation -= 360;
  }
  while orientation < 0 {
    orientation += 360;
  }
  Some(orientation as u16)
}
