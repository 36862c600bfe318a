/// A concrete orientation the host window can be asked to render.
///
/// "Reverse" variants are the 180°-rotated siblings (device held upside down,
/// or on its other side).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenOrientation {
  Portrait,
  PortraitReverse,
  Landscape,
  LandscapeReverse,
}

impl ScreenOrientation {
  /// Classify a tilt angle in `[0, 360)` into a quadrant.
  ///
  /// The partition is strict on both sides: angles exactly on a quadrant
  /// boundary (0, 45, 135, 225, 315) classify as `None` and produce no
  /// rotation decision. The same policy applies everywhere an angle is
  /// classified, including the toggle handshake.
  pub const fn from_angle(angle: u16) -> Option<Self> {
    match angle {
      46..=134 => Some(ScreenOrientation::LandscapeReverse),
      136..=224 => Some(ScreenOrientation::PortraitReverse),
      226..=314 => Some(ScreenOrientation::Landscape),
      1..=44 | 316..=359 => Some(ScreenOrientation::Portrait),
      _ => None,
    }
  }

  /// Whether this orientation belongs to the landscape family.
  pub const fn is_landscape(self) -> bool {
    matches!(self, ScreenOrientation::Landscape | ScreenOrientation::LandscapeReverse)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn quadrants_partition_the_circle() {
    for angle in 0..360u16 {
      let quadrant = ScreenOrientation::from_angle(angle);
      match angle {
        0 | 45 | 135 | 225 | 315 => assert_eq!(quadrant, None, "boundary {angle} must not classify"),
        _ => assert!(quadrant.is_some(), "interior angle {angle} must classify"),
      }
    }
  }

  #[test]
  fn quadrants_map_to_expected_orientations() {
    assert_eq!(ScreenOrientation::from_angle(90), Some(ScreenOrientation::LandscapeReverse));
    assert_eq!(ScreenOrientation::from_angle(180), Some(ScreenOrientation::PortraitReverse));
    assert_eq!(ScreenOrientation::from_angle(270), Some(ScreenOrientation::Landscape));
    assert_eq!(ScreenOrientation::from_angle(10), Some(ScreenOrientation::Portrait));
    assert_eq!(ScreenOrientation::from_angle(350), Some(ScreenOrientation::Portrait));
  }

  #[test]
  fn boundaries_are_excluded_from_both_neighbors() {
    assert_eq!(ScreenOrientation::from_angle(44), Some(ScreenOrientation::Portrait));
    assert_eq!(ScreenOrientation::from_angle(45), None);
    assert_eq!(ScreenOrientation::from_angle(46), Some(ScreenOrientation::LandscapeReverse));
    assert_eq!(ScreenOrientation::from_angle(314), Some(ScreenOrientation::Landscape));
    assert_eq!(ScreenOrientation::from_angle(316), Some(ScreenOrientation::Portrait));
  }

  #[test]
  fn landscape_family() {
    assert!(ScreenOrientation::Landscape.is_landscape());
    assert!(ScreenOrientation::LandscapeReverse.is_landscape());
    assert!(!ScreenOrientation::Portrait.is_landscape());
    assert!(!ScreenOrientation::PortraitReverse.is_landscape());
  }
}
