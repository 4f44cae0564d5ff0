use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

/// Physical device orientation at the moment a frame's detections were
/// delivered.
///
/// FaceUp, FaceDown, and Unknown carry no usable rotation information
/// and are treated as portrait-equivalent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceOrientation {
    #[default]
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
    FaceUp,
    FaceDown,
    Unknown,
}

impl DeviceOrientation {
    /// Z-axis correction angle, in radians, applied to yaw transforms so
    /// the head-turn axis stays vertical relative to the device.
    pub fn rotation_angle(self) -> f64 {
        match self {
            DeviceOrientation::PortraitUpsideDown => PI,
            DeviceOrientation::LandscapeLeft => FRAC_PI_2,
            DeviceOrientation::LandscapeRight => -FRAC_PI_2,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case::portrait(DeviceOrientation::Portrait, 0.0)]
    #[case::upside_down(DeviceOrientation::PortraitUpsideDown, PI)]
    #[case::landscape_left(DeviceOrientation::LandscapeLeft, FRAC_PI_2)]
    #[case::landscape_right(DeviceOrientation::LandscapeRight, -FRAC_PI_2)]
    #[case::face_up(DeviceOrientation::FaceUp, 0.0)]
    #[case::face_down(DeviceOrientation::FaceDown, 0.0)]
    #[case::unknown(DeviceOrientation::Unknown, 0.0)]
    fn test_rotation_angle(#[case] orientation: DeviceOrientation, #[case] expected: f64) {
        assert_relative_eq!(orientation.rotation_angle(), expected);
    }

    #[test]
    fn test_default_is_portrait() {
        assert_eq!(DeviceOrientation::default(), DeviceOrientation::Portrait);
    }
}
