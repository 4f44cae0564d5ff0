use std::f64::consts::PI;

use nalgebra::{Matrix4, Rotation3, Unit, Vector3};

use crate::shared::detected_face::DetectedFace;
use crate::shared::orientation::DeviceOrientation;

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Head-tilt transform: rotation about +Z by the roll angle.
pub fn roll_transform(roll_degrees: f64) -> Matrix4<f64> {
    rotation(degrees_to_radians(roll_degrees), Vector3::z_axis())
}

/// Head-turn transform: rotation about −Y by the yaw angle, followed by
/// the device-orientation correction about +Z.
///
/// The correction keeps the turn axis vertical relative to the device;
/// without it a yawed face box tips sideways in landscape.
pub fn yaw_transform(yaw_degrees: f64, orientation: DeviceOrientation) -> Matrix4<f64> {
    let yaw = rotation(degrees_to_radians(yaw_degrees), yaw_axis());
    let correction = rotation(orientation.rotation_angle(), Vector3::z_axis());
    correction * yaw
}

/// Composed per-face transform.
///
/// Roll is applied before yaw+orientation; 3D rotations do not commute,
/// so this order is load-bearing. A face with neither angle keeps the
/// identity transform (position and size only).
pub fn face_transform(face: &DetectedFace, orientation: DeviceOrientation) -> Matrix4<f64> {
    let mut transform = Matrix4::identity();
    if let Some(roll) = face.roll_degrees {
        transform = roll_transform(roll) * transform;
    }
    if let Some(yaw) = face.yaw_degrees {
        transform = yaw_transform(yaw, orientation) * transform;
    }
    transform
}

fn yaw_axis() -> Unit<Vector3<f64>> {
    Unit::new_normalize(Vector3::new(0.0, -1.0, 0.0))
}

fn rotation(angle: f64, axis: Unit<Vector3<f64>>) -> Matrix4<f64> {
    Rotation3::from_axis_angle(&axis, angle).to_homogeneous()
}
