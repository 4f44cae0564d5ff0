use serde::{Deserialize, Serialize};

use crate::shared::rect::Rect;

/// A single face reported by the detection collaborator for one frame.
///
/// `id` is stable only while the face stays continuously detected; the
/// detection subsystem may reuse an id after its face disappears. Roll
/// (head tilt about the viewing axis) and yaw (head turn about the
/// vertical axis) are in degrees and absent when the detector could not
/// estimate them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectedFace {
    pub id: u32,
    pub bounds: Rect,
    #[serde(default)]
    pub roll_degrees: Option<f64>,
    #[serde(default)]
    pub yaw_degrees: Option<f64>,
}

impl DetectedFace {
    /// A detection with bounds only, no angle estimates.
    pub fn new(id: u32, bounds: Rect) -> Self {
        Self {
            id,
            bounds,
            roll_degrees: None,
            yaw_degrees: None,
        }
    }

    pub fn with_roll(mut self, degrees: f64) -> Self {
        self.roll_degrees = Some(degrees);
        self
    }

    pub fn with_yaw(mut self, degrees: f64) -> Self {
        self.yaw_degrees = Some(degrees);
        self
    }
}
