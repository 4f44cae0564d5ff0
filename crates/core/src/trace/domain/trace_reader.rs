use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::shared::detected_face::DetectedFace;
use crate::shared::orientation::DeviceOrientation;

/// One frame of a recorded detection trace: the faces visible during
/// that capture frame plus the device orientation snapshot taken at
/// delivery time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceFrame {
    #[serde(default)]
    pub faces: Vec<DetectedFace>,
    #[serde(default)]
    pub orientation: DeviceOrientation,
}

/// Metadata returned when a trace is opened.
#[derive(Clone, Debug, PartialEq)]
pub struct TraceMetadata {
    pub total_frames: usize,
    pub source_path: Option<PathBuf>,
}

/// Reads detection frames from a recorded trace.
///
/// Implementations handle the storage details (format, transport) while
/// the pipeline works with the abstract `TraceFrame` type. This is the
/// boundary where the live camera collaborator would otherwise sit.
pub trait TraceReader: Send {
    /// Opens a trace and returns its metadata.
    fn open(&mut self, path: &Path) -> Result<TraceMetadata, Box<dyn std::error::Error>>;

    /// Returns an iterator over frames in recorded order.
    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<TraceFrame, Box<dyn std::error::Error>>> + '_>;

    /// Releases any resources held by the reader.
    fn close(&mut self);
}
