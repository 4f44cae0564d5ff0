use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use thiserror::Error;

use crate::trace::domain::trace_reader::{TraceFrame, TraceMetadata, TraceReader};

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("failed to read trace {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed trace {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads a detection trace stored as a JSON array of frames.
///
/// The whole trace is loaded on `open`; traces are detection metadata,
/// not media, so even long recordings stay small.
pub struct JsonTraceReader {
    frames: Option<Vec<TraceFrame>>,
}

impl JsonTraceReader {
    pub fn new() -> Self {
        Self { frames: None }
    }
}

impl Default for JsonTraceReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceReader for JsonTraceReader {
    fn open(&mut self, path: &Path) -> Result<TraceMetadata, Box<dyn std::error::Error>> {
        let file = File::open(path).map_err(|source| TraceError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let frames: Vec<TraceFrame> =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| TraceError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        let metadata = TraceMetadata {
            total_frames: frames.len(),
            source_path: Some(path.to_path_buf()),
        };
        self.frames = Some(frames);
        Ok(metadata)
    }

    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<TraceFrame, Box<dyn std::error::Error>>> + '_> {
        match self.frames.take() {
            None => Box::new(std::iter::once(Err("JsonTraceReader: not opened".into()))),
            Some(frames) => Box::new(frames.into_iter().map(Ok)),
        }
    }

    fn close(&mut self) {
        self.frames = None;
    }
}
