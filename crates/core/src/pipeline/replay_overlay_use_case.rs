use std::path::Path;

use crossbeam_channel::Receiver;

use crate::overlay::domain::face_tracker::FaceOverlayTracker;
use crate::overlay::infrastructure::channel_display_tree::{ChannelDisplayTree, DisplayEvent};
use crate::shared::orientation::DeviceOrientation;
use crate::trace::domain::trace_reader::{TraceFrame, TraceReader};

/// Totals accumulated over one replay run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReplaySummary {
    pub frames: usize,
    pub attached: usize,
    pub updates: usize,
    pub detached: usize,
    pub peak_tracked: usize,
    pub final_tracked: Vec<u32>,
}

/// Replays a recorded detection trace through the overlay tracker, one
/// frame per recorded frame, in order.
///
/// Owns the tracker and consumes its display-event stream to build a
/// [`ReplaySummary`]. The optional progress callback is invoked after
/// every frame; returning `false` cancels the replay.
pub struct ReplayOverlayUseCase {
    reader: Box<dyn TraceReader>,
    tracker: FaceOverlayTracker,
    events: Receiver<DisplayEvent>,
    orientation_override: Option<DeviceOrientation>,
    on_progress: Option<Box<dyn Fn(usize, usize) -> bool + Send>>,
}

impl ReplayOverlayUseCase {
    pub fn new(
        reader: Box<dyn TraceReader>,
        orientation_override: Option<DeviceOrientation>,
        on_progress: Option<Box<dyn Fn(usize, usize) -> bool + Send>>,
    ) -> Self {
        let (tree, events) = ChannelDisplayTree::new();
        Self {
            reader,
            tracker: FaceOverlayTracker::new(Box::new(tree)),
            events,
            orientation_override,
            on_progress,
        }
    }

    /// Runs the trace at `path` to completion and returns the totals.
    pub fn execute(&mut self, path: &Path) -> Result<ReplaySummary, Box<dyn std::error::Error>> {
        let metadata = self.reader.open(path)?;
        let total = metadata.total_frames;

        // Collect frames to avoid borrow conflict between reader and tracker
        let all_frames: Vec<TraceFrame> = self.reader.frames().collect::<Result<Vec<_>, _>>()?;
        self.reader.close();

        let mut summary = ReplaySummary::default();
        for (index, frame) in all_frames.iter().enumerate() {
            let orientation = self.orientation_override.unwrap_or(frame.orientation);
            self.tracker.update(&frame.faces, orientation);

            summary.frames += 1;
            summary.peak_tracked = summary.peak_tracked.max(self.tracker.len());
            for event in self.events.try_iter() {
                match event {
                    DisplayEvent::Attached { .. } => summary.attached += 1,
                    DisplayEvent::Updated { .. } => summary.updates += 1,
                    DisplayEvent::Detached(_) => summary.detached += 1,
                }
            }

            log::debug!(
                "frame {index}: {} faces, {} tracked",
                frame.faces.len(),
                self.tracker.len()
            );
            self.report_progress(index + 1, total)?;
        }

        summary.final_tracked = self.tracker.tracked_ids();
        Ok(summary)
    }

    /// The tracker's state after the frames processed so far.
    pub fn tracker(&self) -> &FaceOverlayTracker {
        &self.tracker
    }

    fn report_progress(
        &self,
        current: usize,
        total: usize,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(ref callback) = self.on_progress {
            if !callback(current, total) {
                return Err("Cancelled".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::overlay::domain::transform::yaw_transform;
    use crate::shared::detected_face::DetectedFace;
    use crate::shared::rect::Rect;
    use crate::trace::domain::trace_reader::TraceMetadata;

    struct FakeTraceReader {
        frames: Vec<TraceFrame>,
    }

    impl FakeTraceReader {
        fn new(frames: Vec<TraceFrame>) -> Self {
            Self { frames }
        }
    }

    impl TraceReader for FakeTraceReader {
        fn open(&mut self, path: &Path) -> Result<TraceMetadata, Box<dyn std::error::Error>> {
            Ok(TraceMetadata {
                total_frames: self.frames.len(),
                source_path: Some(PathBuf::from(path)),
            })
        }

        fn frames(
            &mut self,
        ) -> Box<dyn Iterator<Item = Result<TraceFrame, Box<dyn std::error::Error>>> + '_>
        {
            Box::new(std::mem::take(&mut self.frames).into_iter().map(Ok))
        }

        fn close(&mut self) {}
    }

    fn face(id: u32) -> DetectedFace {
        DetectedFace::new(id, Rect::new(0.0, 0.0, 50.0, 50.0))
    }

    fn frame(faces: Vec<DetectedFace>) -> TraceFrame {
        TraceFrame {
            faces,
            orientation: DeviceOrientation::Portrait,
        }
    }

    #[test]
    fn test_summary_totals() {
        let reader = FakeTraceReader::new(vec![
            frame(vec![face(1), face(2)]),
            frame(vec![face(2)]),
            frame(vec![]),
        ]);
        let mut use_case = ReplayOverlayUseCase::new(Box::new(reader), None, None);
        let summary = use_case.execute(Path::new("fake.json")).unwrap();

        assert_eq!(summary.frames, 3);
        assert_eq!(summary.attached, 2);
        assert_eq!(summary.updates, 3); // two in frame 0, one in frame 1
        assert_eq!(summary.detached, 2);
        assert_eq!(summary.peak_tracked, 2);
        assert!(summary.final_tracked.is_empty());
    }

    #[test]
    fn test_final_tracked_ids_reported_sorted() {
        let reader = FakeTraceReader::new(vec![frame(vec![face(9), face(3), face(5)])]);
        let mut use_case = ReplayOverlayUseCase::new(Box::new(reader), None, None);
        let summary = use_case.execute(Path::new("fake.json")).unwrap();
        assert_eq!(summary.final_tracked, vec![3, 5, 9]);
    }

    #[test]
    fn test_orientation_override_wins_over_frame_snapshot() {
        let reader = FakeTraceReader::new(vec![frame(vec![face(1).with_yaw(90.0)])]);
        let mut use_case = ReplayOverlayUseCase::new(
            Box::new(reader),
            Some(DeviceOrientation::LandscapeLeft),
            None,
        );
        use_case.execute(Path::new("fake.json")).unwrap();

        assert_relative_eq!(
            *use_case.tracker().element(1).unwrap().transform(),
            yaw_transform(90.0, DeviceOrientation::LandscapeLeft),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_progress_reported_per_frame() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let progress: Box<dyn Fn(usize, usize) -> bool + Send> = Box::new(move |current, total| {
            seen.fetch_add(1, Ordering::SeqCst);
            assert_eq!(total, 2);
            current <= total
        });

        let reader = FakeTraceReader::new(vec![frame(vec![face(1)]), frame(vec![])]);
        let mut use_case = ReplayOverlayUseCase::new(Box::new(reader), None, Some(progress));
        use_case.execute(Path::new("fake.json")).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_cancelled_progress_stops_replay() {
        let progress: Box<dyn Fn(usize, usize) -> bool + Send> = Box::new(|_, _| false);
        let reader = FakeTraceReader::new(vec![frame(vec![face(1)]), frame(vec![face(2)])]);
        let mut use_case = ReplayOverlayUseCase::new(Box::new(reader), None, Some(progress));

        let err = use_case.execute(Path::new("fake.json")).unwrap_err();
        assert_eq!(err.to_string(), "Cancelled");
    }

    #[test]
    fn test_empty_trace() {
        let reader = FakeTraceReader::new(vec![]);
        let mut use_case = ReplayOverlayUseCase::new(Box::new(reader), None, None);
        let summary = use_case.execute(Path::new("fake.json")).unwrap();
        assert_eq!(summary, ReplaySummary::default());
    }
}
