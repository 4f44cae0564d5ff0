use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::display_tree::DisplayTree;
use super::overlay_element::{ElementId, ElementStyle, OverlayElement};
use super::transform::face_transform;
use crate::shared::constants::EXPECTED_FACES;
use crate::shared::detected_face::DetectedFace;
use crate::shared::orientation::DeviceOrientation;

/// Per-frame face overlay tracker.
///
/// Maintains exactly one overlay element per face id reported in the
/// most recently processed frame: new ids get a freshly attached
/// element, known ids have their element mutated in place, vanished ids
/// have their element detached and dropped. A face id that reappears
/// after being dropped gets a brand-new element with no continuity.
///
/// `update` must be called once per capture frame from a single
/// sequencing context, with no overlapping calls; the capture
/// collaborator serializes delivery. The tracker holds no locks and
/// performs no I/O.
pub struct FaceOverlayTracker {
    elements: HashMap<u32, OverlayElement>,
    display: Box<dyn DisplayTree>,
    style: ElementStyle,
    next_element_id: ElementId,
}

impl FaceOverlayTracker {
    pub fn new(display: Box<dyn DisplayTree>) -> Self {
        Self::with_style(display, ElementStyle::default())
    }

    pub fn with_style(display: Box<dyn DisplayTree>, style: ElementStyle) -> Self {
        Self {
            elements: HashMap::with_capacity(EXPECTED_FACES),
            display,
            style,
            next_element_id: 1,
        }
    }

    /// Processes one frame of detections.
    ///
    /// Input order does not affect the final state; faces are visited in
    /// the order given so event emission is deterministic.
    pub fn update(&mut self, faces: &[DetectedFace], orientation: DeviceOrientation) {
        let lost: Vec<u32> = self
            .elements
            .keys()
            .filter(|id| !faces.iter().any(|f| f.id == **id))
            .copied()
            .collect();

        for face in faces {
            let element = match self.elements.entry(face.id) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    let element = OverlayElement::new(self.next_element_id, self.style);
                    self.next_element_id += 1;
                    self.display.attach(&element);
                    entry.insert(element)
                }
            };

            element.set_frame(face.bounds);
            element.set_transform(face_transform(face, orientation));
            self.display.update(element);
        }

        for id in lost {
            if let Some(element) = self.elements.remove(&id) {
                self.display.detach(element.id());
            }
        }
    }

    /// Number of faces currently tracked.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The element for a face id, if that face was present in the last
    /// processed frame.
    pub fn element(&self, face_id: u32) -> Option<&OverlayElement> {
        self.elements.get(&face_id)
    }

    /// Currently tracked face ids, sorted for deterministic reporting.
    pub fn tracked_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.elements.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
