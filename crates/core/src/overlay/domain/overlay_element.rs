use nalgebra::Matrix4;

use crate::shared::constants::{BADGE_ASSET, BORDER_COLOR, BORDER_WIDTH};
use crate::shared::rect::Rect;

/// Identity of an overlay element. Assigned monotonically by the
/// tracker and never reused, so element identity (as opposed to value)
/// is observable across frames.
pub type ElementId = u64;

/// Visual styling applied to every element at creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementStyle {
    pub border_width: f64,
    pub border_color: [u8; 4],
    /// Asset name of the badge image the renderer draws inside the box.
    pub badge: &'static str,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            border_width: BORDER_WIDTH,
            border_color: BORDER_COLOR,
            badge: BADGE_ASSET,
        }
    }
}

/// One drawable face-indicator rectangle with a 3D transform.
///
/// Created when a face id is first seen, mutated in place on every frame
/// the id is seen again, detached and dropped the first frame it is
/// absent. Only the tracker mutates elements; observers read them
/// through the display-tree callbacks or tracker accessors.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayElement {
    id: ElementId,
    frame: Rect,
    transform: Matrix4<f64>,
    style: ElementStyle,
}

impl OverlayElement {
    pub(crate) fn new(id: ElementId, style: ElementStyle) -> Self {
        Self {
            id,
            frame: Rect::ZERO,
            transform: Matrix4::identity(),
            style,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn transform(&self) -> &Matrix4<f64> {
        &self.transform
    }

    pub fn style(&self) -> ElementStyle {
        self.style
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub(crate) fn set_transform(&mut self, transform: Matrix4<f64>) {
        self.transform = transform;
    }
}
