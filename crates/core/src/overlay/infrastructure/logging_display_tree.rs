use crate::overlay::domain::display_tree::DisplayTree;
use crate::overlay::domain::overlay_element::{ElementId, OverlayElement};

/// Mirrors display-tree events to the `log` crate at debug level.
///
/// Useful headless, where watching elements come and go is the whole
/// point of running the tracker.
pub struct LoggingDisplayTree;

impl DisplayTree for LoggingDisplayTree {
    fn attach(&mut self, element: &OverlayElement) {
        log::debug!("overlay element {} attached", element.id());
    }

    fn update(&mut self, element: &OverlayElement) {
        let frame = element.frame();
        log::debug!(
            "overlay element {} -> ({:.1}, {:.1}) {}x{}",
            element.id(),
            frame.x,
            frame.y,
            frame.width,
            frame.height
        );
    }

    fn detach(&mut self, id: ElementId) {
        log::debug!("overlay element {id} detached");
    }
}
