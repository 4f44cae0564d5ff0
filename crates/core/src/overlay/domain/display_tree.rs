use super::overlay_element::{ElementId, OverlayElement};

/// Rendering-collaborator seam for overlay element lifecycle.
///
/// The tracker owns every element and calls these hooks synchronously
/// from `update`; implementations only mirror attach, update, and
/// detach into whatever display hierarchy they manage. They must not
/// retain element state beyond what they copy out.
pub trait DisplayTree: Send {
    /// A newly created element was inserted into the overlay.
    fn attach(&mut self, element: &OverlayElement);

    /// An element's geometry or transform was applied this frame.
    fn update(&mut self, element: &OverlayElement);

    /// The element with this id left the overlay and was dropped.
    fn detach(&mut self, id: ElementId);
}

/// Display tree that discards all events.
///
/// Used headless and in tests where the element map itself is the
/// observable output.
pub struct NullDisplayTree;

impl DisplayTree for NullDisplayTree {
    fn attach(&mut self, _element: &OverlayElement) {}
    fn update(&mut self, _element: &OverlayElement) {}
    fn detach(&mut self, _id: ElementId) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::domain::overlay_element::ElementStyle;

    #[test]
    fn test_null_tree_all_methods_are_noop() {
        let mut tree = NullDisplayTree;
        let element = OverlayElement::new(1, ElementStyle::default());
        tree.attach(&element);
        tree.update(&element);
        tree.detach(1);
        // No panics = success
    }
}
