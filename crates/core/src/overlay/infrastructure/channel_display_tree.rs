use crossbeam_channel::{Receiver, Sender};

use crate::overlay::domain::display_tree::DisplayTree;
use crate::overlay::domain::overlay_element::{ElementId, OverlayElement};
use crate::shared::rect::Rect;

/// A display-tree lifecycle event, self-contained so it can cross a
/// channel boundary without borrowing tracker state.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayEvent {
    Attached { element: ElementId },
    Updated { element: ElementId, frame: Rect },
    Detached(ElementId),
}

/// Forwards display-tree events over a channel for out-of-tree
/// observers (the replay pipeline, tests, a rendering process).
///
/// A disconnected receiver is tolerated: events are dropped silently,
/// so the tracker keeps working after its observer goes away.
pub struct ChannelDisplayTree {
    sender: Sender<DisplayEvent>,
}

impl ChannelDisplayTree {
    /// Creates the tree and the receiving end of its event stream.
    pub fn new() -> (Self, Receiver<DisplayEvent>) {
        let (sender, receiver) = crossbeam_channel::unbounded();
        (Self { sender }, receiver)
    }
}

impl DisplayTree for ChannelDisplayTree {
    fn attach(&mut self, element: &OverlayElement) {
        let _ = self.sender.send(DisplayEvent::Attached {
            element: element.id(),
        });
    }

    fn update(&mut self, element: &OverlayElement) {
        let _ = self.sender.send(DisplayEvent::Updated {
            element: element.id(),
            frame: element.frame(),
        });
    }

    fn detach(&mut self, id: ElementId) {
        let _ = self.sender.send(DisplayEvent::Detached(id));
    }
}
