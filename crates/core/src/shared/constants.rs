/// Border width of a face indicator box, in overlay points.
pub const BORDER_WIDTH: f64 = 5.0;

/// Border color of a face indicator box, RGBA.
pub const BORDER_COLOR: [u8; 4] = [255, 138, 0, 255];

/// Asset name of the static badge image drawn inside each indicator box.
pub const BADGE_ASSET: &str = "face-badge.png";

/// Typical simultaneous face count. Capacity hint for the element map
/// only; the tracker enforces no cap.
pub const EXPECTED_FACES: usize = 10;
