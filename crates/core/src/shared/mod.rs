pub mod constants;
pub mod detected_face;
pub mod orientation;
pub mod rect;
