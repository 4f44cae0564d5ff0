pub mod channel_display_tree;
pub mod logging_display_tree;
