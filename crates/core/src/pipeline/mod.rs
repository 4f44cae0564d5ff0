pub mod replay_overlay_use_case;
