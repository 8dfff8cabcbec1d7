pub mod demo_options;
pub mod detect_frame_use_case;
pub mod frame_prep;
pub mod frame_stats;
pub mod key_command;
