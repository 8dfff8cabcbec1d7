//! Core library for the facelive demo: cascade face detection behind a
//! provider trait, looping frame sources, keyboard-driven runtime options,
//! and the statistics HUD. Window and keyboard wiring live in the CLI crate.

pub mod detection;
pub mod overlay;
pub mod pipeline;
pub mod shared;
pub mod video;
