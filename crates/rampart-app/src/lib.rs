//! RAMPART command-line application.
//!
//! This crate wires the simulation engine to input sources and renderers
//! and drives it from a fixed-rate game loop.

pub mod game_loop;
pub mod input;
pub mod render;
pub mod settings;

pub use rampart_core as core;
