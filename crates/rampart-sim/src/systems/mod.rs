//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions that take `&mut World` (or `&World` for read-only).
//! Per-session state they need is passed in explicitly, never held.

pub mod cleanup;
pub mod combat;
pub mod movement;
pub mod snapshot;
pub mod wave_director;
