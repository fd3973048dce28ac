//! Core types and definitions for the RAMPART simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, stat tables, components, intents, state snapshots, events,
//! and the ports used by renderers and input sources.
//! It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod events;
pub mod ports;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
