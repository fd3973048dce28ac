//! Enemy behaviour for RAMPART.
//!
//! Implements the waypoint-following state machine and damage
//! application for enemy entities.

pub mod fsm;

pub use rampart_core as core;
