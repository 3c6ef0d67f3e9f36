//! Waypoint Harness: concrete worlds and a runner over the search layer.
//!
//! Worlds implement the kernel's `Node` capability for a concrete puzzle
//! and the search layer's `SearchWorld` for its goal. The runner wires a
//! world, a root and a policy together and condenses the outcome into a
//! [`runner::RunReport`].

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod runner;
pub mod worlds;
