//! World implementations for the harness runner.

pub mod sliding_tile;
