//! Minimal structured quadrilateral mesh kernel.
//!
//! This is deliberately the smallest kernel the probe can exercise: a
//! [`Triangulation`](triangulation::Triangulation) of quad cells, structured
//! generators over an axis-aligned box, and uniform global refinement. Cell
//! counts after refinement are deterministic (each pass quarters every cell),
//! which is what makes the probe's output reproducible.

pub mod generator;
pub mod triangulation;

pub use generator::{hyper_cube, subdivided_hyper_cube};
pub use triangulation::Triangulation;
