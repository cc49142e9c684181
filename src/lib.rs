//! Procedural generator of Mondrian-style paintings
//!
//! The unit square is subdivided by random axis-aligned cuts, each running
//! between two existing parallel lines. Live polygons are split whenever a
//! cut crosses them exactly twice, and candidates leaving a face below the
//! minimum area are rejected and redrawn. The finished subdivision is
//! coloured from a cumulative palette and rendered as SVG or PNG.

#![forbid(unsafe_code)]

/// Canvas state, candidate generation, splitting and the growth loop
pub mod algorithm;
/// Vectors, line segments and polygons
pub mod geometry;
/// Command line, configuration, errors and file output
pub mod io;
/// Palettes, finished paintings and SVG rendering
pub mod render;

pub use io::error::{AlgorithmError, Result};
