//! Composite Components
//!
//! Components built out of primitives.

pub mod data_table;
