//! Components - Reusable UI Components
//!
//! GPUI shells around the plain state in `state`. They render and forward
//! events but hold no table or input logic of their own.

pub mod composite;
pub mod primitives;
