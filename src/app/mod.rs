//! Application Layer
//!
//! App initialization, window management and the demo gallery view.

pub mod application;
pub mod gallery;
