//! Primitive Components
//!
//! Basic building blocks like buttons, checkboxes and inputs.

pub mod button;
pub mod checkbox;
pub mod input_field;

pub use button::IconButton;
pub use checkbox::Checkbox;
pub use input_field::{input_field, InputField};
