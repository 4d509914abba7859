//! Theme - Colors, Typography and Component Style Tables

pub mod colors;
pub mod input_style;
pub mod typography;

pub use colors::FormColors;
pub use input_style::{InputSize, InputState, InputStyle, InputVariant};
pub use typography::Typography;
