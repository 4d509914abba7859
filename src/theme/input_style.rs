//! Input Styles - Variant × Size × State Lookup
//!
//! Every InputField look is one entry of a finite table, resolved once per
//! render. Colors are palette hex values from [`FormColors`].

use serde::{Deserialize, Serialize};

use super::colors::FormColors;
use super::typography::Typography;

/// Visual variant of an input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputVariant {
    /// Gray fill, no border
    Filled,
    /// White with a 1px border
    #[default]
    Outlined,
    /// Transparent with an underline
    Ghost,
}

/// Input size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputSize {
    #[serde(rename = "sm")]
    Small,
    #[default]
    #[serde(rename = "md")]
    Medium,
    #[serde(rename = "lg")]
    Large,
}

/// Interaction state that picks the color row of the table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InputState {
    #[default]
    Base,
    Error,
    Disabled,
}

impl InputState {
    /// Disabled wins over error, error over base.
    pub fn resolve(disabled: bool, has_error: bool) -> Self {
        if disabled {
            InputState::Disabled
        } else if has_error {
            InputState::Error
        } else {
            InputState::Base
        }
    }
}

/// Size-dependent metrics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeMetrics {
    pub padding_x: f32,
    pub padding_y: f32,
    pub font_size: f32,
    pub icon_size: f32,
    pub label_size: f32,
}

impl InputSize {
    pub fn metrics(&self) -> SizeMetrics {
        match self {
            InputSize::Small => SizeMetrics {
                padding_x: Typography::SPACE_3,
                padding_y: Typography::SPACE_1_5,
                font_size: Typography::TEXT_SM,
                icon_size: Typography::ICON_SM,
                label_size: Typography::TEXT_SM,
            },
            InputSize::Medium => SizeMetrics {
                padding_x: Typography::SPACE_4,
                padding_y: Typography::SPACE_2_5,
                font_size: Typography::TEXT_BASE,
                icon_size: Typography::ICON_MD,
                label_size: Typography::TEXT_SM,
            },
            InputSize::Large => SizeMetrics {
                padding_x: Typography::SPACE_4,
                padding_y: Typography::SPACE_3,
                font_size: Typography::TEXT_LG,
                icon_size: Typography::ICON_LG,
                label_size: Typography::TEXT_BASE,
            },
        }
    }
}

/// Which edges carry the border
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderSides {
    None,
    All,
    Bottom,
}

/// Fully resolved look of the input box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputStyle {
    pub metrics: SizeMetrics,
    /// `None` is transparent
    pub background: Option<u32>,
    pub focus_background: Option<u32>,
    pub border_sides: BorderSides,
    pub border_width: f32,
    pub border_color: u32,
    pub focus_border_color: Option<u32>,
    /// Focus ring color; `None` disables the ring
    pub focus_ring: Option<u32>,
    pub text_color: u32,
    pub corner_radius: f32,
    pub padding_left: f32,
    pub padding_right: f32,
}

impl InputStyle {
    /// Look up the table entry
    pub fn resolve(variant: InputVariant, size: InputSize, state: InputState) -> Self {
        let metrics = size.metrics();
        let disabled = state == InputState::Disabled;
        let text_color = if disabled {
            FormColors::GRAY_400
        } else {
            FormColors::GRAY_900
        };

        let base = InputStyle {
            metrics,
            background: Some(FormColors::WHITE),
            focus_background: None,
            border_sides: BorderSides::All,
            border_width: 1.0,
            border_color: FormColors::GRAY_300,
            focus_border_color: Some(FormColors::BLUE_500),
            focus_ring: Some(FormColors::BLUE_500),
            text_color,
            corner_radius: 8.0,
            padding_left: metrics.padding_x,
            padding_right: metrics.padding_x,
        };

        match (variant, state) {
            (InputVariant::Filled, InputState::Base) => InputStyle {
                background: Some(FormColors::GRAY_100),
                focus_background: Some(FormColors::WHITE),
                border_sides: BorderSides::None,
                border_width: 0.0,
                focus_border_color: None,
                ..base
            },
            (InputVariant::Filled, InputState::Error) => InputStyle {
                background: Some(FormColors::RED_50),
                focus_background: Some(FormColors::WHITE),
                border_sides: BorderSides::None,
                border_width: 0.0,
                focus_border_color: None,
                focus_ring: Some(FormColors::RED_500),
                ..base
            },
            (InputVariant::Filled, InputState::Disabled) => InputStyle {
                background: Some(FormColors::GRAY_50),
                border_sides: BorderSides::None,
                border_width: 0.0,
                focus_border_color: None,
                focus_ring: None,
                ..base
            },
            (InputVariant::Outlined, InputState::Base) => base,
            (InputVariant::Outlined, InputState::Error) => InputStyle {
                border_color: FormColors::RED_500,
                focus_border_color: Some(FormColors::RED_500),
                focus_ring: Some(FormColors::RED_500),
                ..base
            },
            (InputVariant::Outlined, InputState::Disabled) => InputStyle {
                background: Some(FormColors::GRAY_50),
                border_color: FormColors::GRAY_200,
                focus_border_color: None,
                focus_ring: None,
                ..base
            },
            (InputVariant::Ghost, _) => InputStyle {
                background: None,
                border_sides: BorderSides::Bottom,
                border_width: 2.0,
                border_color: match state {
                    InputState::Base => FormColors::GRAY_300,
                    InputState::Error => FormColors::RED_500,
                    InputState::Disabled => FormColors::GRAY_200,
                },
                focus_border_color: match state {
                    InputState::Base => Some(FormColors::BLUE_500),
                    InputState::Error => Some(FormColors::RED_500),
                    InputState::Disabled => None,
                },
                focus_ring: None,
                corner_radius: 0.0,
                ..base
            },
        }
    }

    /// Make room for icons and trailing buttons
    pub fn with_affordances(mut self, leading: bool, trailing: bool) -> Self {
        if leading {
            self.padding_left = Typography::SPACE_10;
        }
        if trailing {
            self.padding_right = Typography::SPACE_10;
        }
        self
    }
}

/// Label text color
pub fn label_color(disabled: bool, has_error: bool) -> u32 {
    if has_error {
        FormColors::RED_700
    } else if disabled {
        FormColors::GRAY_400
    } else {
        FormColors::GRAY_700
    }
}

/// Helper / error text color
pub fn description_color(has_error: bool) -> u32 {
    if has_error {
        FormColors::RED_600
    } else {
        FormColors::GRAY_600
    }
}
