//! InputFieldState - Props and Editing State of an InputField
//!
//! Everything an InputField shows is derived here: effective input type,
//! error state, resolved style, which trailing affordances are visible and
//! which description line to show.

use crate::eventing::InputEvent;
use crate::theme::input_style::{InputSize, InputState, InputStyle, InputVariant};

/// HTML-style input type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
    Number,
    Tel,
}

/// Trailing element shown inside the input, right side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingAffordance {
    Spinner,
    ClearButton,
    PasswordToggle { visible: bool },
    RightIcon,
}

/// Static configuration of an InputField
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputFieldProps {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub helper_text: Option<String>,
    pub error_message: Option<String>,
    pub disabled: bool,
    pub invalid: bool,
    pub variant: InputVariant,
    pub size: InputSize,
    pub input_type: InputType,
    pub show_clear_button: bool,
    pub show_password_toggle: bool,
    pub loading: bool,
    pub left_icon: Option<String>,
    pub right_icon: Option<String>,
}

/// Props plus the mutable value and password visibility
#[derive(Debug, Clone, Default)]
pub struct InputFieldState {
    pub props: InputFieldProps,
    value: String,
    show_password: bool,
    /// The host handles clearing itself
    has_clear_handler: bool,
}

impl InputFieldState {
    pub fn new(props: InputFieldProps) -> Self {
        Self {
            props,
            ..Default::default()
        }
    }

    // ==================== Getters ====================

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_password_visible(&self) -> bool {
        self.show_password
    }

    /// `invalid` or a non-empty error message
    pub fn has_error(&self) -> bool {
        self.props.invalid || self.props.error_message.as_deref().is_some_and(|m| !m.is_empty())
    }

    /// Type actually presented; a shown password is plain text
    pub fn effective_type(&self) -> InputType {
        if self.props.input_type == InputType::Password && self.show_password {
            InputType::Text
        } else {
            self.props.input_type
        }
    }

    /// Whether the text should be masked
    pub fn is_masked(&self) -> bool {
        self.effective_type() == InputType::Password
    }

    /// The control rejects input while disabled or loading
    pub fn is_control_disabled(&self) -> bool {
        self.props.disabled || self.props.loading
    }

    /// Text displayed in the box, masked for hidden passwords
    pub fn display_value(&self) -> String {
        if self.is_masked() {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    /// Resolved box style, including room for icons and trailing buttons
    pub fn style(&self) -> InputStyle {
        let state = InputState::resolve(self.props.disabled, self.has_error());
        let trailing = self.props.show_clear_button
            || self.props.show_password_toggle
            || self.props.right_icon.is_some();
        InputStyle::resolve(self.props.variant, self.props.size, state)
            .with_affordances(self.props.left_icon.is_some(), trailing)
    }

    /// Visible trailing elements, left to right.
    ///
    /// A loading input shows only the spinner.
    pub fn trailing(&self) -> Vec<TrailingAffordance> {
        if self.props.loading {
            return vec![TrailingAffordance::Spinner];
        }

        let mut items = Vec::new();
        if self.props.show_clear_button && !self.value.is_empty() {
            items.push(TrailingAffordance::ClearButton);
        }
        if self.props.show_password_toggle && self.props.input_type == InputType::Password {
            items.push(TrailingAffordance::PasswordToggle {
                visible: self.show_password,
            });
        }
        if self.props.right_icon.is_some() {
            items.push(TrailingAffordance::RightIcon);
        }
        items
    }

    /// Description line: the error message wins over helper text
    pub fn description(&self) -> Option<&str> {
        self.props
            .error_message
            .as_deref()
            .filter(|m| !m.is_empty())
            .or_else(|| self.props.helper_text.as_deref().filter(|m| !m.is_empty()))
    }

    // ==================== Setters ====================

    /// Replace the value without emitting an event
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn set_has_clear_handler(&mut self, has_handler: bool) {
        self.has_clear_handler = has_handler;
    }

    // ==================== Transitions ====================

    /// Append typed text
    pub fn insert_text(&mut self, text: &str) -> Option<InputEvent> {
        if self.is_control_disabled() || text.is_empty() {
            return None;
        }
        self.value.push_str(text);
        Some(self.changed())
    }

    /// Delete the last character
    pub fn backspace(&mut self) -> Option<InputEvent> {
        if self.is_control_disabled() {
            return None;
        }
        self.value.pop()?;
        Some(self.changed())
    }

    /// Clear button press.
    ///
    /// With a host clear handler the event is `Cleared`, otherwise the clear
    /// is reported as a change to the empty string.
    pub fn clear(&mut self) -> Option<InputEvent> {
        if self.props.disabled {
            return None;
        }
        self.value.clear();
        if self.has_clear_handler {
            Some(InputEvent::Cleared)
        } else {
            Some(self.changed())
        }
    }

    /// Password eye button press
    pub fn toggle_password(&mut self) -> Option<InputEvent> {
        if self.props.disabled {
            return None;
        }
        self.show_password = !self.show_password;
        Some(InputEvent::PasswordVisibilityChanged {
            visible: self.show_password,
        })
    }

    fn changed(&self) -> InputEvent {
        InputEvent::Changed {
            value: self.value.clone(),
        }
    }
}
