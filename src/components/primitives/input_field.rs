//! InputField Component
//!
//! Labeled single-line text input with variant/size styling, a clear button,
//! a password visibility toggle, a loading spinner and optional icons.

use gpui::{
    div, prelude::*, px, App, ClickEvent, Context, Entity, EventEmitter, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, ParentElement, Render, Rgba, SharedString,
    StatefulInteractiveElement, Styled, Window,
};
use uuid::Uuid;

use super::button::IconButton;
use crate::eventing::InputEvent;
use crate::i18n::{t, Locale};
use crate::state::input_field_state::{InputFieldProps, InputFieldState, TrailingAffordance};
use crate::theme::colors::FormColors;
use crate::theme::input_style::{self, BorderSides};

/// An input field entity
pub struct InputField {
    id: SharedString,
    state: InputFieldState,
    locale: Locale,
    focus_handle: FocusHandle,
    on_change: Option<Box<dyn Fn(&str, &mut Context<Self>) + 'static>>,
    on_clear: Option<Box<dyn Fn(&mut Context<Self>) + 'static>>,
}

impl EventEmitter<InputEvent> for InputField {}

impl InputField {
    /// Create a new input field with a generated id
    pub fn new(props: InputFieldProps, cx: &mut Context<Self>) -> Self {
        Self {
            id: format!("input-{}", Uuid::new_v4()).into(),
            state: InputFieldState::new(props),
            locale: Locale::default(),
            focus_handle: cx.focus_handle(),
            on_change: None,
            on_clear: None,
        }
    }

    /// Get the element id
    pub fn id(&self) -> &SharedString {
        &self.id
    }

    /// Use an explicit element id
    pub fn set_id(&mut self, id: impl Into<SharedString>) {
        self.id = id.into();
    }

    /// Get the value
    pub fn value(&self) -> &str {
        self.state.value()
    }

    /// Set the value without emitting a change
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.state.set_value(value);
    }

    /// Get the props
    pub fn props(&self) -> &InputFieldProps {
        &self.state.props
    }

    /// Replace the props, keeping value and password visibility
    pub fn set_props(&mut self, props: InputFieldProps) {
        self.state.props = props;
    }

    /// Set the language of built-in labels
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Set the change handler
    pub fn on_change(&mut self, handler: impl Fn(&str, &mut Context<Self>) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    /// Set the clear handler. With a clear handler registered, the clear
    /// button reports `Cleared` instead of a change to the empty string.
    pub fn on_clear(&mut self, handler: impl Fn(&mut Context<Self>) + 'static) {
        self.on_clear = Some(Box::new(handler));
        self.state.set_has_clear_handler(true);
    }

    /// Forward a state event to the registered handler and subscribers
    fn forward(&mut self, event: InputEvent, cx: &mut Context<Self>) {
        match &event {
            InputEvent::Changed { value } => {
                if let Some(ref handler) = self.on_change {
                    handler(value, cx);
                }
            }
            InputEvent::Cleared => {
                if let Some(ref handler) = self.on_clear {
                    handler(cx);
                }
            }
            InputEvent::PasswordVisibilityChanged { .. } => {}
        }
        cx.emit(event);
        cx.notify();
    }

    /// Handle a key press while focused
    fn handle_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        if keystroke.modifiers.control || keystroke.modifiers.platform {
            return;
        }

        let result = match keystroke.key.as_str() {
            "backspace" => self.state.backspace(),
            _ => match keystroke.key_char.as_deref() {
                Some(text) if !text.chars().any(char::is_control) => self.state.insert_text(text),
                _ => None,
            },
        };

        if let Some(event) = result {
            cx.stop_propagation();
            self.forward(event, cx);
        }
    }

    /// Handle a clear button press
    fn handle_clear(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(event) = self.state.clear() {
            tracing::debug!(id = %self.id, "InputField cleared");
            window.focus(&self.focus_handle);
            self.forward(event, cx);
        }
    }

    /// Handle a password toggle press
    fn handle_toggle_password(&mut self, cx: &mut Context<Self>) {
        if let Some(event) = self.state.toggle_password() {
            self.forward(event, cx);
        }
    }

    fn render_label(&self) -> Option<impl IntoElement> {
        let label = self.state.props.label.clone()?;
        let color = input_style::label_color(self.state.props.disabled, self.state.has_error());
        Some(
            div()
                .id(SharedString::from(format!("{}-label", self.id)))
                .mb_1()
                .text_size(px(self.state.style().metrics.label_size))
                .font_weight(gpui::FontWeight::MEDIUM)
                .text_color(FormColors::hex(color))
                .child(label),
        )
    }

    fn render_trailing(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let icon_size = self.state.style().metrics.icon_size;
        let entity = cx.entity();

        div()
            .absolute()
            .top_0()
            .bottom_0()
            .right(px(12.0))
            .flex()
            .items_center()
            .gap_1()
            .children(self.state.trailing().into_iter().map(|item| match item {
                TrailingAffordance::Spinner => div()
                    .text_size(px(icon_size))
                    .text_color(FormColors::text_muted())
                    .child("◌")
                    .into_any_element(),
                TrailingAffordance::ClearButton => {
                    let entity = entity.clone();
                    IconButton::new(t(self.locale, "input-clear"), "✕")
                        .size(icon_size * 0.8)
                        .disabled(self.state.props.disabled)
                        .on_click(move |_event: &ClickEvent, window, cx| {
                            entity.update(cx, |this, cx| this.handle_clear(window, cx));
                        })
                        .into_any_element()
                }
                TrailingAffordance::PasswordToggle { visible } => {
                    let entity = entity.clone();
                    let (label, glyph) = if visible {
                        (t(self.locale, "input-hide-password"), "◡")
                    } else {
                        (t(self.locale, "input-show-password"), "◉")
                    };
                    IconButton::new(label, glyph)
                        .size(icon_size * 0.8)
                        .disabled(self.state.props.disabled)
                        .on_click(move |_event: &ClickEvent, _window, cx| {
                            entity.update(cx, |this, cx| this.handle_toggle_password(cx));
                        })
                        .into_any_element()
                }
                TrailingAffordance::RightIcon => div()
                    .text_size(px(icon_size))
                    .text_color(FormColors::text_muted())
                    .child(self.state.props.right_icon.clone().unwrap_or_default())
                    .into_any_element(),
            }))
    }

    fn render_description(&self) -> Option<impl IntoElement> {
        let text = self.state.description()?.to_string();
        let has_error = self.state.has_error();
        let suffix = if self.state.props.error_message.as_deref().is_some_and(|m| !m.is_empty()) {
            "error"
        } else {
            "helper"
        };

        Some(
            div()
                .id(SharedString::from(format!("{}-{}", self.id, suffix)))
                .mt_1()
                .text_sm()
                .text_color(FormColors::hex(input_style::description_color(has_error)))
                .child(text),
        )
    }
}

impl Focusable for InputField {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for InputField {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let style = self.state.style();
        let metrics = style.metrics;
        let control_disabled = self.state.is_control_disabled();
        let is_focused = !control_disabled && self.focus_handle.is_focused(window);
        let transparent = gpui::rgba(0x00000000);

        let background: Rgba = if is_focused {
            style.focus_background.or(style.background)
        } else {
            style.background
        }
        .map_or(transparent, FormColors::hex);

        let border_color = if is_focused {
            style.focus_border_color.unwrap_or(style.border_color)
        } else {
            style.border_color
        };

        let ring_color = match style.focus_ring {
            Some(ring) if is_focused => FormColors::hex(ring),
            _ => transparent,
        };

        let value = self.state.value();
        let (text, text_color) = if value.is_empty() {
            (
                self.state.props.placeholder.clone().unwrap_or_default(),
                FormColors::text_muted(),
            )
        } else {
            (self.state.display_value(), FormColors::hex(style.text_color))
        };

        let mut input_box = div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .relative()
            .w_full()
            .flex()
            .items_center()
            .pl(px(style.padding_left))
            .pr(px(style.padding_right))
            .py(px(metrics.padding_y))
            .bg(background)
            .border_color(FormColors::hex(border_color))
            .rounded(px(style.corner_radius))
            .text_size(px(metrics.font_size))
            .text_color(text_color)
            .child(div().flex_1().overflow_hidden().child(text));

        input_box = match (style.border_sides, style.border_width >= 2.0) {
            (BorderSides::None, _) => input_box,
            (BorderSides::All, true) => input_box.border_2(),
            (BorderSides::All, false) => input_box.border_1(),
            (BorderSides::Bottom, true) => input_box.border_b_2(),
            (BorderSides::Bottom, false) => input_box.border_b_1(),
        };

        if let Some(icon) = self.state.props.left_icon.clone() {
            input_box = input_box.child(
                div()
                    .absolute()
                    .top_0()
                    .bottom_0()
                    .left(px(12.0))
                    .flex()
                    .items_center()
                    .text_size(px(metrics.icon_size))
                    .text_color(FormColors::text_muted())
                    .child(icon),
            );
        }

        input_box = input_box.child(self.render_trailing(cx));

        if control_disabled {
            input_box = input_box.opacity(0.5).cursor_not_allowed();
        } else {
            input_box = input_box
                .cursor_text()
                .on_click(cx.listener(|this, _event: &ClickEvent, window, _cx| {
                    window.focus(&this.focus_handle);
                }))
                .on_key_down(cx.listener(Self::handle_key_down));
        }

        div()
            .w_full()
            .flex()
            .flex_col()
            .children(self.render_label())
            .child(
                div()
                    .p(px(2.0))
                    .border_2()
                    .border_color(ring_color)
                    .rounded(px(style.corner_radius + 2.0))
                    .child(input_box),
            )
            .children(self.render_description())
    }
}

/// Create an input field entity
pub fn input_field<V: 'static>(
    props: InputFieldProps,
    value: impl Into<String>,
    locale: Locale,
    cx: &mut Context<V>,
) -> Entity<InputField> {
    let value = value.into();

    cx.new(|cx| {
        let mut input = InputField::new(props, cx);
        input.set_value(value);
        input.set_locale(locale);
        input
    })
}
