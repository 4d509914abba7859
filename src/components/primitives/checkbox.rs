//! Checkbox Component
//!
//! Tri-state checkbox used for row and select-all selection.

use gpui::{
    div, px, App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StatefulInteractiveElement, Styled, Window,
};

use crate::domain::selection::CheckState;
use crate::theme::colors::FormColors;
use crate::theme::typography::Typography;

/// A checkbox component
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    state: CheckState,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Checkbox {
    /// Create a new checkbox
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            state: CheckState::Unchecked,
            on_change: None,
        }
    }

    /// Set checked / unchecked
    pub fn checked(mut self, checked: bool) -> Self {
        self.state = CheckState::from_checked(checked);
        self
    }

    /// Set the full tri-state value
    pub fn state(mut self, state: CheckState) -> Self {
        self.state = state;
        self
    }

    /// Set the change handler; receives the requested checked value
    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let state = self.state;
        let on_change = self.on_change;

        let filled = state != CheckState::Unchecked;
        let box_bg = if filled {
            FormColors::accent()
        } else {
            FormColors::surface()
        };
        let border_color = if filled {
            FormColors::accent()
        } else {
            FormColors::control_border()
        };

        let mark = match state {
            CheckState::Checked => "✓",
            CheckState::Indeterminate => "–",
            CheckState::Unchecked => "",
        };

        let mut checkbox = div()
            .id(self.id)
            .flex()
            .items_center()
            .cursor_pointer()
            .child(
                div()
                    .size(px(Typography::ICON_SM))
                    .rounded_sm()
                    .border_1()
                    .border_color(border_color)
                    .bg(box_bg)
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(FormColors::text_light())
                    .text_size(px(11.0))
                    .child(mark),
            );

        if let Some(handler) = on_change {
            checkbox = checkbox.on_click(move |_event, window, cx| {
                // Row clicks also toggle; keep this click from reaching the row
                cx.stop_propagation();
                handler(!state.is_checked(), window, cx);
            });
        }

        checkbox
    }
}
