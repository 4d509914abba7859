//! IconButton Component
//!
//! Small glyph button placed inside an input box.

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::FormColors;

/// A borderless button showing a single glyph
#[derive(IntoElement)]
pub struct IconButton {
    id: ElementId,
    icon: SharedString,
    size: f32,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl IconButton {
    /// Create a new icon button. The id doubles as the accessible name.
    pub fn new(id: impl Into<ElementId>, icon: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            icon: icon.into(),
            size: 16.0,
            disabled: false,
            on_click: None,
        }
    }

    /// Set the glyph size in pixels
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for IconButton {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let mut element = div()
            .id(self.id)
            .p(px(2.0))
            .rounded_sm()
            .flex()
            .items_center()
            .justify_center()
            .text_size(px(self.size))
            .text_color(FormColors::text_muted())
            .child(self.icon);

        if self.disabled {
            element = element.opacity(0.5);
        } else {
            element = element
                .cursor_pointer()
                .hover(|s| s.bg(FormColors::icon_button_hover()).text_color(FormColors::text_secondary()));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}
