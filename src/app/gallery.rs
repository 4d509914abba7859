//! Gallery - Demo View of the Components
//!
//! Shows InputField variants and a selectable, sortable user table.

use gpui::{
    div, prelude::*, px, Context, Entity, FontWeight, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};

use crate::components::composite::data_table::{data_table, Column, DataTable};
use crate::components::primitives::input_field::{input_field, InputField};
use crate::domain::config::GalleryConfig;
use crate::domain::value::{CellValue, Record};
use crate::eventing::{InputEvent, TableEvent};
use crate::i18n::{t, t_format, Locale};
use crate::state::input_field_state::{InputFieldProps, InputType};
use crate::theme::colors::FormColors;
use crate::theme::input_style::InputVariant;

/// Sample row type
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub active: bool,
}

impl User {
    fn new(id: i64, name: &str, email: &str, role: &str, active: bool) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            active,
        }
    }

    fn status(&self) -> &'static str {
        if self.active { "active" } else { "inactive" }
    }
}

impl Record for User {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            "role" => self.role.as_str().into(),
            "status" => self.status().into(),
            _ => CellValue::Null,
        }
    }
}

/// Sample users shown in the table
pub fn sample_users() -> Vec<User> {
    vec![
        User::new(1, "John Doe", "john@example.com", "Admin", true),
        User::new(2, "Jane Smith", "jane@example.com", "Editor", true),
        User::new(3, "Bob Johnson", "bob@example.com", "Viewer", false),
        User::new(4, "Alice Brown", "alice@example.com", "Editor", true),
    ]
}

/// Columns of the sample table; status renders as a badge
pub fn user_columns() -> Vec<Column<User>> {
    vec![
        Column::new("name", "Name").sortable(),
        Column::new("email", "Email").sortable(),
        Column::new("role", "Role").sortable(),
        Column::new("status", "Status").sortable().render(|value, _row, _index| {
            let active = matches!(value, CellValue::Text(s) if s == "active");
            let (bg, fg) = if active {
                (FormColors::GREEN_100, FormColors::GREEN_800)
            } else {
                (FormColors::RED_100, FormColors::RED_800)
            };
            div()
                .px_2()
                .py_1()
                .rounded_full()
                .bg(FormColors::hex(bg))
                .text_color(FormColors::hex(fg))
                .text_xs()
                .font_weight(FontWeight::SEMIBOLD)
                .child(value.display_text())
                .into_any_element()
        }),
    ]
}

/// The gallery view
pub struct Gallery {
    locale: Locale,
    basic_inputs: Vec<Entity<InputField>>,
    state_inputs: Vec<Entity<InputField>>,
    table: Entity<DataTable<User>>,
    selected_count: usize,
}

impl Gallery {
    pub fn new(config: &GalleryConfig, locale: Locale, cx: &mut Context<Self>) -> Self {
        let demo = &config.input;
        let styled = |props: InputFieldProps| InputFieldProps {
            variant: demo.variant,
            size: demo.size,
            ..props
        };

        let search = input_field(
            styled(InputFieldProps {
                label: Some("Search".into()),
                placeholder: Some("Search users...".into()),
                show_clear_button: true,
                left_icon: Some("⌕".into()),
                ..Default::default()
            }),
            "",
            locale,
            cx,
        );
        search.update(cx, |input, _cx| {
            input.on_clear(|_cx| tracing::debug!("Search cleared"));
        });

        let email = input_field(
            styled(InputFieldProps {
                label: Some("Email".into()),
                placeholder: Some("Enter your email".into()),
                input_type: InputType::Email,
                helper_text: Some("We'll never share your email".into()),
                ..Default::default()
            }),
            "",
            locale,
            cx,
        );

        let password = input_field(
            styled(InputFieldProps {
                label: Some("Password".into()),
                placeholder: Some("Enter your password".into()),
                input_type: InputType::Password,
                show_password_toggle: true,
                ..Default::default()
            }),
            "",
            locale,
            cx,
        );

        let state_inputs = vec![
            input_field(
                InputFieldProps {
                    label: Some("Filled Variant".into()),
                    placeholder: Some("Filled input".into()),
                    variant: InputVariant::Filled,
                    ..Default::default()
                },
                "",
                locale,
                cx,
            ),
            input_field(
                InputFieldProps {
                    label: Some("Ghost Variant".into()),
                    placeholder: Some("Ghost input".into()),
                    variant: InputVariant::Ghost,
                    ..Default::default()
                },
                "",
                locale,
                cx,
            ),
            input_field(
                InputFieldProps {
                    label: Some("Error State".into()),
                    placeholder: Some("Invalid input".into()),
                    invalid: true,
                    error_message: Some("This field is required".into()),
                    ..Default::default()
                },
                "",
                locale,
                cx,
            ),
            input_field(
                InputFieldProps {
                    label: Some("Disabled State".into()),
                    placeholder: Some("Disabled input".into()),
                    disabled: true,
                    ..Default::default()
                },
                "",
                locale,
                cx,
            ),
            input_field(
                InputFieldProps {
                    label: Some("Loading State".into()),
                    placeholder: Some("Checking...".into()),
                    loading: true,
                    show_clear_button: true,
                    ..Default::default()
                },
                "busy",
                locale,
                cx,
            ),
        ];

        let basic_inputs = vec![search, email, password];
        for input in &basic_inputs {
            cx.subscribe(input, |_this, _input, event: &InputEvent, _cx| {
                if let InputEvent::PasswordVisibilityChanged { visible } = event {
                    tracing::debug!(visible, "Password visibility changed");
                }
            })
            .detach();
        }

        let table = data_table(user_columns(), sample_users(), cx);
        table.update(cx, |table, _cx| {
            table.set_locale(locale);
            table.set_selectable(config.table.selectable);
            table.set_loading(config.table.loading);
            table.set_empty_message(config.table.empty_message.clone().map(SharedString::from));
            table.on_row_select(|rows, _cx| {
                let names: Vec<&str> = rows.iter().map(|u| u.name.as_str()).collect();
                tracing::info!(?names, "Selected users");
            });
        });

        cx.subscribe(&table, |this, _table, event: &TableEvent<User>, cx| {
            if let Some(rows) = event.selected_rows() {
                this.selected_count = rows.len();
                cx.notify();
            }
        })
        .detach();

        Self {
            locale,
            basic_inputs,
            state_inputs,
            table,
            selected_count: 0,
        }
    }

    fn render_section_title(title: SharedString) -> impl IntoElement {
        div()
            .mb_6()
            .text_2xl()
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(FormColors::hex(FormColors::GRAY_900))
            .child(title)
    }

    fn render_input_column(title: &'static str, inputs: &[Entity<InputField>]) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div()
                    .text_lg()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(FormColors::hex(FormColors::GRAY_700))
                    .child(title),
            )
            .children(inputs.iter().cloned())
    }
}

impl Render for Gallery {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let selected = t_format(
            self.locale,
            "gallery-selected",
            &[("count", &self.selected_count.to_string())],
        );

        div()
            .id("gallery")
            .size_full()
            .overflow_y_scroll()
            .bg(FormColors::background())
            .py_8()
            .child(
                div()
                    .max_w(px(1100.0))
                    .mx_auto()
                    .p_8()
                    .bg(FormColors::surface())
                    .rounded_lg()
                    .shadow_lg()
                    .flex()
                    .flex_col()
                    .gap_12()
                    .child(
                        div()
                            .w_full()
                            .flex()
                            .justify_center()
                            .text_3xl()
                            .font_weight(FontWeight::BOLD)
                            .text_color(FormColors::text_primary())
                            .child(t(self.locale, "app-title")),
                    )
                    .child(
                        div()
                            .child(Self::render_section_title(t(self.locale, "gallery-inputs")))
                            .child(
                                div()
                                    .flex()
                                    .gap_6()
                                    .child(Self::render_input_column("Basic Examples", &self.basic_inputs))
                                    .child(Self::render_input_column("Variants & States", &self.state_inputs)),
                            ),
                    )
                    .child(
                        div()
                            .child(Self::render_section_title(t(self.locale, "gallery-table")))
                            .child(
                                div()
                                    .mb_4()
                                    .flex()
                                    .justify_between()
                                    .items_center()
                                    .text_sm()
                                    .text_color(FormColors::text_secondary())
                                    .child("Click headers to sort • Select rows with checkboxes")
                                    .child(selected),
                            )
                            .child(self.table.clone()),
                    ),
            )
    }
}
