//! DataTable Component
//!
//! A data table with client-side column sorting and row selection.

use gpui::{
    div, prelude::*, px, relative, AnyElement, ClickEvent, Context, Div, ElementId, Entity,
    EntityId, EventEmitter, IntoElement, ParentElement, Render, SharedString, Styled, Window,
};

use super::column::Column;
use crate::components::primitives::checkbox::Checkbox;
use crate::domain::column::ColumnWidth;
use crate::domain::row_key::RowKeySpec;
use crate::domain::sort::{SortDirection, SortState};
use crate::domain::value::Record;
use crate::eventing::TableEvent;
use crate::i18n::{t, t_format, Locale};
use crate::state::data_table_state::DataTableState;
use crate::theme::colors::FormColors;
use crate::theme::typography::Typography;

const CHECKBOX_COLUMN_WIDTH: f32 = 48.0;

/// Root id of a table. Header, row and scroll ids are scoped under it, so
/// two tables in one window do not share element state.
fn table_element_id(entity_id: EntityId) -> ElementId {
    ElementId::NamedInteger("data-table".into(), entity_id.as_u64())
}

/// DataTable component
pub struct DataTable<R: Record + Clone + 'static> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    state: DataTableState<R>,
    row_height: f32,
    header_height: f32,
    loading: bool,
    empty_message: Option<SharedString>,
    locale: Locale,
    on_row_select: Option<Box<dyn Fn(&[R], &mut Context<Self>) + 'static>>,
    on_sort: Option<Box<dyn Fn(&SortState, &mut Context<Self>) + 'static>>,
}

impl<R: Record + Clone + 'static> EventEmitter<TableEvent<R>> for DataTable<R> {}

impl<R: Record + Clone + 'static> DataTable<R> {
    /// Create a new data table
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            state: DataTableState::new(),
            row_height: 44.0,
            header_height: 40.0,
            loading: false,
            empty_message: None,
            locale: Locale::default(),
            on_row_select: None,
            on_sort: None,
        }
    }

    /// Set the columns
    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
    }

    /// Replace the rows. Selected keys are kept.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    /// Get the rows in input order
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Set loading state
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Set the empty message; `None` restores the localized default
    pub fn set_empty_message(&mut self, message: Option<SharedString>) {
        self.empty_message = message;
    }

    /// Show row checkboxes and enable selection
    pub fn set_selectable(&mut self, selectable: bool) {
        self.state.set_selectable(selectable);
    }

    /// Set how row identity is resolved
    pub fn set_row_key(&mut self, spec: RowKeySpec<R>) {
        self.state.set_row_key(spec);
    }

    /// Set the language of built-in labels
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Set the selection handler; receives the selected rows in display order
    pub fn on_row_select(&mut self, handler: impl Fn(&[R], &mut Context<Self>) + 'static) {
        self.on_row_select = Some(Box::new(handler));
    }

    /// Set the sort handler
    pub fn on_sort(&mut self, handler: impl Fn(&SortState, &mut Context<Self>) + 'static) {
        self.on_sort = Some(Box::new(handler));
    }

    /// Current sort state
    pub fn sort_state(&self) -> &SortState {
        self.state.sort()
    }

    /// Selected rows in display order
    pub fn selected_rows(&self) -> Vec<R> {
        self.state.selected_rows(&self.rows, &self.columns)
    }

    /// Header click on the column at `col_index`
    fn handle_sort(&mut self, col_index: usize, cx: &mut Context<Self>) {
        let Some(column) = self.columns.get(col_index) else {
            return;
        };
        if let Some(event) = self.state.activate_column(column.def()) {
            self.forward(event, cx);
        }
    }

    /// Row or row checkbox click on the row at input position `index`
    fn handle_row_toggle(&mut self, index: usize, cx: &mut Context<Self>) {
        if let Some(event) = self.state.toggle_row(&self.rows, &self.columns, index) {
            self.forward(event, cx);
        }
    }

    /// Select-all checkbox click
    fn handle_toggle_all(&mut self, cx: &mut Context<Self>) {
        if let Some(event) = self.state.toggle_all(&self.rows, &self.columns) {
            self.forward(event, cx);
        }
    }

    /// Forward a state event to the registered handler and subscribers
    fn forward(&mut self, event: TableEvent<R>, cx: &mut Context<Self>) {
        match &event {
            TableEvent::SelectionChanged { rows } => {
                if let Some(ref handler) = self.on_row_select {
                    handler(rows, cx);
                }
            }
            TableEvent::SortChanged { sort } => {
                if let Some(ref handler) = self.on_sort {
                    handler(sort, cx);
                }
            }
        }
        cx.emit(event);
        cx.notify();
    }

    /// Apply a column width to a header or body cell
    fn sized_cell(width: ColumnWidth) -> Div {
        let cell = div().px_4().overflow_hidden();
        match width {
            ColumnWidth::Fixed(w) => cell.flex_none().w(px(w)),
            ColumnWidth::Percent(p) => cell.flex_none().w(relative(p / 100.0)),
            ColumnWidth::Flex { max, .. } => {
                let cell = cell.flex_1().min_w(px(width.resolve(0.0)));
                match max {
                    Some(max) => cell.max_w(px(max)),
                    None => cell,
                }
            }
        }
    }

    fn render_sort_indicator(&self, key: &str) -> impl IntoElement {
        let direction = self.state.sort().direction_for(key);
        let color = |active: bool| {
            if active {
                FormColors::accent()
            } else {
                FormColors::control_border()
            }
        };

        div()
            .ml_1()
            .flex()
            .flex_col()
            .text_size(px(8.0))
            .child(
                div()
                    .text_color(color(direction == SortDirection::Ascending))
                    .child(SortDirection::Ascending.indicator()),
            )
            .child(
                div()
                    .text_color(color(direction == SortDirection::Descending))
                    .child(SortDirection::Descending.indicator()),
            )
    }

    /// Render the header row
    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let mut header = div()
            .h(px(self.header_height))
            .w_full()
            .flex()
            .items_center()
            .bg(FormColors::table_header_bg())
            .border_b_1()
            .border_color(FormColors::border());

        if self.state.is_selectable() {
            let entity = cx.entity();
            header = header.child(
                div().flex_none().w(px(CHECKBOX_COLUMN_WIDTH)).px_4().child(
                    Checkbox::new(t(self.locale, "table-select-all"))
                        .state(self.state.header_check_state(&self.rows))
                        .on_change(move |_checked, _window, cx| {
                            entity.update(cx, |this, cx| this.handle_toggle_all(cx));
                        }),
                ),
            );
        }

        header.children(self.columns.iter().enumerate().map(|(col_index, col)| {
            let mut cell = Self::sized_cell(col.width())
                .id(("data-table-header", col_index))
                .h_full()
                .flex()
                .items_center()
                .text_xs()
                .font_weight(gpui::FontWeight::MEDIUM)
                .text_color(FormColors::table_header_text())
                .child(col.title());

            if col.def().sortable {
                cell = cell
                    .child(self.render_sort_indicator(&col.def().key))
                    .cursor_pointer()
                    .hover(|s| s.bg(FormColors::icon_button_hover()))
                    .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                        this.handle_sort(col_index, cx);
                    }));
            }

            cell
        }))
    }

    /// Render a data row. `display_index` is the position on screen,
    /// `index` the position in the host's input order.
    fn render_row(&self, display_index: usize, index: usize, cx: &mut Context<Self>) -> AnyElement {
        let row = &self.rows[index];
        let selectable = self.state.is_selectable();
        let selected = self.state.is_row_selected(row, index);

        let bg = if selected {
            FormColors::table_row_selected()
        } else {
            FormColors::surface()
        };

        let mut element = div()
            .id(("data-table-row", index))
            .h(px(self.row_height))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .hover(|s| s.bg(FormColors::table_row_hover()))
            .border_b_1()
            .border_color(FormColors::border());

        if selectable {
            let entity = cx.entity();
            let label = t_format(
                self.locale,
                "table-select-row",
                &[("index", &(display_index + 1).to_string())],
            );
            element = element
                .cursor_pointer()
                .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                    this.handle_row_toggle(index, cx);
                }))
                .child(
                    div().flex_none().w(px(CHECKBOX_COLUMN_WIDTH)).px_4().child(
                        Checkbox::new(label)
                            .checked(selected)
                            .on_change(move |_checked, _window, cx| {
                                entity.update(cx, |this, cx| this.handle_row_toggle(index, cx));
                            }),
                    ),
                );
        }

        element
            .children(self.columns.iter().map(|col| {
                Self::sized_cell(col.width())
                    .text_sm()
                    .text_color(FormColors::text_primary())
                    .child(col.render_cell(row, display_index))
            }))
            .into_any_element()
    }

    /// Render empty state
    fn render_empty(&self) -> impl IntoElement {
        let message = self
            .empty_message
            .clone()
            .unwrap_or_else(|| t(self.locale, "table-no-data"));

        div()
            .py_12()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_4()
            .text_color(FormColors::table_header_text())
            .child(div().text_size(px(Typography::ICON_XL)).child("▤"))
            .child(
                div()
                    .text_size(px(Typography::TEXT_LG))
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .child(message),
            )
    }

    /// Render loading state
    fn render_loading(&self) -> impl IntoElement {
        div()
            .py_8()
            .flex()
            .items_center()
            .justify_center()
            .gap_2()
            .text_color(FormColors::text_secondary())
            .child(div().text_color(FormColors::accent()).child("◌"))
            .child(t(self.locale, "table-loading"))
    }
}

impl<R: Record + Clone + 'static> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let mut table = div()
            .id(table_element_id(cx.entity_id()))
            .w_full()
            .flex()
            .flex_col()
            .bg(FormColors::surface())
            .border_1()
            .border_color(FormColors::border())
            .rounded_lg()
            .overflow_hidden();

        if self.loading {
            return table.child(self.render_loading());
        }
        if self.rows.is_empty() {
            return table.child(self.render_empty());
        }

        table = table.child(self.render_header(cx));

        let order = self.state.display_order(&self.rows, &self.columns);
        let rows: Vec<AnyElement> = order
            .into_iter()
            .enumerate()
            .map(|(display_index, index)| self.render_row(display_index, index, cx))
            .collect();

        table.child(
            div()
                .id("data-table-rows")
                .flex_1()
                .overflow_y_scroll()
                .children(rows),
        )
    }
}

/// Helper to create a DataTable entity
pub fn data_table<R: Record + Clone + 'static, V: 'static>(
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    cx: &mut Context<V>,
) -> Entity<DataTable<R>> {
    cx.new(|cx| {
        let mut table = DataTable::new(cx);
        table.set_columns(columns);
        table.set_rows(rows);
        table
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_ids_differ_per_entity() {
        let first = table_element_id(EntityId::from(1u64));
        let second = table_element_id(EntityId::from(2u64));
        assert_ne!(first, second);
        assert_eq!(first, table_element_id(EntityId::from(1u64)));
    }
}
