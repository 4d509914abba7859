//! Column Definition
//!
//! A table column: the descriptor plus an optional cell renderer.

use gpui::{AnyElement, IntoElement, SharedString};

use crate::domain::column::{ColumnDef, ColumnWidth};
use crate::domain::value::{CellValue, Record};

type CellRenderer<R> = Box<dyn Fn(&CellValue, &R, usize) -> AnyElement + Send + Sync>;

/// Column definition for the DataTable
pub struct Column<R> {
    def: ColumnDef,
    /// Cell renderer; receives the cell value, the row and its display index
    render: Option<CellRenderer<R>>,
}

impl<R: Record + 'static> Column<R> {
    /// Create a new column showing the field named `key`
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            def: ColumnDef::new(key, title),
            render: None,
        }
    }

    /// Wrap an existing descriptor
    pub fn from_def(def: ColumnDef) -> Self {
        Self { def, render: None }
    }

    /// Read a different field than the column key
    pub fn data_index(mut self, field: impl Into<String>) -> Self {
        self.def = self.def.data_index(field);
        self
    }

    /// Make the column sortable
    pub fn sortable(mut self) -> Self {
        self.def = self.def.sortable();
        self
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.def = self.def.width(ColumnWidth::Fixed(width));
        self
    }

    /// Set flexible width with optional constraints
    pub fn flex_width(mut self, min: Option<f32>, max: Option<f32>) -> Self {
        self.def = self.def.width(ColumnWidth::Flex { min, max });
        self
    }

    /// Set percentage width
    pub fn percent_width(mut self, percent: f32) -> Self {
        self.def = self.def.width(ColumnWidth::Percent(percent));
        self
    }

    /// Set a custom cell renderer
    pub fn render(
        mut self,
        render: impl Fn(&CellValue, &R, usize) -> AnyElement + Send + Sync + 'static,
    ) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    /// Column descriptor
    pub fn def(&self) -> &ColumnDef {
        &self.def
    }

    /// Header label
    pub fn title(&self) -> SharedString {
        SharedString::from(self.def.title.clone())
    }

    /// Width, flexible when unset
    pub fn width(&self) -> ColumnWidth {
        self.def.width.unwrap_or_default()
    }

    /// Render a cell. Without a renderer the value is shown as text and
    /// falsy values render empty.
    pub fn render_cell(&self, row: &R, index: usize) -> AnyElement {
        let value = row.field(&self.def.data_index);
        match self.render {
            Some(ref render) => render(&value, row, index),
            None => SharedString::from(value.display_text()).into_any_element(),
        }
    }
}

impl<R> AsRef<ColumnDef> for Column<R> {
    fn as_ref(&self) -> &ColumnDef {
        &self.def
    }
}
