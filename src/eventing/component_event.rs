//! ComponentEvent - Events Emitted by InputField and DataTable

use crate::domain::sort::SortState;

/// Events emitted by a DataTable
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent<R> {
    /// Selection changed; carries the selected rows in display order
    SelectionChanged {
        rows: Vec<R>,
    },

    /// Sort column or direction changed
    SortChanged {
        sort: SortState,
    },
}

impl<R> TableEvent<R> {
    /// Selected rows, if this is a selection event
    pub fn selected_rows(&self) -> Option<&[R]> {
        match self {
            TableEvent::SelectionChanged { rows } => Some(rows),
            TableEvent::SortChanged { .. } => None,
        }
    }
}

/// Events emitted by an InputField
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The value was edited
    Changed {
        value: String,
    },

    /// The clear button was pressed and the host handles clearing
    Cleared,

    /// Password visibility toggled
    PasswordVisibilityChanged {
        visible: bool,
    },
}
