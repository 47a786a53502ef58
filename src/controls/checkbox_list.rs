//! Checkbox list control
//!
//! A vertical list of labeled checkboxes with optional group separators,
//! used by the gutter icons page. Rows are addressed by index for focus
//! traversal and by id for lookups.

use super::FocusState;

/// One row in a checkbox list
#[derive(Debug, Clone)]
pub struct CheckboxRow {
    /// Stable identifier for the row
    pub id: String,
    /// Label displayed next to the checkbox
    pub label: String,
    /// Glyph rendered before the label, if any
    pub symbol: Option<String>,
    /// Current checkbox value
    pub checked: bool,
    /// Group header rendered above this row, if it starts a group
    pub separator: Option<String>,
}

impl CheckboxRow {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            symbol: None,
            checked: false,
            separator: None,
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_separator(mut self, caption: impl Into<String>) -> Self {
        self.separator = Some(caption.into());
        self
    }
}

/// State for a checkbox list control
#[derive(Debug, Clone)]
pub struct CheckboxListState {
    pub rows: Vec<CheckboxRow>,
    /// Row with keyboard focus, if any
    pub focused_row: Option<usize>,
    /// Focus state of the control as a whole
    pub focus: FocusState,
}

impl CheckboxListState {
    pub fn new(rows: Vec<CheckboxRow>) -> Self {
        Self {
            rows,
            focused_row: None,
            focus: FocusState::Normal,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.focus != FocusState::Disabled
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find a row by id
    pub fn row(&self, id: &str) -> Option<&CheckboxRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Checkbox value for a row id
    pub fn is_checked(&self, id: &str) -> Option<bool> {
        self.row(id).map(|r| r.checked)
    }

    /// Set a row's checkbox by id; unknown ids are ignored
    pub fn set_checked(&mut self, id: &str, checked: bool) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.id == id) {
            row.checked = checked;
        }
    }

    /// Flip a row's checkbox by index
    pub fn toggle_row(&mut self, index: usize) {
        if !self.is_enabled() {
            return;
        }
        if let Some(row) = self.rows.get_mut(index) {
            row.checked = !row.checked;
        }
    }

    /// Flip the focused row's checkbox
    pub fn toggle_focused(&mut self) {
        if let Some(index) = self.focused_row {
            self.toggle_row(index);
        }
    }

    /// Move focus down one row
    pub fn focus_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.focused_row = Some(match self.focused_row {
            None => 0,
            Some(i) if i + 1 < self.rows.len() => i + 1,
            Some(i) => i,
        });
    }

    /// Move focus up one row
    pub fn focus_prev(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.focused_row = Some(match self.focused_row {
            None => 0,
            Some(0) => 0,
            Some(i) => i - 1,
        });
    }
}
