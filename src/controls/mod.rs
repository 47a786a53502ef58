//! Form control state for the options pages
//!
//! State only; the host draws these with its own widget layer. Disabled
//! controls ignore mutation.

mod checkbox_list;
mod dropdown;
mod number_field;
mod toggle;

pub use checkbox_list::{CheckboxListState, CheckboxRow};
pub use dropdown::DropdownState;
pub use number_field::NumberFieldState;
pub use toggle::ToggleState;

/// Focus state shared by all controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    Normal,
    Focused,
    Disabled,
}
