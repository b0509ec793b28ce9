//! Widget styles with rounded corners and theme-aware colors.

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

// Re-export container styles
pub use containers::{
    card_style, header_style, page_style, table_header_style, table_row_style,
};

// Re-export button styles
pub use buttons::{
    danger_button_style, primary_button_style, secondary_button_style, toolbar_button_style,
    warning_button_style,
};

// Re-export input styles
pub use inputs::{form_input_style, invalid_input_style};
