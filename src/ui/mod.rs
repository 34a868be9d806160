pub mod header;
pub mod result_panel;
pub mod style;
