//! Reusable UI components

pub mod help_overlay;
pub mod keybindings;
pub mod nav_bar;
pub mod popup;
pub mod text_field;
