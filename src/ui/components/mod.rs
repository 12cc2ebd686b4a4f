//! Small reusable widgets

pub mod loading;
pub mod theme_toggle;
