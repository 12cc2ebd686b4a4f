//! UI components
//!
//! This module contains all user interface components built with Dioxus.

pub mod components;
pub mod gallery;
pub mod generator;
pub mod images;
pub mod layout;

pub use layout::Layout;
