//! Image generator library
//!
//! Core library for the image generator desktop client: the API client,
//! schema-driven form engine, gallery state and the Dioxus views over them.

pub mod api;
pub mod app;
pub mod form;
pub mod gallery;
pub mod generation;
pub mod storage;
pub mod types;
pub mod ui;
