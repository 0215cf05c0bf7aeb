//! linkboard — a tab-and-group bookmark manager with JSON import/export.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod api;
pub mod app;
pub mod config;
pub mod platform;
pub mod services;
pub mod stores;
pub mod types;
