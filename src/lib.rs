//! hatstore - a tiny terminal storefront
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod models;
pub mod terminal;
pub mod ui;
