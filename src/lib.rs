//! Quotebox library
//!
//! Core of the Quotebox desktop application: random quotes from a remote
//! source, a persisted list of liked quotes and a light/dark theme.

pub mod app;
pub mod clipboard;
pub mod remote;
pub mod session;
pub mod storage;
pub mod types;
pub mod ui;
