//! Shared type definitions
//!
//! This module contains all shared data types used across the application.

pub mod character;
pub mod config;
pub mod quote;
pub mod theme;
