//! OneNest library
//!
//! This library exposes the core functionality of OneNest for testing
//! and potential future library use.

pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
