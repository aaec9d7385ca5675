//! `tasklist` — terminal to-do list editor library.

pub mod app;
pub mod config;
pub mod tasks;
pub mod ui;
