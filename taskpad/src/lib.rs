//! `Taskpad` — terminal task list editor library.

pub mod app;
pub mod config;
pub mod ui;
