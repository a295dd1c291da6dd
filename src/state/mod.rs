//! Application state

pub mod app;
pub mod clipboard;
pub mod prompt;
pub mod undo;
pub mod view;
