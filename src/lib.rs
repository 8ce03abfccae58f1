//! Browser-style modal dialogs for the terminal.
//!
//! The dialog components live in [`tui::components::dialogs`]:
//! [`SimpleDialog`](tui::components::dialogs::SimpleDialog) renders a title,
//! a body and a row of caller-described buttons, and the alert, confirm and
//! prompt dialogs are fixed compositions over it. The `termdialog` binary
//! wraps them in a small CLI built from [`cli`].

pub mod cli;
pub mod config;
pub mod tui;
pub mod version;
