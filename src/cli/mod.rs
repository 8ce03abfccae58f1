mod dialog;
mod root;

pub use dialog::EXIT_ERROR;
pub use root::Cli;
