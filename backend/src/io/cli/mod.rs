//! Command-line presentation: argument parsing, confirmation prompts,
//! plain-text rendering and the handlers tying them to the controller.

pub mod args;
pub mod handlers;
pub mod prompt;
pub mod render;

pub use args::{Cli, Commands};
pub use handlers::CommandHandler;
pub use prompt::TerminalConfirm;
pub use render::Renderer;
