//! ToolIntent- und ToolCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::ToolCommand;
pub use intent::{PointerButton, ToolIntent};
