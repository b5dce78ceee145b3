mod args;
mod widget;

pub use args::{Cli, Commands, ConfigSubcommands};
pub use widget::{create_transport, create_widget};
