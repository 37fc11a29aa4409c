pub mod command;
pub mod escape;

pub use command::{build_command, ActionDescriptor, ActionKind, InstanceAction};
pub use escape::{escape_arg, join_command};
