//! External command execution.

pub mod command;
pub mod mock;
pub mod runner;

pub use command::{command_line, execute, CommandOptions, CommandResult};
pub use mock::{Invocation, MockRunner};
pub use runner::{CommandRunner, SystemRunner};
