//! kli: a small toolkit for building command-line applications.
//!
//! Register commands on an [`AppBuilder`], then hand the process arguments to
//! [`Dispatcher::execute`]. Arguments are tokenized by [`ArgParser`] into
//! options, flags, and positionals; the first positional names the command.
//! With no arguments the dispatcher runs an interactive read loop instead.
//!
//! # Quick start
//!
//! ```no_run
//! use kli::{AppBuilder, DispatchOutcome};
//!
//! let dispatcher = AppBuilder::new()
//!     .configure(|config| {
//!         config.name = "mycli".to_string();
//!         config.version = "0.1.6".to_string();
//!     })
//!     .command("greet", "Greets the user", |cmd| {
//!         cmd.argument("name", "The name to greet").action(|inv| {
//!             let name = inv.argument("name").unwrap_or("stranger");
//!             inv.println(&format!("Hello, {name}!"));
//!             Ok(())
//!         });
//!     })
//!     .build();
//!
//! let outcome = dispatcher.execute(std::env::args().skip(1));
//! std::process::exit(outcome.exit_code());
//! ```

pub mod build_info;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod parser;
pub mod process;
#[cfg(test)]
pub mod testsupport;
pub mod tui;
pub mod ui;

pub use command::{with_args, Command, CommandBuilder, CommandRegistry, Invocation};
pub use config::AppConfig;
pub use dispatch::{AppBuilder, DispatchOutcome, Dispatcher};
pub use error::{ActionError, ActionResult, Crash, DuplicateCommandError};
pub use parser::{ArgParser, ParseResult};
