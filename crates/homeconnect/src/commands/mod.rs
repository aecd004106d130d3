//! Command dispatch: bridges CLI args -> API calls -> output formatting.

pub mod appliances;
pub mod config_cmd;
pub mod status;
pub mod watch;

use crate::cli::{Command, GlobalOpts};
use crate::config::Session;
use crate::error::CliError;

/// Dispatch an API-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, session: Session, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Appliances => appliances::handle(&session, global).await,
        Command::Status(args) => status::handle(&session, args, global).await,
        Command::Watch(args) => watch::handle(session, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
