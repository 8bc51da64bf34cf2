//! Command dispatch: wires the session to the real console

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::session::SessionService;
use crate::cli::args::Cli;
use crate::cli::error::CliResult;
use crate::infrastructure::traits::StdioConsole;

/// Run the calculator session against stdin/stdout.
#[instrument]
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    debug!("execute_command: {:?}", cli);
    let service = SessionService::new(Arc::new(StdioConsole));
    service.run()?;
    Ok(())
}
