//! Command-line interface.
//!
//! - Argument parsing
//! - Version display
//! - `list`: fetch one page of a resource and print it
//!
//! ```ignore
//! use campusboard::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! runtime.block_on(run_cli_command(command))?;
//! ```

pub mod args;
pub mod list;
pub mod output;
pub mod version;

pub use args::{parse_args, CliCommand, ListArgs, UsageError, USAGE};
pub use list::render_list;
pub use version::{handle_version_command, VERSION};

use color_eyre::eyre::WrapErr;
use color_eyre::Result;

use crate::api::ApiClient;
use crate::config::ApiConfig;

/// Run a parsed command to completion.
pub async fn run_cli_command(command: CliCommand) -> Result<()> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => println!("{}", USAGE),
        CliCommand::List(args) => {
            let config = ApiConfig::from_env().wrap_err("Invalid configuration")?;
            let client = ApiClient::from_config(&config)?;
            let output = render_list(&client, &config, &args)
                .await
                .map_err(|e| {
                    let hint = e.recovery_hint();
                    color_eyre::eyre::eyre!(e).wrap_err(hint)
                })?;
            println!("{}", output);
        }
    }
    Ok(())
}
