pub mod types;
pub mod validation;

use clap::Parser;
use std::time::Duration;

use crate::error::CardError;
use crate::model::RosterEntry;
pub use types::{Args, CleanArgs};

/// Loads `.env`, parses the command line and validates the result.
///
/// # Errors
///
/// Will return `Err` if the api key is blank or no players are configured
pub fn args_checks() -> Result<CleanArgs, CardError> {
    dotenvy::dotenv().ok();
    clean_args(Args::parse())
}

/// # Errors
///
/// Will return `Err` if the api key is blank or no players are configured
pub fn clean_args(args: Args) -> Result<CleanArgs, CardError> {
    let api_key = validation::check_api_key(&args.api_key).map_err(CardError::Config)?;

    let roster = match args.roster {
        Some(roster) => {
            if !args.players.is_empty() {
                tracing::warn!("both --roster and --player given, ignoring --player");
            }
            roster.0
        }
        None => RosterEntry::from_nicknames(&args.players),
    };
    validation::validate_roster(&roster).map_err(CardError::Config)?;

    Ok(CleanArgs {
        api_key,
        api_base: args.api_base,
        roster,
        bind: args.bind,
        port: args.port,
        headshot_basis: args.headshot_basis,
        static_dir: args.static_dir,
        request_timeout: Duration::from_secs(args.request_timeout_secs),
        title: args.title,
    })
}
