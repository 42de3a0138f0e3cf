use clap::Parser;
use std::fmt;
use std::time::Duration;

use crate::controller::faceit::FACEIT_API_URL;
use crate::model::{HeadshotBasis, Roster, RosterEntry};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// FACEIT Data API key, sent as a bearer token.
    #[arg(long, env = "FACEIT_API_KEY", value_name = "API_KEY", hide_env_values = true)]
    pub api_key: String,
    #[arg(long, env = "FACEIT_API_URL", value_name = "URL", default_value = FACEIT_API_URL)]
    pub api_base: String,

    /// Json file with the roster: [{"nickname": "...", "card_id": "..."}, ...]
    #[arg(
        short = 'r',
        long,
        value_name = "ROSTER_JSON",
        value_parser = crate::args::validation::check_readable_roster_file
    )]
    pub roster: Option<Roster>,
    /// Alternative to --roster, repeat for each player. Cards are named player1..n.
    #[arg(short = 'p', long = "player", value_name = "NICKNAME")]
    pub players: Vec<String>,

    #[arg(long, value_name = "ADDRESS", default_value = "0.0.0.0")]
    pub bind: String,
    #[arg(long, value_name = "PORT", default_value_t = 8081)]
    pub port: u16,

    /// Divisor for the headshot percentage.
    #[arg(long, value_enum, default_value_t = HeadshotBasis::Kills)]
    pub headshot_basis: HeadshotBasis,
    #[arg(long, value_name = "DIR", default_value = "./static")]
    pub static_dir: String,
    #[arg(long, value_name = "SECONDS", default_value_t = 10)]
    pub request_timeout_secs: u64,
    #[arg(long, value_name = "TITLE", default_value = "Roster")]
    pub title: String,
}

#[derive(Clone)]
pub struct CleanArgs {
    pub api_key: String,
    pub api_base: String,
    pub roster: Vec<RosterEntry>,
    pub bind: String,
    pub port: u16,
    pub headshot_basis: HeadshotBasis,
    pub static_dir: String,
    pub request_timeout: Duration,
    pub title: String,
}

impl fmt::Debug for CleanArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CleanArgs")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("roster", &self.roster)
            .field("bind", &self.bind)
            .field("port", &self.port)
            .field("headshot_basis", &self.headshot_basis)
            .field("static_dir", &self.static_dir)
            .field("request_timeout", &self.request_timeout)
            .field("title", &self.title)
            .finish()
    }
}
