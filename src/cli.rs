use crate::config::{Config, DEFAULT_DB_PATH, DEFAULT_LEADERBOARD_SIZE};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mello")]
#[command(about = "Speedrun leaderboard bot")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Path to the scores database
    #[arg(long, global = true, env = "MELLO_DB", default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,

    /// Number of runs shown on the leaderboard
    #[arg(long, global = true, env = "MELLO_TOP", default_value_t = DEFAULT_LEADERBOARD_SIZE)]
    pub top: i64,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::new(&self.db).with_leaderboard_size(self.top)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the database tables
    Init,

    /// Submit a time for the uniform speedrun
    Submit {
        #[command(subcommand)]
        when: SubmitWhen,
    },

    /// Change the name shown on the leaderboard
    Nick {
        /// Platform user ID
        #[arg(long)]
        user: String,
        /// New leaderboard name
        nickname: String,
    },

    /// Show the current leaderboard
    Leaderboard,

    /// Start MCP server
    Serve,
}

#[derive(Subcommand)]
pub enum SubmitWhen {
    /// Submit a time for today
    Today {
        /// (Minutes:Seconds) the time to submit
        time: String,
        #[command(flatten)]
        member: MemberArgs,
    },

    /// Submit a time for a certain date
    ForDate {
        /// (MM/DD/YYYY) the date to submit a time for
        date: String,
        /// (Minutes:Seconds) the time to submit
        time: String,
        #[command(flatten)]
        member: MemberArgs,
    },
}

/// Identity of the submitting member, as supplied by the platform
#[derive(Args)]
pub struct MemberArgs {
    /// Platform user ID
    #[arg(long)]
    pub user: String,
    /// Account username
    #[arg(long)]
    pub username: String,
    /// Community nickname, preferred over the username when set
    #[arg(long)]
    pub nick: Option<String>,
}
