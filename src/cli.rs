use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "do-create")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pick a DigitalOcean region and create a server in it")]
#[command(long_about = "Lists the DigitalOcean regions your account can use, lets you pick a location interactively and creates a managed server there.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pick a region and create a server there
    Create {
        /// DigitalOcean personal access token
        #[arg(long, env = "DIGITALOCEAN_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Print the created server as JSON
        #[arg(long)]
        json: bool,

        /// Do not ask before retrying a failed region lookup
        #[arg(long)]
        no_retry_prompt: bool,
    },

    /// Show which locations can host a new server
    Regions {
        /// DigitalOcean personal access token
        #[arg(long, env = "DIGITALOCEAN_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Output locations as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a global configuration file with default settings
    Init {
        /// Store this access token in the configuration file
        #[arg(long)]
        token: Option<String>,

        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
