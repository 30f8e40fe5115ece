//! # do-create
//!
//! Pick a DigitalOcean region and create a managed server in it.
//!
//! The core is [`flow::RegionSelectionFlow`]: it fetches region availability
//! from an [`digitalocean::Account`], hands one [`flow::Location`] per city to a
//! [`flow::RegionPicker`], waits for the picker to report a selection and
//! creates the server there. The `wizard` module provides a terminal picker
//! and the binary wires everything to the DigitalOcean REST API.
//!
//! ## Example
//!
//! ```rust,no_run
//! use do_create::digitalocean::{DigitalOceanClient, DropletSpec};
//! use do_create::flow::{RegionSelectionFlow, SingleAttempt};
//! use do_create::localize::MessageCatalog;
//! use do_create::notification::TerminalNotifier;
//! use do_create::wizard::{drive_region_prompt, TerminalRegionPicker};
//!
//! # async fn run() -> do_create::Result<()> {
//! let spec = DropletSpec {
//!     size: "s-1vcpu-1gb".into(),
//!     image: "ubuntu-22-04-x64".into(),
//!     tags: vec![],
//! };
//! let account = DigitalOceanClient::new("dop_v1_...", spec)?;
//!
//! let picker = TerminalRegionPicker::new();
//! let view = picker.subscribe();
//! let flow = RegionSelectionFlow::new(picker, TerminalNotifier, MessageCatalog::default());
//!
//! let (server, _) = tokio::join!(
//!     flow.start(&account, &SingleAttempt),
//!     drive_region_prompt(view, flow.selection_handle(), flow.localizer()),
//! );
//! println!("created {}", server?.name);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod digitalocean;
pub mod error;
pub mod flow;
pub mod handlers;
pub mod localize;
pub mod notification;
pub mod wizard;

pub use error::{DoCreateError, Result};
pub use flow::{FlowError, FlowState, Location, RegionSelectionFlow};
use cli::Commands;
use config::types::Config;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn run_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Create {
            token,
            json,
            no_retry_prompt,
        } => handlers::handle_create(config, token, json, no_retry_prompt).await,
        Commands::Regions { token, json } => handlers::handle_regions(config, token, json).await,
        Commands::Init { token, force } => handlers::handle_init(token, force),
    }
}
