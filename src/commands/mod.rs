pub mod account;
pub mod call;
pub mod deploy;
pub mod invoke;
pub mod tx;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::cli::Cli;
use crate::config::Config;
use crate::gateway::{FeederGatewayClient, GatewayClient};
use crate::store::{self, Accounts, Artifacts, Manifest};

/// Per-invocation state: gateway clients plus the local JSON stores, read
/// once when the command starts and passed down to every handler.
pub struct Context {
	pub config: Config,
	pub gateway: GatewayClient,
	pub feeder: FeederGatewayClient,
	pub manifest: Option<Manifest>,
	pub artifacts: Artifacts,
	pub accounts: Accounts,
	pub dir: PathBuf,
}

impl Context {
	/// Build the context for a CLI invocation, rooted at the current
	/// directory.
	pub fn from_cli(cli: &Cli) -> Result<Self> {
		let config = Config::load()?;
		let url = resolve_gateway(cli, &config);
		Self::new(config, &url, Path::new("."))
	}

	/// Build a context against an explicit gateway URL and store directory.
	pub fn new(config: Config, gateway_url: &str, dir: &Path) -> Result<Self> {
		Ok(Self {
			gateway: GatewayClient::new(gateway_url),
			feeder: FeederGatewayClient::new(gateway_url),
			manifest: store::load_manifest(dir)?,
			artifacts: Artifacts::load(dir)?,
			accounts: Accounts::load(dir)?,
			dir: dir.to_owned(),
			config,
		})
	}
}

/// Resolve the gateway URL from CLI flag or config.
pub fn resolve_gateway(cli: &Cli, config: &Config) -> String {
	cli.gateway_url
		.clone()
		.unwrap_or_else(|| config.gateway_url(cli.network.as_str()).to_owned())
}
