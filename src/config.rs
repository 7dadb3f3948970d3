use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
	pub network: NetworkConfig,
	pub contracts: ContractsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
	pub default: String,
	pub goerli_gateway: String,
	pub mainnet_gateway: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractsConfig {
	/// Compiled contract class deployed by `account create`, seeded with
	/// the fresh public key.
	pub account_class: PathBuf,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			network: NetworkConfig {
				default: "alpha-goerli".into(),
				goerli_gateway: "https://alpha4.starknet.io".into(),
				mainnet_gateway: "https://alpha-mainnet.starknet.io".into(),
			},
			contracts: ContractsConfig {
				account_class: Self::dir().join("account.json"),
			},
		}
	}
}

impl Config {
	/// Directory where CLI state is stored (~/.starkctl/).
	pub fn dir() -> PathBuf {
		dirs::home_dir()
			.expect("could not determine home directory")
			.join(".starkctl")
	}

	/// Path to the config file.
	pub fn path() -> PathBuf {
		Self::dir().join("config.toml")
	}

	/// Load config from disk, falling back to defaults if no file exists.
	pub fn load() -> anyhow::Result<Self> {
		let path = Self::path();
		if path.exists() {
			let content = std::fs::read_to_string(&path)?;
			Ok(toml::from_str(&content)?)
		} else {
			Ok(Self::default())
		}
	}

	/// Persist the current config to disk, creating the directory if needed.
	pub fn save(&self) -> anyhow::Result<()> {
		let path = Self::path();
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(&path, toml::to_string_pretty(self)?)?;
		Ok(())
	}

	/// Return the gateway base URL for the given network name.
	pub fn gateway_url(&self, network: &str) -> &str {
		match network {
			"alpha-mainnet" => &self.network.mainnet_gateway,
			_ => &self.network.goerli_gateway,
		}
	}
}
