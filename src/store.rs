use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use starknet::core::types::FieldElement;

use crate::error::Error;
use crate::felt;

pub const MANIFEST_FILE: &str = "manifest.json";
pub const ARTIFACTS_FILE: &str = "artifacts.json";
pub const ACCOUNTS_FILE: &str = "accounts.json";

// -- Manifest --

/// One contract to deploy: a compiled contract-class artifact plus the raw
/// constructor inputs.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEntry {
	pub name: String,
	pub source: PathBuf,
	#[serde(default)]
	pub inputs: Vec<String>,
}

pub type Manifest = Vec<ManifestEntry>;

/// Load `manifest.json` from `dir`.  A missing file is `None`, not an error.
pub fn load_manifest(dir: &Path) -> Result<Option<Manifest>> {
	let path = dir.join(MANIFEST_FILE);
	if !path.exists() {
		return Ok(None);
	}
	Ok(Some(serde_json::from_str(&fs::read_to_string(path)?)?))
}

// -- Deployed artifacts --

/// Result of deploying one manifest entry.  The address keeps the padded
/// hex encoding the gateway returned; the ABI is stored verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
	pub name: String,
	pub contract_address: String,
	pub abi: Value,
}

#[derive(Debug, Default)]
pub struct Artifacts(Vec<Artifact>);

impl Artifacts {
	/// Load `artifacts.json` from `dir`; missing file means no deployments.
	pub fn load(dir: &Path) -> Result<Self> {
		let path = dir.join(ARTIFACTS_FILE);
		if !path.exists() {
			return Ok(Self::default());
		}
		Ok(Self(serde_json::from_str(&fs::read_to_string(path)?)?))
	}

	/// Resolve a contract name to its deployed address.
	pub fn address_of(&self, name: &str) -> Result<FieldElement, Error> {
		let artifact = self
			.0
			.iter()
			.find(|a| a.name == name)
			.ok_or_else(|| Error::UnknownContract(name.to_owned()))?;
		felt::parse_felt(&artifact.contract_address)
	}

	pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
		self.0.iter()
	}
}

/// Rewrite `artifacts.json` wholesale.  Callers invoke this once, after a
/// deploy run has fully succeeded.
pub fn save_artifacts(dir: &Path, artifacts: &[Artifact]) -> Result<()> {
	let path = dir.join(ARTIFACTS_FILE);
	fs::write(path, serde_json::to_string_pretty(artifacts)?)?;
	Ok(())
}

// -- Accounts --

/// A named key pair, optionally bound to a deployed account contract.
/// The private key never leaves the local store.
#[derive(Debug, Clone)]
pub struct Account {
	pub public_key: FieldElement,
	pub private_key: FieldElement,
	pub contract_address: Option<FieldElement>,
}

#[derive(Serialize, Deserialize)]
struct AccountRecord {
	key: KeyRecord,
	#[serde(skip_serializing_if = "Option::is_none")]
	contract: Option<ContractRecord>,
}

#[derive(Serialize, Deserialize)]
struct KeyRecord {
	public: String,
	private: String,
}

#[derive(Serialize, Deserialize)]
struct ContractRecord {
	address: String,
}

impl Account {
	fn from_record(record: &AccountRecord) -> Result<Self, Error> {
		Ok(Self {
			public_key: felt::parse_felt(&record.key.public)?,
			private_key: felt::parse_felt(&record.key.private)?,
			contract_address: record
				.contract
				.as_ref()
				.map(|c| felt::parse_felt(&c.address))
				.transpose()?,
		})
	}

	fn to_record(&self) -> AccountRecord {
		AccountRecord {
			key: KeyRecord {
				public: felt::to_hex(self.public_key),
				private: felt::to_hex(self.private_key),
			},
			contract: self.contract_address.map(|address| ContractRecord {
				address: felt::to_hex(address),
			}),
		}
	}
}

#[derive(Debug, Default)]
pub struct Accounts(BTreeMap<String, Account>);

impl Accounts {
	/// Load `accounts.json` from `dir`; missing file means no accounts.
	pub fn load(dir: &Path) -> Result<Self> {
		let path = dir.join(ACCOUNTS_FILE);
		if !path.exists() {
			return Ok(Self::default());
		}
		let records: BTreeMap<String, AccountRecord> =
			serde_json::from_str(&fs::read_to_string(path)?)?;
		let mut accounts = BTreeMap::new();
		for (name, record) in &records {
			accounts.insert(name.clone(), Account::from_record(record)?);
		}
		Ok(Self(accounts))
	}

	/// Rewrite `accounts.json` wholesale with every known account.
	pub fn save(&self, dir: &Path) -> Result<()> {
		let records: BTreeMap<&String, AccountRecord> =
			self.0.iter().map(|(name, a)| (name, a.to_record())).collect();
		let path = dir.join(ACCOUNTS_FILE);
		fs::write(path, serde_json::to_string_pretty(&records)?)?;
		Ok(())
	}

	pub fn get(&self, name: &str) -> Result<&Account, Error> {
		self.0
			.get(name)
			.ok_or_else(|| Error::UnknownAccount(name.to_owned()))
	}

	pub fn insert(&mut self, name: &str, account: Account) {
		self.0.insert(name.to_owned(), account);
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &Account)> {
		self.0.iter()
	}
}
