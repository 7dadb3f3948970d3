use std::path::Path;

use anyhow::{anyhow, Result};
use serde_json::Value;
use starknet::core::types::FieldElement;

use crate::commands::Context;
use crate::crypto;
use crate::felt;
use crate::gateway::{AddTransactionResponse, GatewayClient};
use crate::store::{self, Artifact};
use crate::tx;

pub async fn run(ctx: &Context, salt: Option<&str>) -> Result<()> {
	let manifest = ctx
		.manifest
		.as_ref()
		.ok_or_else(|| anyhow!("manifest.json not found in the current directory"))?;
	let salt = match salt {
		Some(raw) => felt::parse_felt(raw)?,
		None => crypto::random_felt(),
	};

	let mut artifacts = Vec::with_capacity(manifest.len());
	for entry in manifest {
		let (abi, response) =
			deploy_contract(&entry.source, &entry.inputs, salt, &ctx.gateway).await?;
		let address = response.address.clone().ok_or_else(|| {
			anyhow!("gateway response for {} carries no contract address", entry.name)
		})?;

		println!("Deployed {} to {}", entry.name, address);
		println!("Transaction: {}", response.transaction_hash);

		artifacts.push(Artifact {
			name: entry.name.clone(),
			contract_address: address,
			abi,
		});
	}

	// Written only once the whole manifest has deployed; a failure above
	// leaves any existing artifacts.json untouched.
	store::save_artifacts(&ctx.dir, &artifacts)?;
	Ok(())
}

/// Deploy one compiled contract class and return its ABI together with the
/// gateway response carrying the assigned address.
pub async fn deploy_contract(
	class_path: &Path,
	inputs: &[String],
	salt: FieldElement,
	gateway: &GatewayClient,
) -> Result<(Value, AddTransactionResponse)> {
	let class = load_contract_class(class_path)?;
	let abi = class.get("abi").cloned().unwrap_or(Value::Null);

	let tx = tx::Deploy {
		contract_address_salt: salt,
		contract_definition: class,
		constructor_calldata: felt::parse_inputs(inputs)?,
	};
	let response = gateway.add_transaction(&tx.to_request()).await?;
	Ok((abi, response))
}

fn load_contract_class(path: &Path) -> Result<Value> {
	let raw = std::fs::read_to_string(path)
		.map_err(|e| anyhow!("cannot read contract artifact {}: {e}", path.display()))?;
	serde_json::from_str(&raw)
		.map_err(|e| anyhow!("contract artifact {} is not valid JSON: {e}", path.display()))
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::path::PathBuf;

	use super::*;
	use crate::config::Config;
	use crate::store::ARTIFACTS_FILE;

	fn scratch_dir(test: &str) -> PathBuf {
		let dir = std::env::temp_dir()
			.join(format!("starkctl-deploy-{}-{test}", std::process::id()));
		let _ = fs::remove_dir_all(&dir);
		fs::create_dir_all(&dir).unwrap();
		dir
	}

	#[tokio::test]
	async fn failed_run_leaves_artifacts_unwritten() {
		let dir = scratch_dir("partial");
		fs::write(dir.join("counter.json"), r#"{"abi": [], "program": {}}"#).unwrap();
		// Absolute source paths keep the test independent of the cwd.
		let manifest_json = format!(
			r#"[
				{{"name": "counter", "source": {:?}, "inputs": []}},
				{{"name": "other", "source": {:?}, "inputs": []}}
			]"#,
			dir.join("counter.json"),
			dir.join("other.json"),
		);
		fs::write(dir.join("manifest.json"), manifest_json).unwrap();

		// Nothing listens on this port, so the first deploy already fails.
		let ctx = Context::new(Config::default(), "http://127.0.0.1:1", &dir).unwrap();
		let result = run(&ctx, Some("0x1")).await;

		assert!(result.is_err());
		assert!(!dir.join(ARTIFACTS_FILE).exists());
	}

	#[tokio::test]
	async fn missing_artifact_fails_before_any_network_call() {
		let gateway = GatewayClient::new("http://127.0.0.1:1");
		let missing = Path::new("/nonexistent/contract.json");

		let err = deploy_contract(missing, &[], FieldElement::ZERO, &gateway)
			.await
			.unwrap_err();
		assert!(err.to_string().contains("cannot read contract artifact"));
	}

	#[test]
	fn contract_class_abi_is_extracted() {
		let dir = scratch_dir("abi");
		let path = dir.join("class.json");
		fs::write(&path, r#"{"abi": [{"name": "f", "type": "function"}], "program": {}}"#)
			.unwrap();

		let class = load_contract_class(&path).unwrap();
		assert_eq!(class["abi"][0]["name"], "f");
	}
}
