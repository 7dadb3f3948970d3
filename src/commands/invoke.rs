use anyhow::Result;
use starknet::core::types::FieldElement;

use crate::commands::Context;
use crate::crypto;
use crate::error::Error;
use crate::felt;
use crate::gateway::{AddTransactionResponse, GatewayClient};
use crate::store::Account;
use crate::tx;

pub async fn run(
	ctx: &Context,
	contract: &str,
	function: &str,
	inputs: &[String],
	account_name: &str,
) -> Result<()> {
	let account = ctx.accounts.get(account_name)?;
	let target_address = ctx.artifacts.address_of(contract)?;

	let response =
		invoke_through_account(account, target_address, function, inputs, &ctx.gateway).await?;

	println!("Invoke transaction was sent.");
	println!("Contract address: {}", felt::to_hex(target_address));
	println!("Transaction hash: {}", response.transaction_hash);
	Ok(())
}

/// Route an invocation through the account contract: the submitted
/// transaction targets the account's own `execute` entry point, and the
/// real target and function ride in the calldata, authorized by the
/// signature over the execute message hash.
pub async fn invoke_through_account(
	account: &Account,
	target_address: FieldElement,
	function: &str,
	inputs: &[String],
	gateway: &GatewayClient,
) -> Result<AddTransactionResponse> {
	let account_address = account.contract_address.ok_or(Error::AccountNotDeployed)?;
	let signature = crypto::build_execute_signature(account, target_address, function, inputs)?;

	let calldata = tx::execute_calldata(
		target_address,
		crypto::function_selector(function)?,
		&felt::parse_inputs(inputs)?,
	);

	let tx = tx::InvokeFunction {
		contract_address: account_address,
		entry_point_selector: crypto::function_selector("execute")?,
		calldata,
		signature: vec![signature.r, signature.s],
	};
	gateway.add_transaction(&tx.to_request()).await
}
