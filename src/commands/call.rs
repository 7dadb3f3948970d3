use anyhow::Result;

use crate::commands::Context;
use crate::crypto;
use crate::felt;
use crate::tx;

pub async fn run(ctx: &Context, contract: &str, function: &str, inputs: &[String]) -> Result<()> {
	let contract_address = ctx.artifacts.address_of(contract)?;

	let call = tx::InvokeFunction {
		contract_address,
		entry_point_selector: crypto::function_selector(function)?,
		calldata: felt::parse_inputs(inputs)?,
		signature: vec![],
	};
	let result = ctx.feeder.call_contract(&call.to_request()).await?;

	let formatted: Vec<String> = result.into_iter().map(felt::format_felt).collect();
	println!("{}", formatted.join(" "));
	Ok(())
}
