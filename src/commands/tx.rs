use anyhow::Result;

use crate::commands::Context;

pub async fn run(ctx: &Context, hash: &str) -> Result<()> {
	let status = ctx.feeder.get_transaction_status(hash).await?;
	// Value objects print with sorted keys, so the output is stable.
	println!("{}", serde_json::to_string_pretty(&status)?);
	Ok(())
}
