use anyhow::{anyhow, Result};

use crate::cli::AccountCommand;
use crate::commands::{deploy, Context};
use crate::crypto;
use crate::felt;
use crate::store::Account;

pub async fn run(ctx: &mut Context, cmd: &AccountCommand) -> Result<()> {
	match cmd {
		AccountCommand::Create { name } => create(ctx, name).await,
		AccountCommand::List => list(ctx),
	}
}

/// Store a fresh key pair under `name` without deploying anything.  The
/// record gains a contract address later, via `account create`.
pub fn generate_key_pair(ctx: &mut Context, name: &str) -> Result<()> {
	let pair = crypto::generate_key_pair();
	ctx.accounts.insert(
		name,
		Account {
			public_key: pair.public,
			private_key: pair.private,
			contract_address: None,
		},
	);
	ctx.accounts.save(&ctx.dir)?;

	println!("Generated key pair for account {name}");
	println!("Public key {}", felt::to_hex(pair.public));
	Ok(())
}

/// Generate a key pair, deploy the account contract template seeded with
/// the public key, and persist the complete record.
async fn create(ctx: &mut Context, name: &str) -> Result<()> {
	let pair = crypto::generate_key_pair();

	let (_, response) = deploy::deploy_contract(
		&ctx.config.contracts.account_class,
		&[pair.public.to_string()],
		crypto::random_felt(),
		&ctx.gateway,
	)
	.await?;
	let address = response
		.address
		.as_deref()
		.ok_or_else(|| anyhow!("gateway response carries no contract address"))?;
	let contract_address = felt::parse_felt(address)?;

	ctx.accounts.insert(
		name,
		Account {
			public_key: pair.public,
			private_key: pair.private,
			contract_address: Some(contract_address),
		},
	);
	ctx.accounts.save(&ctx.dir)?;

	println!("Created account {name}");
	println!("Contract address {}", felt::to_hex(contract_address));
	Ok(())
}

fn list(ctx: &Context) -> Result<()> {
	for (name, account) in ctx.accounts.iter() {
		match account.contract_address {
			Some(address) => println!("{name}: {}", felt::to_hex(address)),
			None => println!("{name}: (not deployed)"),
		}
	}
	Ok(())
}
