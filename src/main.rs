use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod config;
mod crypto;
mod error;
mod felt;
mod gateway;
mod store;
mod tx;

use cli::{Cli, Command};
use commands::Context;

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();
	let mut ctx = Context::from_cli(&cli)?;

	match &cli.command {
		Command::Deploy { salt } => commands::deploy::run(&ctx, salt.as_deref()).await,
		Command::Call {
			contract,
			function,
			inputs,
		} => commands::call::run(&ctx, contract, function, inputs).await,
		Command::Invoke {
			contract,
			function,
			inputs,
			account,
		} => commands::invoke::run(&ctx, contract, function, inputs, account).await,
		Command::TxStatus { hash } => commands::tx::run(&ctx, hash).await,
		Command::GenerateKeyPair { account } => {
			commands::account::generate_key_pair(&mut ctx, account)
		}
		Command::Account { command } => commands::account::run(&mut ctx, command).await,
	}
}
