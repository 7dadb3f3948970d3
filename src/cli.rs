use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
	name = "starkctl",
	about = "CLI for deploying and invoking StarkNet contracts through an account contract.",
	version
)]
pub struct Cli {
	/// Network to target.
	#[arg(long, default_value = "alpha-goerli", global = true)]
	pub network: Network,

	/// Override the gateway base URL.
	#[arg(long, global = true)]
	pub gateway_url: Option<String>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Clone, ValueEnum)]
pub enum Network {
	AlphaGoerli,
	AlphaMainnet,
}

impl Network {
	pub fn as_str(&self) -> &str {
		match self {
			Self::AlphaGoerli => "alpha-goerli",
			Self::AlphaMainnet => "alpha-mainnet",
		}
	}
}

#[derive(Subcommand)]
pub enum Command {
	/// Deploy every contract listed in manifest.json and record the results.
	Deploy {
		/// Contract address salt; a fresh random felt when omitted.
		#[arg(long)]
		salt: Option<String>,
	},

	/// Call a read-only contract function and print the result felts.
	Call {
		/// Contract name from artifacts.json.
		#[arg(long)]
		contract: String,

		/// Function to call.
		#[arg(long)]
		function: String,

		/// Call inputs, one felt each (0x-hex or decimal).
		#[arg(short = 'i', long = "input", value_name = "FELT")]
		inputs: Vec<String>,
	},

	/// Sign and submit an invocation through an account contract.
	Invoke {
		/// Contract name from artifacts.json.
		#[arg(long)]
		contract: String,

		/// Function to invoke.
		#[arg(long)]
		function: String,

		/// Call inputs, one felt each (0x-hex or decimal).
		#[arg(short = 'i', long = "input", value_name = "FELT")]
		inputs: Vec<String>,

		/// Account to sign with.
		#[arg(long, default_value = "main")]
		account: String,
	},

	/// Query the gateway's status record for a transaction.
	#[command(name = "tx_status")]
	TxStatus {
		/// Transaction hash (0x-prefixed).
		#[arg(long)]
		hash: String,
	},

	/// Generate a fresh key pair and store it locally.
	GenerateKeyPair {
		/// Account name to store the key pair under.
		#[arg(long, default_value = "main")]
		account: String,
	},

	/// Manage on-chain account contracts.
	Account {
		#[command(subcommand)]
		command: AccountCommand,
	},
}

// -- Account subcommands --

#[derive(Subcommand)]
pub enum AccountCommand {
	/// Generate a key pair and deploy an account contract seeded with it.
	Create {
		/// Name for the new account.
		#[arg(long, default_value = "main")]
		name: String,
	},

	/// List locally known accounts.
	List,
}
