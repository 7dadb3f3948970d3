use thiserror::Error;

/// Failures the CLI can diagnose locally, before or while talking to the
/// gateway.  Anything else is propagated as-is from the underlying crate.
#[derive(Debug, Error)]
pub enum Error {
	/// The account exists locally but its contract was never deployed, so
	/// there is nothing on-chain to route an `execute` call through.
	#[error("account has no deployed contract; run `starkctl account create` first")]
	AccountNotDeployed,

	/// A calldata element could not be parsed as a field element.
	#[error("invalid calldata element: {0:?}")]
	InvalidCalldata(String),

	#[error("unknown account: {0}")]
	UnknownAccount(String),

	#[error("unknown contract: {0}")]
	UnknownContract(String),

	/// A felt input was neither 0x-hex nor decimal, or fell outside the field.
	#[error("invalid felt input: {0:?}")]
	InvalidInput(String),

	/// The gateway answered with an error body instead of a transaction
	/// receipt.  `code` and `message` are reproduced verbatim.
	#[error("gateway rejected the request ({code}): {message}")]
	Gateway { code: String, message: String },

	#[error(transparent)]
	Signing(#[from] starknet::core::crypto::EcdsaSignError),
}
