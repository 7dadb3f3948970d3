use starknet::core::crypto::{compute_hash_on_elements, ecdsa_sign, Signature};
use starknet::core::types::FieldElement;
use starknet::core::utils::get_selector_from_name;
use starknet_crypto::get_public_key;

use crate::error::Error;
use crate::felt;
use crate::store::Account;

// -- Key material --

pub struct KeyPair {
	pub private: FieldElement,
	pub public: FieldElement,
}

/// Generate a fresh key pair.  The private key is drawn as 31 random bytes,
/// which always lands below the 252-bit field prime.
pub fn generate_key_pair() -> KeyPair {
	let private = random_felt();
	let public = get_public_key(&private);
	KeyPair { private, public }
}

/// A random felt, also used as the default deploy salt.
pub fn random_felt() -> FieldElement {
	let bytes = rand::random::<[u8; 31]>();
	FieldElement::from_byte_slice_be(&bytes).expect("31 bytes always fit in a felt")
}

// -- Execute signing --

/// The message hash the account contract's `execute` entry point verifies.
///
/// The tuple order and the trailing zero (a reserved nonce/version slot)
/// must match the verifier exactly; a mismatch is rejected on-chain at
/// submission time, not here.
pub fn execute_message_hash(
	account_address: FieldElement,
	target_address: FieldElement,
	selector: FieldElement,
	calldata: &[FieldElement],
) -> FieldElement {
	compute_hash_on_elements(&[
		account_address,
		target_address,
		selector,
		compute_hash_on_elements(calldata),
		FieldElement::ZERO,
	])
}

/// Sign an `execute` call routed through `account`'s contract.
///
/// The raw inputs are parsed here so that a bad element is reported before
/// anything is hashed or sent.
pub fn build_execute_signature(
	account: &Account,
	target_address: FieldElement,
	function: &str,
	inputs: &[String],
) -> Result<Signature, Error> {
	let account_address = account.contract_address.ok_or(Error::AccountNotDeployed)?;
	let selector = function_selector(function)?;
	let calldata = inputs
		.iter()
		.map(|s| felt::parse_felt(s).map_err(|_| Error::InvalidCalldata(s.clone())))
		.collect::<Result<Vec<_>, _>>()?;

	let message_hash =
		execute_message_hash(account_address, target_address, selector, &calldata);
	let signature = ecdsa_sign(&account.private_key, &message_hash)?;
	Ok(Signature {
		r: signature.r,
		s: signature.s,
	})
}

/// Resolve a function name to its on-chain dispatch selector.
pub fn function_selector(function: &str) -> Result<FieldElement, Error> {
	if function.is_empty() {
		return Err(Error::InvalidInput(function.to_owned()));
	}
	get_selector_from_name(function).map_err(|_| Error::InvalidInput(function.to_owned()))
}

#[cfg(test)]
mod tests {
	use starknet::core::crypto::ecdsa_verify;

	use super::*;

	fn deployed_account() -> Account {
		let private = FieldElement::from(123456789u64);
		Account {
			public_key: get_public_key(&private),
			private_key: private,
			contract_address: Some(FieldElement::from(0xaccu64)),
		}
	}

	#[test]
	fn key_pair_public_matches_private() {
		let pair = generate_key_pair();
		assert_eq!(pair.public, get_public_key(&pair.private));
	}

	#[test]
	fn message_hash_is_deterministic() {
		let calldata = [FieldElement::from(5u64), FieldElement::from(7u64)];
		let a = execute_message_hash(
			FieldElement::from(1u64),
			FieldElement::from(2u64),
			FieldElement::from(3u64),
			&calldata,
		);
		let b = execute_message_hash(
			FieldElement::from(1u64),
			FieldElement::from(2u64),
			FieldElement::from(3u64),
			&calldata,
		);
		assert_eq!(a, b);
	}

	#[test]
	fn message_hash_is_order_sensitive() {
		let calldata = [FieldElement::from(5u64), FieldElement::from(7u64)];
		let account = FieldElement::from(1u64);
		let target = FieldElement::from(2u64);
		let selector = FieldElement::from(3u64);

		let base = execute_message_hash(account, target, selector, &calldata);

		// Swapping account and target addresses must change the hash.
		assert_ne!(base, execute_message_hash(target, account, selector, &calldata));

		// Changing a single calldata element must change the hash.
		let tweaked = [FieldElement::from(5u64), FieldElement::from(8u64)];
		assert_ne!(base, execute_message_hash(account, target, selector, &tweaked));

		// So must swapping calldata order.
		let swapped = [FieldElement::from(7u64), FieldElement::from(5u64)];
		assert_ne!(base, execute_message_hash(account, target, selector, &swapped));
	}

	#[test]
	fn signature_verifies_against_message_hash() {
		let account = deployed_account();
		let target = FieldElement::from(0xbeefu64);
		let inputs = vec!["5".to_owned(), "7".to_owned()];

		let signature =
			build_execute_signature(&account, target, "increase_balance", &inputs).unwrap();

		let message_hash = execute_message_hash(
			account.contract_address.unwrap(),
			target,
			function_selector("increase_balance").unwrap(),
			&[FieldElement::from(5u64), FieldElement::from(7u64)],
		);
		assert!(ecdsa_verify(&account.public_key, &message_hash, &signature).unwrap());
	}

	#[test]
	fn undeployed_account_cannot_sign() {
		let mut account = deployed_account();
		account.contract_address = None;

		let result =
			build_execute_signature(&account, FieldElement::ONE, "increase_balance", &[]);
		assert!(matches!(result, Err(Error::AccountNotDeployed)));
	}

	#[test]
	fn bad_calldata_is_rejected_before_signing() {
		let account = deployed_account();
		let inputs = vec!["5".to_owned(), "not-a-felt".to_owned()];

		let result =
			build_execute_signature(&account, FieldElement::ONE, "increase_balance", &inputs);
		assert!(matches!(result, Err(Error::InvalidCalldata(s)) if s == "not-a-felt"));
	}

	#[test]
	fn empty_function_name_is_rejected() {
		assert!(matches!(function_selector(""), Err(Error::InvalidInput(_))));
	}

	#[test]
	fn selector_matches_known_value() {
		// Keccak-derived selector for "execute", as account contracts hard-wire it.
		assert_eq!(
			function_selector("execute").unwrap(),
			FieldElement::from_hex_be(
				"0x240060cdb34fcc260f41eac7474ee1d7c80b7e3607daff9ac67c7ea2ebb1c44"
			)
			.unwrap()
		);
	}
}
