use serde_json::{json, Value};
use starknet::core::types::FieldElement;

use crate::felt;

/// Gateway wire encoding: addresses, selectors and salts travel as 0x-hex,
/// calldata and signature elements as decimal strings.
fn decimal_list(values: &[FieldElement]) -> Vec<String> {
	values.iter().map(FieldElement::to_string).collect()
}

// -- Transaction payloads --

/// A `DEPLOY` transaction: a compiled contract class plus its constructor
/// calldata.  The salt disambiguates the deployed address on networks that
/// derive addresses from it.
pub struct Deploy {
	pub contract_address_salt: FieldElement,
	pub contract_definition: Value,
	pub constructor_calldata: Vec<FieldElement>,
}

impl Deploy {
	pub fn to_request(&self) -> Value {
		json!({
			"type": "DEPLOY",
			"contract_address_salt": felt::format_felt(self.contract_address_salt),
			"contract_definition": self.contract_definition,
			"constructor_calldata": decimal_list(&self.constructor_calldata),
		})
	}
}

/// An `INVOKE_FUNCTION` transaction.  With an empty signature this doubles
/// as the read-only call payload for the feeder gateway.
pub struct InvokeFunction {
	pub contract_address: FieldElement,
	pub entry_point_selector: FieldElement,
	pub calldata: Vec<FieldElement>,
	pub signature: Vec<FieldElement>,
}

impl InvokeFunction {
	pub fn to_request(&self) -> Value {
		json!({
			"type": "INVOKE_FUNCTION",
			"contract_address": felt::format_felt(self.contract_address),
			"entry_point_selector": felt::format_felt(self.entry_point_selector),
			"calldata": decimal_list(&self.calldata),
			"signature": decimal_list(&self.signature),
		})
	}
}

// -- Execute calldata assembly --

/// Calldata for an account contract's `execute` entry point:
/// `[target, selector, len(inputs), ...inputs, 0]`.
///
/// The account contract forwards the call to `target` after verifying the
/// signature, so the real target and function ride inside the calldata.
pub fn execute_calldata(
	target_address: FieldElement,
	selector: FieldElement,
	inputs: &[FieldElement],
) -> Vec<FieldElement> {
	let mut calldata = Vec::with_capacity(inputs.len() + 4);
	calldata.push(target_address);
	calldata.push(selector);
	calldata.push(FieldElement::from(inputs.len() as u64));
	calldata.extend_from_slice(inputs);
	calldata.push(FieldElement::ZERO);
	calldata
}
