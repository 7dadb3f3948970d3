use starknet::core::types::FieldElement;

use crate::error::Error;

/// Parse a single felt input: `0x`-prefixed strings are read as hex,
/// everything else as decimal.  Values at or above the field prime are
/// rejected by the underlying parser.
pub fn parse_felt(input: &str) -> Result<FieldElement, Error> {
	let parsed = if let Some(hex_digits) = input.strip_prefix("0x") {
		FieldElement::from_hex_be(hex_digits)
	} else {
		FieldElement::from_dec_str(input)
	};
	parsed.map_err(|_| Error::InvalidInput(input.to_owned()))
}

/// Parse an ordered list of raw felt inputs, failing on the first bad one.
pub fn parse_inputs(inputs: &[String]) -> Result<Vec<FieldElement>, Error> {
	inputs.iter().map(|s| parse_felt(s)).collect()
}

/// Zero-padded storage encoding: `0x` followed by exactly 64 hex digits.
pub fn to_hex(value: FieldElement) -> String {
	format!("0x{}", hex::encode(value.to_bytes_be()))
}

/// Compact display encoding, as the gateway prints felts.
pub fn format_felt(value: FieldElement) -> String {
	format!("{value:#x}")
}
