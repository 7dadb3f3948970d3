use anyhow::{anyhow, Result};
use serde::Deserialize;
use serde_json::Value;
use starknet::core::types::FieldElement;

use crate::error::Error;
use crate::felt;

/// Transport retries beyond the first attempt, matching the upstream
/// gateway client's configuration.
const N_RETRIES: usize = 1;

/// Response to a successful `add_transaction`.  `address` is only present
/// for deploys.
#[derive(Debug, Deserialize)]
pub struct AddTransactionResponse {
	pub code: String,
	pub transaction_hash: String,
	#[serde(default)]
	pub address: Option<String>,
}

/// Write half of the gateway: transaction submission.
pub struct GatewayClient {
	url: String,
	http: reqwest::Client,
}

impl GatewayClient {
	pub fn new(url: &str) -> Self {
		Self {
			url: url.trim_end_matches('/').to_owned(),
			http: reqwest::Client::new(),
		}
	}

	pub async fn add_transaction(&self, tx: &Value) -> Result<AddTransactionResponse> {
		let endpoint = format!("{}/gateway/add_transaction", self.url);
		let body = post_json(&self.http, &endpoint, tx).await?;
		Ok(serde_json::from_value(body)?)
	}
}

/// Read half of the gateway: calls and status queries go to the feeder.
pub struct FeederGatewayClient {
	url: String,
	http: reqwest::Client,
}

impl FeederGatewayClient {
	pub fn new(url: &str) -> Self {
		Self {
			url: url.trim_end_matches('/').to_owned(),
			http: reqwest::Client::new(),
		}
	}

	/// Execute a read-only call against the pending block and return the
	/// result felts.
	pub async fn call_contract(&self, call: &Value) -> Result<Vec<FieldElement>> {
		let endpoint = format!(
			"{}/feeder_gateway/call_contract?blockNumber=pending",
			self.url
		);
		let body = post_json(&self.http, &endpoint, call).await?;

		let result = body
			.get("result")
			.and_then(Value::as_array)
			.ok_or_else(|| anyhow!("call_contract response has no result array: {body}"))?;
		result
			.iter()
			.map(|v| {
				let raw = v.as_str().ok_or_else(|| anyhow!("non-string felt: {v}"))?;
				Ok(felt::parse_felt(raw)?)
			})
			.collect()
	}

	/// Fetch the gateway's status record for a transaction, verbatim.
	pub async fn get_transaction_status(&self, tx_hash: &str) -> Result<Value> {
		let endpoint = format!(
			"{}/feeder_gateway/get_transaction_status?transactionHash={tx_hash}",
			self.url
		);
		let response = send_with_retry(self.http.get(&endpoint)).await?;
		into_json(response).await
	}
}

// -- Shared transport helpers --

async fn post_json(http: &reqwest::Client, endpoint: &str, body: &Value) -> Result<Value> {
	let response = send_with_retry(http.post(endpoint).json(body)).await?;
	into_json(response).await
}

/// Send a request, retrying once on transport failure.  HTTP error statuses
/// are not retried; the gateway's rejection is final.
async fn send_with_retry(request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
	let mut attempts = 0;
	loop {
		let attempt = request
			.try_clone()
			.expect("gateway request bodies are buffered JSON");
		match attempt.send().await {
			Ok(response) => return Ok(response),
			Err(_) if attempts < N_RETRIES => attempts += 1,
			Err(err) => return Err(err.into()),
		}
	}
}

/// Decode a gateway response, turning non-2xx answers into a typed
/// rejection carrying the gateway's own code and message.
async fn into_json(response: reqwest::Response) -> Result<Value> {
	let status = response.status();
	let text = response.text().await?;

	if !status.is_success() {
		let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
		let code = body
			.get("code")
			.and_then(Value::as_str)
			.unwrap_or_else(|| status.as_str())
			.to_owned();
		let message = body
			.get("message")
			.and_then(Value::as_str)
			.unwrap_or(&text)
			.to_owned();
		return Err(Error::Gateway { code, message }.into());
	}

	serde_json::from_str(&text).map_err(|e| anyhow!("malformed gateway response: {e}"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn trailing_slash_is_trimmed() {
		let client = GatewayClient::new("https://alpha4.starknet.io/");
		assert_eq!(client.url, "https://alpha4.starknet.io");
	}

	#[test]
	fn add_transaction_response_tolerates_missing_address() {
		let parsed: AddTransactionResponse = serde_json::from_value(serde_json::json!({
			"code": "TRANSACTION_RECEIVED",
			"transaction_hash": "0x1234",
		}))
		.unwrap();
		assert_eq!(parsed.code, "TRANSACTION_RECEIVED");
		assert!(parsed.address.is_none());
	}

	#[tokio::test]
	async fn transport_failure_surfaces_after_retry() {
		// Nothing listens here; both attempts fail fast with a refusal.
		let client = FeederGatewayClient::new("http://127.0.0.1:1");
		let result = client.get_transaction_status("0x0").await;
		assert!(result.is_err());
	}
}
