use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config;
use crate::constants::{CONTRACT_ADDRESS, MINT_EVENT_TOPIC};
use crate::error::{Error, Result};
use crate::events::{parse_uint_hex, RawLog};
use crate::metadata::TokenMetadata;

/// Read access to the chain's JSON-RPC endpoint. The scanner only ever needs
/// the head block number and filtered logs, so that is the whole seam; tests
/// substitute a scripted implementation.
#[async_trait]
pub trait ChainReader: Send + Sync {
    async fn latest_block_number(&self) -> Result<u64>;

    /// All logs of the collection's mint topic within `[from_block, to_block]`.
    async fn logs_in_range(&self, from_block: u64, to_block: u64) -> Result<Vec<RawLog>>;
}

/// The provider's NFT index: per-token metadata and per-owner enumeration.
#[async_trait]
pub trait NftGateway: Send + Sync {
    /// Metadata for one token, or `None` on any failure. This call never
    /// escalates an error; transport and parse problems are logged and
    /// swallowed so one bad token cannot abort a batch.
    async fn token_metadata(&self, token_id: &str) -> Option<TokenMetadata>;

    /// Decimal token ids of the collection's tokens held by `owner`.
    async fn tokens_of_owner(&self, owner: &str) -> Result<Vec<String>>;
}

/// Alchemy-backed implementation of both provider seams, sharing one
/// `reqwest` client. Stateless apart from the connection pool; safe to call
/// concurrently.
#[derive(Debug, Clone, Default)]
pub struct AlchemyClient {
    http: reqwest::Client,
}

impl AlchemyClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    async fn rpc_call(&self, method: &str, params: Value) -> Result<Value> {
        let url = config::alchemy_url()?;
        let response = self
            .http
            .post(&url)
            .json(&json!({
                "id": 1,
                "jsonrpc": "2.0",
                "method": method,
                "params": params,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::UnexpectedStatus(response.status()));
        }

        let body: Value = response.json().await?;
        if let Some(error) = body.get("error") {
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("RPC error")
                .to_string();
            return Err(Error::Rpc(message));
        }

        Ok(body.get("result").cloned().unwrap_or(Value::Null))
    }
}

#[async_trait]
impl ChainReader for AlchemyClient {
    async fn latest_block_number(&self) -> Result<u64> {
        let result = self.rpc_call("eth_blockNumber", json!([])).await?;
        let hex = result
            .as_str()
            .ok_or_else(|| Error::InvalidResponse("eth_blockNumber result is not a string".into()))?;
        parse_uint_hex(hex)
            .map(|number| number as u64)
            .ok_or_else(|| Error::InvalidResponse(format!("invalid block number {hex}")))
    }

    async fn logs_in_range(&self, from_block: u64, to_block: u64) -> Result<Vec<RawLog>> {
        let result = self
            .rpc_call(
                "eth_getLogs",
                json!([{
                    "address": CONTRACT_ADDRESS,
                    "topics": [MINT_EVENT_TOPIC],
                    "fromBlock": format!("0x{from_block:x}"),
                    "toBlock": format!("0x{to_block:x}"),
                }]),
            )
            .await?;

        if result.is_null() {
            return Ok(Vec::new());
        }
        serde_json::from_value(result)
            .map_err(|e| Error::InvalidResponse(format!("eth_getLogs result: {e}")))
    }
}

#[derive(Deserialize)]
struct NftMetadataResponse {
    #[serde(default)]
    metadata: Option<TokenMetadata>,
}

#[derive(Deserialize)]
struct OwnedNftsResponse {
    #[serde(rename = "ownedNfts", default)]
    owned_nfts: Vec<OwnedNftEntry>,
}

#[derive(Deserialize)]
struct OwnedNftEntry {
    #[serde(default)]
    id: Option<OwnedNftId>,
}

#[derive(Deserialize)]
struct OwnedNftId {
    #[serde(rename = "tokenId")]
    token_id: String,
}

#[async_trait]
impl NftGateway for AlchemyClient {
    async fn token_metadata(&self, token_id: &str) -> Option<TokenMetadata> {
        let base = match config::alchemy_url() {
            Ok(base) => base,
            Err(e) => {
                tracing::warn!(token_id, error = %e, "cannot fetch metadata");
                return None;
            }
        };
        let url = format!(
            "{base}/getNFTMetadata?contractAddress={CONTRACT_ADDRESS}&tokenId={}&tokenType=ERC721",
            urlencoding::encode(token_id)
        );

        let response = match self.http.get(&url).header("accept", "application/json").send().await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(token_id, error = %e, "metadata request failed");
                return None;
            }
        };
        if !response.status().is_success() {
            tracing::warn!(token_id, status = %response.status(), "failed to fetch metadata");
            return None;
        }

        match response.json::<NftMetadataResponse>().await {
            Ok(body) => body.metadata,
            Err(e) => {
                tracing::warn!(token_id, error = %e, "malformed metadata response");
                None
            }
        }
    }

    async fn tokens_of_owner(&self, owner: &str) -> Result<Vec<String>> {
        let base = config::alchemy_url()?;
        let url = format!(
            "{base}/getNFTs?owner={}&contractAddresses[]={CONTRACT_ADDRESS}&withMetadata=false",
            urlencoding::encode(owner)
        );

        let response = self
            .http
            .get(&url)
            .header("accept", "application/json")
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Error::UnexpectedStatus(response.status()));
        }

        let body: OwnedNftsResponse = response
            .json()
            .await
            .map_err(|e| Error::InvalidResponse(format!("getNFTs response: {e}")))?;

        // Token ids come back as padded hex words; normalize to decimal so
        // they line up with what the scanner and metadata calls use.
        Ok(body
            .owned_nfts
            .into_iter()
            .filter_map(|entry| entry.id)
            .filter_map(|id| parse_uint_hex(&id.token_id))
            .map(|id| id.to_string())
            .collect())
    }
}
