use serde::Serialize;

use crate::client::{ChainReader, NftGateway};
use crate::constants::{BLOCK_WINDOW, CHAIN, CONTRACT_ADDRESS, RECENT_MINT_COUNT};
use crate::error::Result;
use crate::events::{decode_mint_log, DecodeStats, MintEvent, RawLog};
use crate::metadata::TokenMetadata;
use crate::state::{FetchSnapshot, FetchStore};

/// A mint event joined with its off-chain metadata. `metadata` being `None`
/// is a normal, displayable state; consumers fall back to placeholders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedMintRecord {
    #[serde(flatten)]
    pub event: MintEvent,
    pub metadata: Option<TokenMetadata>,
    pub contract_address: String,
    pub chain: String,
}

/// Discovers the most recent mints of the collection on demand.
///
/// Discovery walks `eth_getLogs` backward from the chain head in windows of
/// [`BLOCK_WINDOW`] blocks until [`RECENT_MINT_COUNT`] raw logs are
/// collected or genesis is passed, decodes and sorts them newest-first,
/// keeps the top [`RECENT_MINT_COUNT`], and enriches each sequentially with
/// metadata. Results replace the store contents wholesale; there is no
/// incremental merge.
pub struct MintScanner<P> {
    provider: P,
    store: FetchStore<EnrichedMintRecord>,
    decode_stats: DecodeStats,
}

impl<P> MintScanner<P>
where
    P: ChainReader + NftGateway,
{
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            store: FetchStore::new(),
            decode_stats: DecodeStats::default(),
        }
    }

    pub async fn snapshot(&self) -> FetchSnapshot<EnrichedMintRecord> {
        self.store.snapshot().await
    }

    /// Malformed logs dropped across all scans so far.
    pub fn dropped_logs(&self) -> u64 {
        self.decode_stats.dropped()
    }

    /// Runs one full discovery cycle and publishes the outcome. On a
    /// whole-call failure the previous result list stays in place and only
    /// the error is updated. A cycle that finishes after a newer one started
    /// is discarded.
    pub async fn refetch(&self) {
        let generation = self.store.begin().await;
        match self.discover().await {
            Ok(records) => {
                if !self.store.complete(generation, records).await {
                    tracing::debug!(generation, "discarding stale scan result");
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "recent mint discovery failed");
                self.store.fail(generation, e.to_string()).await;
            }
        }
    }

    async fn discover(&self) -> Result<Vec<EnrichedMintRecord>> {
        let head = self.provider.latest_block_number().await?;

        // Backward windowed scan. Windows are queried strictly one at a
        // time so the loop can stop as soon as enough logs are collected.
        let mut collected: Vec<RawLog> = Vec::new();
        let mut to_block = head as i64;
        let mut from_block = to_block - BLOCK_WINDOW;
        loop {
            let logs = self
                .provider
                .logs_in_range(from_block.max(0) as u64, to_block as u64)
                .await?;
            collected.extend(logs);

            if collected.len() >= RECENT_MINT_COUNT || from_block < 0 {
                break;
            }
            to_block = from_block;
            from_block -= BLOCK_WINDOW;
        }
        tracing::debug!(head, logs = collected.len(), "windowed scan finished");

        let mut events: Vec<MintEvent> = collected
            .iter()
            .filter_map(|log| decode_mint_log(log, &self.decode_stats))
            .collect();
        // Stable sort: mints within the same block keep encounter order.
        events.sort_by(|a, b| b.block_number.cmp(&a.block_number));
        events.truncate(RECENT_MINT_COUNT);

        // Sequential on purpose; one token's metadata failure must not
        // touch the others.
        let mut records = Vec::with_capacity(events.len());
        for event in events {
            let metadata = self.provider.token_metadata(&event.token_id).await;
            records.push(EnrichedMintRecord {
                event,
                metadata,
                contract_address: CONTRACT_ADDRESS.to_string(),
                chain: CHAIN.to_string(),
            });
        }
        Ok(records)
    }
}
