use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// One entry of an `eth_getLogs` result. Fields the decoder does not read
/// (address, log index, ...) are ignored on deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLog {
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub block_number: Option<String>,
    #[serde(default)]
    pub transaction_hash: Option<String>,
}

/// A decoded mint, built from a single log entry:
/// `topics[1]` recipient, `topics[2]` token id, `topics[3]` the Farcaster
/// FID that triggered the mint, and the first 32 bytes of `data` the cast
/// hash the token was minted from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MintEvent {
    pub token_id: String,
    pub to_address: String,
    pub originator_id: String,
    pub content_hash: String,
    pub block_number: u64,
    pub transaction_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

/// Running counters for the decoding stage. Malformed logs are dropped
/// silently from the output; this is the only place the drop rate can be
/// observed.
#[derive(Debug, Default)]
pub struct DecodeStats {
    dropped: AtomicU64,
}

impl DecodeStats {
    pub fn record_drop(&self) {
        self.dropped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

/// Parses a 0x-prefixed hex quantity into its decimal string form.
pub(crate) fn parse_uint_hex(value: &str) -> Option<u128> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    u128::from_str_radix(digits, 16).ok()
}

/// Decodes one raw log into a [`MintEvent`]. A log that fails structural
/// validation decodes to `None` and bumps the drop counter.
pub fn decode_mint_log(log: &RawLog, stats: &DecodeStats) -> Option<MintEvent> {
    match try_decode(log) {
        Some(event) => Some(event),
        None => {
            stats.record_drop();
            tracing::warn!(
                topics = log.topics.len(),
                transaction_hash = log.transaction_hash.as_deref().unwrap_or(""),
                "dropping malformed mint event log"
            );
            None
        }
    }
}

fn try_decode(log: &RawLog) -> Option<MintEvent> {
    if log.topics.len() < 4 {
        return None;
    }

    // topics are 32-byte words; the address sits in the lower 20 bytes of
    // topics[1], behind 12 bytes of zero padding (24 hex chars + "0x").
    let to_topic = &log.topics[1];
    if to_topic.len() < 66 {
        return None;
    }
    let to_address = format!("0x{}", &to_topic[26..]);

    let token_id = parse_uint_hex(&log.topics[2])?.to_string();
    let originator_id = parse_uint_hex(&log.topics[3])?.to_string();

    // First 32 bytes of the payload, or empty when the log carries no data.
    let data = log.data.as_deref().unwrap_or("");
    let content_hash = if data.len() > 2 {
        data[..data.len().min(66)].to_string()
    } else {
        String::new()
    };

    let block_number = parse_uint_hex(log.block_number.as_deref()?)? as u64;
    let transaction_hash = log.transaction_hash.clone()?;

    Some(MintEvent {
        token_id,
        to_address,
        originator_id,
        content_hash,
        block_number,
        transaction_hash,
        timestamp: None,
    })
}
