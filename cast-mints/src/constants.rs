/// Cast Collectibles ERC-721 contract on Base mainnet.
pub const CONTRACT_ADDRESS: &str = "0xc011Ec7Ca575D4f0a2eDA595107aB104c7Af7A09";

/// Event signature topic of the contract's mint event
/// (`topics[0]` of every matching log).
pub const MINT_EVENT_TOPIC: &str =
    "0xcf6fbb9dcea7d07263ab4f5c3a92f53af33dffc421d9d121e1c74b307e68189d";

/// Chain tag attached to every record handed to the presentation layer.
pub const CHAIN: &str = "base";

/// Number of blocks covered by one `eth_getLogs` window. Providers bound
/// both the block span and the result count of a single query, so the scan
/// walks backward in ranges of this size.
pub const BLOCK_WINDOW: i64 = 500;

/// How many recent mints a scan returns.
pub const RECENT_MINT_COUNT: usize = 10;

/// Alchemy endpoint root; the API key is appended as the last path segment.
pub const ALCHEMY_BASE_URL: &str = "https://base-mainnet.g.alchemy.com/v2";
