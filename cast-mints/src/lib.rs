//! Data-fetching core for the Cast Collectibles viewer.
//!
//! Two fetchers share one provider: the recent-mint scanner discovers the
//! latest mint events of the collection by walking `eth_getLogs` backward in
//! block windows, and the owned-token fetcher enumerates a wallet's tokens.
//! Both enrich their results with off-chain JSON metadata, one token at a
//! time, tolerating per-token failures.

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod metadata;
pub mod owned;
pub mod scanner;
pub mod state;

pub use client::{AlchemyClient, ChainReader, NftGateway};
pub use error::{Error, Result};
pub use events::MintEvent;
pub use metadata::TokenMetadata;
pub use owned::{OwnedToken, OwnedTokenFetcher};
pub use scanner::{EnrichedMintRecord, MintScanner};
pub use state::{FetchPhase, FetchSnapshot, FetchStore};
