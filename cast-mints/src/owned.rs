use serde::Serialize;

use crate::client::NftGateway;
use crate::constants::{CHAIN, CONTRACT_ADDRESS};
use crate::error::Result;
use crate::metadata::TokenMetadata;
use crate::state::{FetchPhase, FetchSnapshot, FetchStore};

/// A token currently held by the viewed wallet. Same shape as an enriched
/// mint record minus the event provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnedToken {
    pub token_id: String,
    pub metadata: Option<TokenMetadata>,
    pub contract_address: String,
    pub chain: String,
}

/// Lists the collection's tokens owned by a wallet: one enumeration call,
/// then a sequential metadata fan-out reusing the shared resolver. No
/// scanning involved.
pub struct OwnedTokenFetcher<P> {
    provider: P,
    store: FetchStore<OwnedToken>,
}

impl<P> OwnedTokenFetcher<P>
where
    P: NftGateway,
{
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            store: FetchStore::new(),
        }
    }

    /// Last published outcome, whichever owner it was fetched for.
    pub async fn snapshot(&self) -> FetchSnapshot<OwnedToken> {
        self.store.snapshot().await
    }

    /// Fetches the owned-token list for `owner` and returns this request's
    /// own outcome. The shared store only tracks the latest cycle for
    /// observers; concurrent requests for different owners each get their
    /// own list back, never another caller's. Enumeration failure becomes
    /// the error state; per-token metadata failure yields a record with
    /// null metadata.
    pub async fn refetch_for(&self, owner: &str) -> FetchSnapshot<OwnedToken> {
        let generation = self.store.begin().await;
        match self.fetch(owner).await {
            Ok(tokens) => {
                if !self.store.complete(generation, tokens.clone()).await {
                    tracing::debug!(owner, "a newer owned-token fetch superseded this one");
                }
                FetchSnapshot {
                    phase: FetchPhase::Success,
                    data: tokens,
                    error: None,
                }
            }
            Err(e) => {
                tracing::error!(owner, error = %e, "owned token fetch failed");
                let message = e.to_string();
                self.store.fail(generation, message.clone()).await;
                FetchSnapshot {
                    phase: FetchPhase::Failure,
                    data: Vec::new(),
                    error: Some(message),
                }
            }
        }
    }

    async fn fetch(&self, owner: &str) -> Result<Vec<OwnedToken>> {
        let token_ids = self.provider.tokens_of_owner(owner).await?;
        let mut tokens = Vec::with_capacity(token_ids.len());
        for token_id in token_ids {
            let metadata = self.provider.token_metadata(&token_id).await;
            tokens.push(OwnedToken {
                token_id,
                metadata,
                contract_address: CONTRACT_ADDRESS.to_string(),
                chain: CHAIN.to_string(),
            });
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::Notify;

    struct MockGateway {
        owned: Vec<String>,
        fail_enumeration: bool,
    }

    #[async_trait]
    impl NftGateway for MockGateway {
        async fn token_metadata(&self, token_id: &str) -> Option<TokenMetadata> {
            if token_id == "3" {
                return None;
            }
            Some(TokenMetadata {
                name: Some(format!("Cast #{token_id}")),
                ..Default::default()
            })
        }

        async fn tokens_of_owner(&self, _owner: &str) -> Result<Vec<String>> {
            if self.fail_enumeration {
                return Err(Error::Rpc("index unavailable".to_string()));
            }
            Ok(self.owned.clone())
        }
    }

    #[tokio::test]
    async fn fans_out_metadata_per_owned_token() {
        let fetcher = OwnedTokenFetcher::new(MockGateway {
            owned: vec!["1".to_string(), "3".to_string(), "9".to_string()],
            fail_enumeration: false,
        });

        let snapshot = fetcher.refetch_for("0xabc").await;
        assert_eq!(snapshot.phase, FetchPhase::Success);
        assert_eq!(snapshot.data.len(), 3);
        assert!(snapshot.data[0].metadata.is_some());
        assert!(snapshot.data[1].metadata.is_none(), "token 3 degrades to null");
        assert_eq!(snapshot.data[2].chain, CHAIN);
    }

    /// Enumeration for owner "slow" blocks until the gate opens, so a
    /// second request can start and finish in between.
    struct GatedGateway {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl NftGateway for GatedGateway {
        async fn token_metadata(&self, _token_id: &str) -> Option<TokenMetadata> {
            None
        }

        async fn tokens_of_owner(&self, owner: &str) -> Result<Vec<String>> {
            if owner == "slow" {
                self.gate.notified().await;
                Ok(vec!["1".to_string()])
            } else {
                Ok(vec!["2".to_string()])
            }
        }
    }

    #[tokio::test]
    async fn concurrent_owners_each_get_their_own_tokens() {
        let gate = Arc::new(Notify::new());
        let fetcher = Arc::new(OwnedTokenFetcher::new(GatedGateway {
            gate: Arc::clone(&gate),
        }));

        // Owner "slow" starts first and stays in flight...
        let slow = {
            let fetcher = Arc::clone(&fetcher);
            tokio::spawn(async move { fetcher.refetch_for("slow").await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;

        // ...while owner "fast" completes a whole cycle.
        let fast = fetcher.refetch_for("fast").await;
        assert_eq!(fast.phase, FetchPhase::Success);
        assert_eq!(fast.data[0].token_id, "2");

        gate.notify_one();
        let slow = slow.await.expect("slow fetch task");
        assert_eq!(slow.phase, FetchPhase::Success);
        assert_eq!(slow.data.len(), 1);
        assert_eq!(
            slow.data[0].token_id, "1",
            "a caller must never be served another owner's tokens"
        );
    }

    #[tokio::test]
    async fn enumeration_failure_sets_error_state() {
        let fetcher = OwnedTokenFetcher::new(MockGateway {
            owned: Vec::new(),
            fail_enumeration: true,
        });

        let snapshot = fetcher.refetch_for("0xabc").await;
        assert_eq!(snapshot.phase, FetchPhase::Failure);
        assert_eq!(snapshot.error.as_deref(), Some("index unavailable"));
        assert!(snapshot.data.is_empty());
    }
}
