//! Market-type classification used for player linking

use std::collections::HashSet;

/// Read-only classification of market ids whose outcomes are players.
///
/// Built once at startup from reference data and shared as
/// `Arc<MarketCatalog>` across decode workers; never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketCatalog {
    player_markets: HashSet<i64>,
}

impl MarketCatalog {
    pub fn new(player_markets: impl IntoIterator<Item = i64>) -> Self {
        Self {
            player_markets: player_markets.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_player_market(&self, market_id: i64) -> bool {
        self.player_markets.contains(&market_id)
    }

    pub fn len(&self) -> usize {
        self.player_markets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.player_markets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_classification() {
        let catalog = MarketCatalog::new([38, 39, 40]);
        assert!(catalog.is_player_market(39));
        assert!(!catalog.is_player_market(1));
        assert_eq!(catalog.len(), 3);
        assert!(MarketCatalog::empty().is_empty());
    }

    #[test]
    fn test_shared_reads() {
        let catalog = Arc::new(MarketCatalog::new([888]));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let catalog = Arc::clone(&catalog);
                thread::spawn(move || (0..1000).all(|_| catalog.is_player_market(888)))
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
