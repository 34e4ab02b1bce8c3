//! Sequential narrowing of candidates through several strategies.

use rustc_hash::FxHashSet;
use tracing::{instrument, trace};

use crate::game::Position;

use super::policy::{Move, Strategy};

/// Chains strategies as successive filters.
///
/// The first strategy proposes candidates. Each later strategy keeps only
/// the candidates it also proposes. The chain stops as soon as no
/// candidate or exactly one candidate is left; if several survive the
/// whole chain, the first is chosen.
#[derive(Default)]
pub struct Composite {
    strategies: Vec<Box<dyn Strategy>>,
}

impl Composite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a strategy to the end of the chain.
    #[must_use]
    pub fn then(mut self, strategy: impl Strategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Number of strategies in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl From<Vec<Box<dyn Strategy>>> for Composite {
    fn from(strategies: Vec<Box<dyn Strategy>>) -> Self {
        Self { strategies }
    }
}

impl Strategy for Composite {
    #[instrument(level = "debug", skip_all, fields(player = %position.player(), chain = self.strategies.len()))]
    fn generate_moves(&self, position: &Position<'_>) -> Vec<Move> {
        let mut strategies = self.strategies.iter();
        let Some(first) = strategies.next() else {
            return Vec::new();
        };

        let mut candidates = first.generate_moves(position);
        if candidates.len() <= 1 {
            return candidates;
        }

        for strategy in strategies {
            let allowed: FxHashSet<Move> = strategy.generate_moves(position).into_iter().collect();
            candidates.retain(|mv| allowed.contains(mv));
            trace!(remaining = candidates.len(), "narrowed");
            if candidates.len() <= 1 {
                return candidates;
            }
        }

        candidates.truncate(1);
        candidates
    }
}

impl std::fmt::Debug for Composite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Composite")
            .field("strategies", &self.strategies.len())
            .finish()
    }
}
