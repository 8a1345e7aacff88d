use crate::{clamp, Catalog, HandDef, HandTier, RngState, WeightRule};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DrawError {
    #[error("invalid catalog: no hands to draw from")]
    EmptyCatalog,
    #[error("invalid catalog: every hand has zero weight")]
    ZeroWeight,
    #[error("invalid catalog: requested {requested} hands from a pool of {available}")]
    PoolExhausted { requested: usize, available: u64 },
}

/// Resolved per-tier weights for one win count.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TierWeights {
    pub base: u32,
    pub neutralizer: u32,
    pub mid: u32,
    pub big: u32,
}

impl TierWeights {
    pub fn for_wins(rule: &WeightRule, win_count: u32) -> Self {
        let mid = rule.mid.weight(win_count);
        let big = rule.big.weight(win_count);
        let tightest = rule.base.min(mid).min(big);
        let neutralizer = clamp(
            i64::from(tightest),
            i64::from(rule.neutralizer_floor),
            i64::from(rule.base),
        ) as u32;
        Self {
            base: rule.base,
            neutralizer,
            mid,
            big,
        }
    }

    pub fn of(&self, tier: HandTier) -> u32 {
        match tier {
            HandTier::Base => self.base,
            HandTier::Neutralizer => self.neutralizer,
            HandTier::Mid => self.mid,
            HandTier::Big => self.big,
        }
    }
}

/// Discrete sampler over integer weights, drawn without replacement one
/// unit at a time. Equivalent to expanding every entry into `weight` copies,
/// shuffling, and reading from the front, without materialising the copies.
#[derive(Debug, Clone)]
pub struct WeightedPool {
    weights: Vec<u64>,
    cumulative: Vec<u64>,
}

impl WeightedPool {
    pub fn new(weights: impl IntoIterator<Item = u32>) -> Self {
        let weights: Vec<u64> = weights.into_iter().map(u64::from).collect();
        let mut pool = Self {
            cumulative: Vec::with_capacity(weights.len()),
            weights,
        };
        pool.rebuild();
        pool
    }

    pub fn total(&self) -> u64 {
        self.cumulative.last().copied().unwrap_or(0)
    }

    /// Picks an entry index with probability proportional to its remaining
    /// weight, then removes one unit of that weight.
    pub fn take(&mut self, rng: &mut RngState) -> Option<usize> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let roll = rng.below(total);
        let idx = self.cumulative.partition_point(|&edge| edge <= roll);
        self.weights[idx] -= 1;
        for edge in &mut self.cumulative[idx..] {
            *edge -= 1;
        }
        Some(idx)
    }

    fn rebuild(&mut self) {
        self.cumulative.clear();
        let mut running = 0u64;
        for weight in &self.weights {
            running += weight;
            self.cumulative.push(running);
        }
    }
}

/// Draws `count` computer hands for the given win count.
pub fn draw_hands(
    catalog: &Catalog,
    rule: &WeightRule,
    count: usize,
    win_count: u32,
    rng: &mut RngState,
) -> Result<Vec<HandDef>, DrawError> {
    if catalog.is_empty() {
        return Err(DrawError::EmptyCatalog);
    }
    let tiers = TierWeights::for_wins(rule, win_count);
    let mut pool = WeightedPool::new(catalog.hands().iter().map(|hand| tiers.of(hand.tier)));
    let available = pool.total();
    if available == 0 {
        return Err(DrawError::ZeroWeight);
    }
    if count as u64 > available {
        return Err(DrawError::PoolExhausted {
            requested: count,
            available,
        });
    }
    let mut drawn = Vec::with_capacity(count);
    for _ in 0..count {
        let idx = pool.take(rng).ok_or(DrawError::PoolExhausted {
            requested: count,
            available,
        })?;
        drawn.push(catalog.hands()[idx].clone());
    }
    log::debug!(
        "drew {:?} at win_count={} ({:?})",
        drawn.iter().map(|hand| hand.id.as_str()).collect::<Vec<_>>(),
        win_count,
        tiers
    );
    Ok(drawn)
}
