//! Rank-based bonus tiers.
//!
//! Ranks are 0-based after sorting sellers by profit, highest first. The
//! checks run in a fixed order so that a lone seller (rank 0 is also the last
//! rank) still receives the top rate:
//!
//! | rank            | rate     |
//! |-----------------|----------|
//! | 0               | top      |
//! | 1, 2            | podium   |
//! | total - 1       | last     |
//! | anything else   | standard |

use rust_decimal::Decimal;

use crate::analysis::seller_stats::SellerStats;

use super::BonusStrategy;

/// Bonus rates as fractions of profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BonusTiers {
    pub top: Decimal,
    pub podium: Decimal,
    pub standard: Decimal,
    pub last: Decimal,
}

impl Default for BonusTiers {
    fn default() -> Self {
        Self {
            top: Decimal::new(15, 2),      // 0.15
            podium: Decimal::new(10, 2),   // 0.10
            standard: Decimal::new(5, 2),  // 0.05
            last: Decimal::ZERO,
        }
    }
}

impl BonusTiers {
    pub fn rate_for_rank(&self, rank: usize, total: usize) -> Decimal {
        if rank == 0 {
            self.top
        } else if rank == 1 || rank == 2 {
            self.podium
        } else if rank + 1 == total {
            self.last
        } else {
            self.standard
        }
    }
}

/// Pays `profit * rate_for_rank(rank)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfitRankBonus {
    tiers: BonusTiers,
}

impl ProfitRankBonus {
    pub fn new(tiers: BonusTiers) -> Self {
        Self { tiers }
    }

    pub fn tiers(&self) -> &BonusTiers {
        &self.tiers
    }
}

impl BonusStrategy for ProfitRankBonus {
    fn bonus(&self, rank: usize, total: usize, seller: &SellerStats) -> Decimal {
        seller.profit.saturating_mul(self.tiers.rate_for_rank(rank, total))
    }
}

/// Default bonus formula with the standard 15/10/5/0 tiers.
pub fn calculate_bonus_by_profit(rank: usize, total: usize, seller: &SellerStats) -> Decimal {
    ProfitRankBonus::default().bonus(rank, total, seller)
}
