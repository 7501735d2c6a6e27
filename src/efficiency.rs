use serde::Deserialize;

use crate::quantity::{lamports::Lamports, percent::Percent};

/// Cost and efficiency figures of a single transfer strategy.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct EfficiencyResult {
    /// Share of the transferred amount that reaches the recipients.
    pub efficiency: Percent,

    pub total_cost: Lamports,

    /// Absolute savings versus the baseline strategy, negative when it is more expensive.
    pub savings_vs_baseline: Lamports,

    pub savings_percent: Percent,

    pub cost_breakdown: CostBreakdown,

    /// Accounts left open after the transfer completes.
    #[serde(default)]
    pub accounts_remaining: u32,
}

impl EfficiencyResult {
    /// Rent reduction of `self` relative to the `baseline` rent.
    pub fn rent_reduction_from(&self, baseline: &Self) -> Option<Percent> {
        self.cost_breakdown.rent.reduction_from(baseline.cost_breakdown.rent)
    }

    /// Reduction of the remaining accounts relative to the `baseline`.
    pub fn accounts_reduction_from(&self, baseline: &Self) -> Option<Percent> {
        (baseline.accounts_remaining != 0).then(|| {
            Percent(
                (f64::from(baseline.accounts_remaining) - f64::from(self.accounts_remaining))
                    / f64::from(baseline.accounts_remaining)
                    * 100.0,
            )
        })
    }

    /// Rent as a share of the total cost.
    #[allow(clippy::cast_precision_loss)]
    pub fn rent_share(&self) -> Option<Percent> {
        (self.total_cost.0 != 0).then(|| {
            Percent(self.cost_breakdown.rent.0 as f64 / self.total_cost.0 as f64 * 100.0)
        })
    }
}

#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct CostBreakdown {
    pub tx_fee: Lamports,
    pub rent: Lamports,
    pub compute: Lamports,
}

/// Source of the precomputed efficiency figures.
pub trait EfficiencyModel {
    /// Figures of the optimized implementation.
    fn optimized(&self, amount: Lamports, n_recipients: u32) -> EfficiencyResult;

    /// Figures of the unoptimized reference implementation.
    fn baseline(&self, amount: Lamports, n_recipients: u32) -> EfficiencyResult;
}

#[cfg(test)]
pub mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    pub const OPTIMIZED: EfficiencyResult = EfficiencyResult {
        efficiency: Percent(98.0),
        total_cost: Lamports(952_430),
        savings_vs_baseline: Lamports(731_170),
        savings_percent: Percent(43.43),
        cost_breakdown: CostBreakdown {
            tx_fee: Lamports(5_250),
            rent: Lamports(267_264),
            compute: Lamports(679_916),
        },
        accounts_remaining: 0,
    };

    pub const BASELINE: EfficiencyResult = EfficiencyResult {
        efficiency: Percent(92.0),
        total_cost: Lamports(1_683_600),
        savings_vs_baseline: Lamports::ZERO,
        savings_percent: Percent(0.0),
        cost_breakdown: CostBreakdown {
            tx_fee: Lamports(5_500),
            rent: Lamports(890_880),
            compute: Lamports(787_220),
        },
        accounts_remaining: 2,
    };

    /// Returns the same pair regardless of the transfer.
    pub struct FixedModel {
        pub optimized: EfficiencyResult,
        pub baseline: EfficiencyResult,
    }

    impl Default for FixedModel {
        fn default() -> Self {
            Self { optimized: OPTIMIZED, baseline: BASELINE }
        }
    }

    impl EfficiencyModel for FixedModel {
        fn optimized(&self, _amount: Lamports, _n_recipients: u32) -> EfficiencyResult {
            self.optimized
        }

        fn baseline(&self, _amount: Lamports, _n_recipients: u32) -> EfficiencyResult {
            self.baseline
        }
    }

    #[test]
    fn test_rent_reduction_from() {
        let reduction = OPTIMIZED.rent_reduction_from(&BASELINE).unwrap();
        let expected = (890_880.0 - 267_264.0) / 890_880.0 * 100.0;
        assert_abs_diff_eq!(reduction.0, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_rent_reduction_from_zero_rent() {
        let baseline = EfficiencyResult {
            cost_breakdown: CostBreakdown { rent: Lamports::ZERO, ..BASELINE.cost_breakdown },
            ..BASELINE
        };
        assert_eq!(OPTIMIZED.rent_reduction_from(&baseline), None);
    }

    #[test]
    fn test_accounts_reduction_from() {
        let reduction = OPTIMIZED.accounts_reduction_from(&BASELINE).unwrap();
        assert_abs_diff_eq!(reduction.0, 100.0);
        let optimized = EfficiencyResult { accounts_remaining: 3, ..OPTIMIZED };
        assert_abs_diff_eq!(optimized.accounts_reduction_from(&BASELINE).unwrap().0, -50.0);
        assert_eq!(BASELINE.accounts_reduction_from(&OPTIMIZED), None);
    }

    #[test]
    fn test_rent_share() {
        assert_abs_diff_eq!(
            BASELINE.rent_share().unwrap().0,
            890_880.0 / 1_683_600.0 * 100.0,
            epsilon = 1e-9,
        );
        let free = EfficiencyResult { total_cost: Lamports::ZERO, ..OPTIMIZED };
        assert_eq!(free.rent_share(), None);
    }
}
