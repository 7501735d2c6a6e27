use std::{fmt::Debug, fs, path::Path};

use serde::Deserialize;

use crate::{
    efficiency::{EfficiencyModel, EfficiencyResult},
    prelude::*,
    quantity::{lamports::Lamports, percent::Percent},
};

const BUILT_IN: &str = include_str!("../benchmarks.toml");

/// Precomputed efficiency figures of the optimized and the baseline implementation.
#[must_use]
#[derive(Deserialize)]
pub struct Benchmarks {
    pub single_recipient: Scenario,
    pub multi_wallet: Scenario,

    #[serde(default)]
    pub transfer_sizes: Vec<TransferSize>,
}

impl Benchmarks {
    /// Read the benchmarks from the file, or fall back to the built-in ones when there is no file.
    #[instrument(name = "Reading the benchmarks…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_file() {
            let contents =
                fs::read(path).with_context(|| format!("failed to read `{}`", path.display()))?;
            toml::from_slice(&contents)
                .with_context(|| format!("failed to parse `{}`", path.display()))
        } else {
            warn!("file not found, using the built-in benchmarks");
            Self::built_in()
        }
    }

    pub fn built_in() -> Result<Self> {
        toml::from_str(BUILT_IN).context("failed to parse the built-in benchmarks")
    }

    /// Single-recipient figures for at most one recipient, multi-wallet ones otherwise.
    pub const fn scenario(&self, n_recipients: u32) -> &Scenario {
        if n_recipients <= 1 { &self.single_recipient } else { &self.multi_wallet }
    }
}

impl EfficiencyModel for Benchmarks {
    fn optimized(&self, amount: Lamports, n_recipients: u32) -> EfficiencyResult {
        trace!(%amount, n_recipients, "looking up the optimized figures");
        self.scenario(n_recipients).optimized
    }

    fn baseline(&self, amount: Lamports, n_recipients: u32) -> EfficiencyResult {
        trace!(%amount, n_recipients, "looking up the baseline figures");
        self.scenario(n_recipients).baseline
    }
}

#[must_use]
#[derive(Clone, Copy, Deserialize)]
pub struct Scenario {
    pub optimized: EfficiencyResult,
    pub baseline: EfficiencyResult,
}

/// Total transfer costs for a specific transfer amount.
#[must_use]
#[derive(Clone, Copy, Deserialize)]
pub struct TransferSize {
    pub amount: Lamports,
    pub single: CostPair,
    pub multi: CostPair,
}

#[must_use]
#[derive(Clone, Copy, Deserialize)]
pub struct CostPair {
    pub baseline: Lamports,
    pub optimized: Lamports,
}

impl CostPair {
    pub fn reduction(self) -> Option<Percent> {
        self.optimized.reduction_from(self.baseline)
    }
}

#[cfg(test)]
mod tests {
    use std::{env, process};

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_built_in_ok() -> Result {
        let benchmarks = Benchmarks::built_in()?;
        assert_eq!(benchmarks.single_recipient.optimized.total_cost, Lamports(952_430));
        assert_eq!(benchmarks.multi_wallet.baseline.cost_breakdown.compute, Lamports(1_126_620));
        assert_eq!(benchmarks.transfer_sizes.len(), 6);
        assert_eq!(benchmarks.transfer_sizes[0].amount, Lamports(100_000_000));
        assert_eq!(benchmarks.single_recipient.baseline.accounts_remaining, 2);
        assert_eq!(benchmarks.multi_wallet.baseline.accounts_remaining, 6);
        assert_eq!(benchmarks.multi_wallet.optimized.accounts_remaining, 0);
        Ok(())
    }

    #[test]
    fn test_built_in_savings_are_consistent() -> Result {
        let benchmarks = Benchmarks::built_in()?;
        for scenario in [benchmarks.single_recipient, benchmarks.multi_wallet] {
            assert_eq!(
                scenario.optimized.savings_vs_baseline,
                scenario.baseline.total_cost - scenario.optimized.total_cost,
            );
            let reduction = scenario.optimized.total_cost.reduction_from(scenario.baseline.total_cost);
            assert_abs_diff_eq!(
                reduction.unwrap().0,
                scenario.optimized.savings_percent.0,
                epsilon = 0.01,
            );
        }
        Ok(())
    }

    #[test]
    fn test_scenario() -> Result {
        let benchmarks = Benchmarks::built_in()?;
        assert_eq!(benchmarks.optimized(Lamports(1), 1).total_cost, Lamports(952_430));
        assert_eq!(benchmarks.baseline(Lamports(1), 1).total_cost, Lamports(1_683_600));
        assert_eq!(benchmarks.optimized(Lamports(1), 6).total_cost, Lamports(1_150_230));
        assert_eq!(benchmarks.baseline(Lamports(1), 2).total_cost, Lamports(2_028_500));
        Ok(())
    }

    #[test]
    fn test_read_from_missing_file() -> Result {
        let benchmarks = Benchmarks::read_from("this-file-does-not-exist.toml")?;
        assert_eq!(benchmarks.transfer_sizes.len(), 6);
        Ok(())
    }

    #[test]
    fn test_read_from_invalid_file() -> Result {
        let path = env::temp_dir().join(format!("benchmarks-invalid-{}.toml", process::id()));
        fs::write(&path, "single_recipient = 42")?;
        let result = Benchmarks::read_from(&path);
        fs::remove_file(&path)?;
        let error = result.err().context("expected a parse error")?;
        assert!(format!("{error:#}").contains(&path.display().to_string()));
        Ok(())
    }

    #[test]
    fn test_cost_pair_reduction() {
        let pair = CostPair { baseline: Lamports(1_683_600), optimized: Lamports(952_430) };
        assert_abs_diff_eq!(pair.reduction().unwrap().0, 43.4289, epsilon = 1e-4);
    }
}
