use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde::Deserialize;

use crate::quantity::percent::Percent;

pub const LAMPORTS_PER_SOL: i64 = 1_000_000_000;

/// Amount in the smallest currency unit, one billionth of a SOL.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    derive_more::FromStr,
    derive_more::Sub,
)]
#[serde(transparent)]
pub struct Lamports(pub i64);

impl Lamports {
    pub const ZERO: Self = Self(0);

    #[allow(clippy::cast_precision_loss)]
    pub fn to_sol(self) -> f64 {
        self.0 as f64 / LAMPORTS_PER_SOL as f64
    }

    /// Relative reduction of `self` compared to the `baseline` amount.
    ///
    /// There is no reduction to speak of against a zero baseline, hence [`None`].
    #[allow(clippy::cast_precision_loss)]
    pub fn reduction_from(self, baseline: Self) -> Option<Percent> {
        (baseline.0 != 0)
            .then(|| Percent((baseline.0 as f64 - self.0 as f64) / baseline.0 as f64 * 100.0))
    }
}

impl Display for Lamports {
    /// Whole SOL from one cent upwards, grouped lamports below that.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sol = self.to_sol();
        if sol >= 0.01 {
            let precision = if sol < 0.1 { 3 } else { 2 };
            write!(f, "{sol:.precision$} SOL")
        } else {
            if *self < Self::ZERO {
                f.write_str("-")?;
            }
            let digits = self.0.unsigned_abs().to_string();
            let grouped =
                digits.as_bytes().rchunks(3).rev().map(String::from_utf8_lossy).join(",");
            write!(f, "{grouped} Lamports")
        }
    }
}
