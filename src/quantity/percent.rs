use std::fmt::{Display, Formatter};

use serde::Deserialize;

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    PartialEq,
    PartialOrd,
    derive_more::Neg,
    derive_more::Sub,
)]
#[serde(transparent)]
pub struct Percent(pub f64);

impl Display for Percent {
    /// One fractional digit, honouring the `+` flag.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if f.sign_plus() { write!(f, "{:+.1}%", self.0) } else { write!(f, "{:.1}%", self.0) }
    }
}
