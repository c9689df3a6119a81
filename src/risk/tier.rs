use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-level severity used for every factor and for the overall verdict.
///
/// Ordered from least to most severe, so `max()` over tiers yields the worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Green,
    Yellow,
    Red,
}

impl Tier {
    pub fn is_urgent(&self) -> bool {
        *self != Tier::Green
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Green => "green",
            Tier::Yellow => "yellow",
            Tier::Red => "red",
        };
        f.pad(name)
    }
}
