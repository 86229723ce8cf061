use serde::{Deserialize, Serialize};

/// A membership tier with its base price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    pub cost: u32,
}

/// A paid add-on. A sign-up may carry the same feature more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub cost: u32,
}

impl Plan {
    pub fn new(name: impl Into<String>, cost: u32) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }
}

impl Feature {
    pub fn new(name: impl Into<String>, cost: u32) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }
}

/// Result of one pricing run. `total` is kept untruncated; truncation only
/// happens through [`PriceBreakdown::display_total`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub total: f64,
    pub adjustments: Vec<String>,
}

impl PriceBreakdown {
    /// Total truncated toward zero, as shown to the user.
    pub fn display_total(&self) -> i64 {
        self.total.trunc() as i64
    }
}

/// A complete selection together with its computed price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub plan: Plan,
    pub features: Vec<Feature>,
    pub group_size: u32,
    pub breakdown: PriceBreakdown,
}
