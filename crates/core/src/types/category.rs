//! Product categories.

use serde::{Deserialize, Serialize};

/// The fixed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Chocolate,
    Vanilla,
    Fruit,
    Specialty,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 4] = [Self::Chocolate, Self::Vanilla, Self::Fruit, Self::Specialty];

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Chocolate => "Chocolate",
            Self::Vanilla => "Vanilla",
            Self::Fruit => "Fruit",
            Self::Specialty => "Specialty",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slug = match self {
            Self::Chocolate => "chocolate",
            Self::Vanilla => "vanilla",
            Self::Fruit => "fruit",
            Self::Specialty => "specialty",
        };
        write!(f, "{slug}")
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chocolate" => Ok(Self::Chocolate),
            "vanilla" => Ok(Self::Vanilla),
            "fruit" => Ok(Self::Fruit),
            "specialty" => Ok(Self::Specialty),
            _ => Err(format!("unknown category: {s}")),
        }
    }
}
