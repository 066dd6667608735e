use serde::Serialize;
use std::fmt::Debug;

/// Ordered classification produced by a band table.
///
/// `rank` counts upward from the weakest outcome (0) so tiers can be compared across
/// calculators whose metrics grow in opposite directions.
pub trait Tier: Copy + Eq + Debug + 'static {
    fn label(self) -> &'static str;
    fn rank(self) -> u8;
    fn levels() -> u8;
}

/// Tier placement for one classified metric, as exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierAssignment {
    pub metric: &'static str,
    pub tier: &'static str,
    pub rank: u8,
    pub levels: u8,
}

impl TierAssignment {
    pub fn new<T: Tier>(metric: &'static str, tier: T) -> Self {
        Self {
            metric,
            tier: tier.label(),
            rank: tier.rank(),
            levels: T::levels(),
        }
    }
}

/// Declares a tier enum, weakest variant first, along with its [`Tier`] impl.
macro_rules! tiers {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
        #[serde(rename_all = "snake_case")]
        $vis enum $name {
            $($variant),+
        }

        impl $crate::evaluator::Tier for $name {
            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            fn rank(self) -> u8 {
                self as u8
            }

            fn levels() -> u8 {
                [$(Self::$variant),+].len() as u8
            }
        }
    };
}

pub(crate) use tiers;
