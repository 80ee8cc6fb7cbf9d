//! Strongly-typed ID wrappers for all entity types
//!
//! Newtype wrappers around UUIDs prevent mixing up IDs from different entity
//! collections at compile time. Badges are the one exception: they use fixed
//! string slugs (see `models::badge`) because award idempotence is keyed on a
//! well-known name, not a random identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(ExpenseId, "exp-");
define_id!(GoalId, "goal-");
define_id!(BudgetId, "bud-");
define_id!(IncomeId, "inc-");
define_id!(ActivityId, "act-");
define_id!(ChallengeId, "chal-");
define_id!(TipId, "tip-");
define_id!(AdviceId, "adv-");
