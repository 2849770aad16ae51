//! Closed, ordered sets of discrete levels used to parametrize mission generation.
//!
//! Every enumeration here is declared through [`category!`], which emits the
//! enum together with its ordered `ALL` table, so the table and the variant list
//! can never drift apart.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A closed, ordered set of named levels.
///
/// The ordinal of a member is its position in [`Category::ALL`] and is used as
/// the index into a [`crate::category_map::CategoryMap`].
pub trait Category: Copy + Eq + fmt::Debug + 'static {
    /// Name of the enumeration itself, used in diagnostics.
    const CATEGORY_NAME: &'static str;
    /// Every member, in ordinal order.
    const ALL: &'static [Self];

    /// Canonical member name, as used in settings keys.
    fn name(self) -> &'static str;

    fn ordinal(self) -> usize;
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{value}' is not a member of {category}")]
pub struct UnknownCategoryMember {
    pub category: &'static str,
    pub value: String,
}

macro_rules! category {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl Category for $name {
            const CATEGORY_NAME: &'static str = stringify!($name);
            const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

            fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant) ),+
                }
            }

            fn ordinal(self) -> usize {
                self as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = UnknownCategoryMember;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|member| member.name().eq_ignore_ascii_case(s))
                    .ok_or_else(|| UnknownCategoryMember {
                        category: Self::CATEGORY_NAME,
                        value: s.to_string(),
                    })
            }
        }
    };
}

category! {
    /// Relative amount, from "very low" to "very high", with a "None" level.
    pub enum AmountN {
        /// Nothing at all
        None,
        VeryLow,
        Low,
        Average,
        High,
        VeryHigh,
    }
}

category! {
    /// Relative amount where "none" is meaningless.
    pub enum Amount {
        VeryLow,
        Low,
        Average,
        High,
        VeryHigh,
    }
}

category! {
    /// Engagement range bucket for surface-to-air defenses.
    pub enum AirDefenseRange {
        Short,
        Medium,
        Long,
    }
}

category! {
    /// Family a unit belongs to, used for briefing and group names.
    pub enum UnitFamily {
        HelicopterAttack,
        HelicopterTransport,
        HelicopterUtility,
        PlaneAWACS,
        PlaneAttack,
        PlaneBomber,
        PlaneFighter,
        PlaneInterceptor,
        PlaneSEAD,
        PlaneStrike,
        PlaneTankerBasket,
        PlaneTankerBoom,
        PlaneTransport,
        PlaneUAV,
        ShipCarrier,
        ShipCruiser,
        ShipFrigate,
        ShipSpeedboat,
        ShipSubmarine,
        ShipTransport,
        StaticStructureMilitary,
        StaticStructureProduction,
        StaticStructureOffshore,
        VehicleAAA,
        VehicleAPC,
        VehicleArtillery,
        VehicleInfantry,
        VehicleInfantryMANPADS,
        VehicleMBT,
        VehicleMissile,
        VehicleSAMLong,
        VehicleSAMMedium,
        VehicleSAMShort,
        VehicleSAMShortIR,
        VehicleStatic,
        VehicleTransport,
    }
}

impl AmountN {
    /// True for every level except [`AmountN::None`].
    pub fn is_some(self) -> bool {
        self != AmountN::None
    }
}

impl From<Amount> for AmountN {
    fn from(amount: Amount) -> Self {
        match amount {
            Amount::VeryLow => AmountN::VeryLow,
            Amount::Low => AmountN::Low,
            Amount::Average => AmountN::Average,
            Amount::High => AmountN::High,
            Amount::VeryHigh => AmountN::VeryHigh,
        }
    }
}
