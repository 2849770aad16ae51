use std::fmt;

use crate::db::names::NavigationTemplate;

/// A closed `[min, max]` range with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Interval<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Copy> Interval<T> {
    /// Returns `None` if `min` is greater than `max`.
    pub fn new(min: T, max: T) -> Option<Self> {
        if min <= max {
            Some(Self { min, max })
        } else {
            None
        }
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// Name displayed in briefings for a unit family.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnitBriefingName {
    singular: String,
    plural: String,
}

impl UnitBriefingName {
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    /// Take the first two entries as (singular, plural). Missing entries become
    /// empty strings and extra entries are ignored.
    pub fn from_sequence(entries: Vec<String>) -> Self {
        let mut entries = entries.into_iter();
        Self {
            singular: entries.next().unwrap_or_default(),
            plural: entries.next().unwrap_or_default(),
        }
    }

    pub fn singular(&self) -> &str {
        &self.singular
    }

    pub fn plural(&self) -> &str {
        &self.plural
    }

    pub fn for_count(&self, count: usize) -> &str {
        if count == 1 { &self.singular } else { &self.plural }
    }
}

/// Labels for the player's flight plan waypoints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WaypointNames {
    pub(crate) final_name: String,
    pub(crate) initial: String,
    pub(crate) navigation: NavigationTemplate,
    pub(crate) objectives: Vec<String>,
}

impl WaypointNames {
    /// Name of the final (landing) waypoint.
    pub fn final_name(&self) -> &str {
        &self.final_name
    }

    /// Name of the initial (takeoff) waypoint.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    pub fn navigation(&self) -> &NavigationTemplate {
        &self.navigation
    }

    /// Names for objectives and objective waypoints. Never empty.
    pub fn objectives(&self) -> &[String] {
        &self.objectives
    }
}
