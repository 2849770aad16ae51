//! Section and key names read from the settings documents.
//!
//! Category-indexed keys are built from the member's canonical name, e.g.
//! `RelativePower.VeryHigh` or `Short.DistanceFromObjectives`.

use crate::categories::{AirDefenseRange, AmountN, Category};

// Common.ini
pub const SECTION_INCLUDE: &str = "Include";
pub const KEY_COMMON_OGG: &str = "CommonOgg";

// EnemyAirDefense.ini
pub const SECTION_ENEMY_CAP: &str = "EnemyCombatAirPatrols";
pub const SECTION_ENEMY_AIR_DEFENSE_RANGE: &str = "EnemyAirDefenseRange";
pub const SECTION_AIR_DEFENSE: &str = "AirDefense";
pub const KEY_DISTANCE_FROM_OBJECTIVES: &str = "DistanceFromObjectives";
pub const KEY_MIN_DISTANCE_FROM_TAKEOFF: &str = "MinDistanceFromTakeOffLocation";

// Names.ini
pub const SECTION_MISSION: &str = "Mission";
pub const SECTION_UNIT_BRIEFING: &str = "UnitBriefing";
pub const SECTION_UNIT_GROUP: &str = "UnitGroup";
pub const SECTION_WAYPOINTS: &str = "Waypoints";
pub const KEY_MISSION_TEMPLATE: &str = "Template";
pub const KEY_WAYPOINT_FINAL: &str = "Final";
pub const KEY_WAYPOINT_INITIAL: &str = "Initial";
pub const KEY_WAYPOINT_NAVIGATION: &str = "Navigation";
pub const KEY_WAYPOINT_OBJECTIVES: &str = "Objectives";

// Objectives.ini
pub const SECTION_DISTANCE_TO_OBJECTIVE: &str = "DistanceToObjective";
pub const KEY_DISTANCE_BETWEEN_OBJECTIVES: &str = "DistanceBetweenObjectives";
pub const KEY_DISTANCE_FROM_TAKEOFF: &str = "DistanceFromTakeOffLocation";

/// `{Member}.{suffix}`
pub fn member_key<C: Category>(member: C, suffix: &str) -> String {
    format!("{}.{suffix}", member.name())
}

/// `{prefix}.{Member}`
pub fn prefixed_member_key<C: Category>(prefix: &str, member: C) -> String {
    format!("{prefix}.{}", member.name())
}

pub fn cap_relative_power(level: AmountN) -> String {
    prefixed_member_key("RelativePower", level)
}

/// `PartN`, with `N` starting at 1.
pub fn mission_name_part(index: usize) -> String {
    format!("Part{}", index + 1)
}

pub fn embedded_chance(level: AmountN) -> String {
    member_key(level, "Embedded.Chance")
}

pub fn embedded_unit_count(level: AmountN) -> String {
    member_key(level, "Embedded.UnitCount")
}

pub fn groups_in_area(level: AmountN, range: AirDefenseRange) -> String {
    format!("{}.GroupsInArea.{}", level.name(), range.name())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builds_category_keys() {
        assert_eq!(cap_relative_power(AmountN::VeryHigh), "RelativePower.VeryHigh");
        assert_eq!(
            member_key(AirDefenseRange::Short, KEY_DISTANCE_FROM_OBJECTIVES),
            "Short.DistanceFromObjectives"
        );
        assert_eq!(mission_name_part(0), "Part1");
        assert_eq!(
            groups_in_area(AmountN::Low, AirDefenseRange::Long),
            "Low.GroupsInArea.Long"
        );
        assert_eq!(embedded_chance(AmountN::None), "None.Embedded.Chance");
    }
}
