//! The resolved mission-generation parameter table.
//!
//! [`CommonSettings::load`] reads one settings document per concern, each
//! opened and dropped before the next one, and publishes the table only when
//! every category member of every indexed field resolved to a valid value.

use bon::Builder;
use tracing::debug;

use crate::categories::{AirDefenseRange, AmountN, Category, UnitFamily};
use crate::category_map::CategoryMap;
use crate::data::settings::SettingsDocument;
use crate::data::{
    COMMON_SETTINGS_PATH, DataFileLoader, ENEMY_AIR_DEFENSE_PATH, NAMES_PATH, OBJECTIVES_PATH,
    ogg_asset_path,
};
use crate::db::air_defense::AirDefenseInfo;
use crate::db::keys::{self, *};
use crate::db::names::{
    MISSION_NAME_PART_COUNT, MissionNameTemplate, NavigationTemplate, validate_unit_group_template,
};
use crate::db::types::{Interval, UnitBriefingName, WaypointNames};
use crate::db::{read_distance, read_distance_interval, read_percentage, require_member};
use crate::diagnostics::{Advisory, DiagnosticsSink, Severity};
use crate::error::{ErrorKind, IResult};

/// Parameters shared by every generated mission.
///
/// Built once by [`CommonSettings::load`] and never mutated afterwards, so a
/// shared reference can be handed to any number of readers. `load` is the only
/// way to obtain one:
///
/// ```compile_fail
/// let _ = sortiedb::db::CommonSettings::builder();
/// ```
#[derive(Clone, Debug, PartialEq, Builder)]
#[builder(start_fn(vis = "pub(crate)"), builder_type(vis = "pub(crate)"))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CommonSettings {
    objective_spacing: CategoryMap<AmountN, u32>,
    takeoff_to_first_objective: CategoryMap<AmountN, u32>,
    air_defense_presence: CategoryMap<AmountN, AirDefenseInfo>,
    air_defense_min_distance_from_takeoff: CategoryMap<AirDefenseRange, u32>,
    air_defense_distance_from_objectives: CategoryMap<AirDefenseRange, Interval<f64>>,
    cap_distance_from_objectives: Interval<f64>,
    cap_min_distance_from_takeoff: u32,
    cap_relative_power: CategoryMap<AmountN, f64>,
    mission_name_template: MissionNameTemplate,
    mission_name_parts: Vec<Vec<String>>,
    unit_briefing_names: CategoryMap<UnitFamily, UnitBriefingName>,
    unit_group_name_templates: CategoryMap<UnitFamily, String>,
    waypoint_names: WaypointNames,
    included_audio_assets: Vec<String>,
}

struct EnemyAirDefenseSettings {
    cap_distance_from_objectives: Interval<f64>,
    cap_min_distance_from_takeoff: u32,
    cap_relative_power: CategoryMap<AmountN, f64>,
    presence: CategoryMap<AmountN, AirDefenseInfo>,
    min_distance_from_takeoff: CategoryMap<AirDefenseRange, u32>,
    distance_from_objectives: CategoryMap<AirDefenseRange, Interval<f64>>,
}

struct NameSettings {
    mission_name_template: MissionNameTemplate,
    mission_name_parts: Vec<Vec<String>>,
    unit_briefing_names: CategoryMap<UnitFamily, UnitBriefingName>,
    unit_group_name_templates: CategoryMap<UnitFamily, String>,
    waypoint_names: WaypointNames,
}

struct ObjectiveSettings {
    spacing: CategoryMap<AmountN, u32>,
    takeoff_to_first: CategoryMap<AmountN, u32>,
}

impl CommonSettings {
    /// Load and validate every settings document reachable through `files`.
    ///
    /// Missing audio assets are reported to `sink` as warnings. Any other
    /// problem is reported once as an error and returned; no table is produced.
    pub fn load(files: &dyn DataFileLoader, sink: &dyn DiagnosticsSink) -> IResult<Self> {
        Self::load_all(files, sink)
            .inspect_err(|err| sink.report(Severity::Error, &err.to_string()))
    }

    fn load_all(files: &dyn DataFileLoader, sink: &dyn DiagnosticsSink) -> IResult<Self> {
        let included_audio_assets = load_includes(files, sink)?;
        let air_defense = load_enemy_air_defense(files)?;
        let names = load_names(files)?;
        let objectives = load_objectives(files)?;

        Ok(CommonSettings::builder()
            .objective_spacing(objectives.spacing)
            .takeoff_to_first_objective(objectives.takeoff_to_first)
            .air_defense_presence(air_defense.presence)
            .air_defense_min_distance_from_takeoff(air_defense.min_distance_from_takeoff)
            .air_defense_distance_from_objectives(air_defense.distance_from_objectives)
            .cap_distance_from_objectives(air_defense.cap_distance_from_objectives)
            .cap_min_distance_from_takeoff(air_defense.cap_min_distance_from_takeoff)
            .cap_relative_power(air_defense.cap_relative_power)
            .mission_name_template(names.mission_name_template)
            .mission_name_parts(names.mission_name_parts)
            .unit_briefing_names(names.unit_briefing_names)
            .unit_group_name_templates(names.unit_group_name_templates)
            .waypoint_names(names.waypoint_names)
            .included_audio_assets(included_audio_assets)
            .build())
    }

    /// Distance between consecutive objectives, per amount level.
    pub fn objective_spacing(&self) -> &CategoryMap<AmountN, u32> {
        &self.objective_spacing
    }

    /// Distance from the takeoff location to the first objective, per amount level.
    pub fn takeoff_to_first_objective(&self) -> &CategoryMap<AmountN, u32> {
        &self.takeoff_to_first_objective
    }

    pub fn air_defense_presence(&self) -> &CategoryMap<AmountN, AirDefenseInfo> {
        &self.air_defense_presence
    }

    pub fn air_defense_min_distance_from_takeoff(&self) -> &CategoryMap<AirDefenseRange, u32> {
        &self.air_defense_min_distance_from_takeoff
    }

    pub fn air_defense_distance_from_objectives(
        &self,
    ) -> &CategoryMap<AirDefenseRange, Interval<f64>> {
        &self.air_defense_distance_from_objectives
    }

    pub fn cap_distance_from_objectives(&self) -> Interval<f64> {
        self.cap_distance_from_objectives
    }

    pub fn cap_min_distance_from_takeoff(&self) -> u32 {
        self.cap_min_distance_from_takeoff
    }

    /// Enemy CAP strength relative to the player's flight, in `[0.0, 1.0]`.
    /// Always exactly `0.0` for [`AmountN::None`].
    pub fn cap_relative_power(&self) -> &CategoryMap<AmountN, f64> {
        &self.cap_relative_power
    }

    pub fn mission_name_template(&self) -> &MissionNameTemplate {
        &self.mission_name_template
    }

    /// Candidate strings for every mission name part. Index 0 is `$P1$`.
    pub fn mission_name_parts(&self) -> &[Vec<String>] {
        &self.mission_name_parts
    }

    pub fn unit_briefing_names(&self) -> &CategoryMap<UnitFamily, UnitBriefingName> {
        &self.unit_briefing_names
    }

    pub fn unit_group_name_templates(&self) -> &CategoryMap<UnitFamily, String> {
        &self.unit_group_name_templates
    }

    pub fn waypoint_names(&self) -> &WaypointNames {
        &self.waypoint_names
    }

    pub fn included_audio_assets(&self) -> &[String] {
        &self.included_audio_assets
    }
}

fn load_includes(files: &dyn DataFileLoader, sink: &dyn DiagnosticsSink) -> IResult<Vec<String>> {
    debug!("loading common global settings");
    let doc = SettingsDocument::open(files, COMMON_SETTINGS_PATH)?;

    let common_ogg: Vec<String> = doc.get_sequence(SECTION_INCLUDE, KEY_COMMON_OGG)?;
    for name in &common_ogg {
        let path = ogg_asset_path(name);
        if !files.file_exists(&path) {
            sink.advise(&Advisory::AssetMissing { path });
        }
    }

    Ok(common_ogg)
}

fn load_enemy_air_defense(files: &dyn DataFileLoader) -> IResult<EnemyAirDefenseSettings> {
    debug!("loading common enemy air defense settings");
    let doc = SettingsDocument::open(files, ENEMY_AIR_DEFENSE_PATH)?;

    let cap_distance_from_objectives =
        read_distance_interval(&doc, SECTION_ENEMY_CAP, KEY_DISTANCE_FROM_OBJECTIVES)?;
    let cap_min_distance_from_takeoff =
        read_distance(&doc, SECTION_ENEMY_CAP, KEY_MIN_DISTANCE_FROM_TAKEOFF)?;

    let presence = CategoryMap::try_from_fn(|level| AirDefenseInfo::load(&doc, level))?;

    // "No CAP" is always zero power; the None key is never read.
    let cap_relative_power = CategoryMap::try_from_fn(|level: AmountN| {
        if !level.is_some() {
            return Ok(0.0);
        }
        let key = keys::cap_relative_power(level);
        require_member(&doc, SECTION_ENEMY_CAP, &key, level)?;
        read_percentage(&doc, SECTION_ENEMY_CAP, &key)
    })?;

    let min_distance_from_takeoff = CategoryMap::try_from_fn(|range: AirDefenseRange| {
        let key = member_key(range, KEY_MIN_DISTANCE_FROM_TAKEOFF);
        require_member(&doc, SECTION_ENEMY_AIR_DEFENSE_RANGE, &key, range)?;
        read_distance(&doc, SECTION_ENEMY_AIR_DEFENSE_RANGE, &key)
    })?;

    let distance_from_objectives = CategoryMap::try_from_fn(|range: AirDefenseRange| {
        let key = member_key(range, KEY_DISTANCE_FROM_OBJECTIVES);
        require_member(&doc, SECTION_ENEMY_AIR_DEFENSE_RANGE, &key, range)?;
        read_distance_interval(&doc, SECTION_ENEMY_AIR_DEFENSE_RANGE, &key)
    })?;

    Ok(EnemyAirDefenseSettings {
        cap_distance_from_objectives,
        cap_min_distance_from_takeoff,
        cap_relative_power,
        presence,
        min_distance_from_takeoff,
        distance_from_objectives,
    })
}

/// A list that must hold at least one entry.
fn read_non_empty_sequence(
    doc: &SettingsDocument,
    section: &str,
    key: &str,
) -> IResult<Vec<String>> {
    let entries: Vec<String> = doc.get_sequence(section, key)?;
    if entries.is_empty() {
        return Err(ErrorKind::MalformedValue {
            location: doc.location(section, key),
            detail: "list needs at least one entry".to_string(),
        });
    }
    Ok(entries)
}

fn load_names(files: &dyn DataFileLoader) -> IResult<NameSettings> {
    debug!("loading common names settings");
    let doc = SettingsDocument::open(files, NAMES_PATH)?;

    let template: String = doc.get_scalar(SECTION_MISSION, KEY_MISSION_TEMPLATE)?;
    let mission_name_template = MissionNameTemplate::parse(
        &template,
        &doc.location(SECTION_MISSION, KEY_MISSION_TEMPLATE),
    )?;

    let mission_name_parts = (0..MISSION_NAME_PART_COUNT)
        .map(|index| {
            read_non_empty_sequence(&doc, SECTION_MISSION, &keys::mission_name_part(index))
        })
        .collect::<IResult<Vec<_>>>()?;

    let unit_briefing_names = CategoryMap::try_from_fn(|family: UnitFamily| {
        require_member(&doc, SECTION_UNIT_BRIEFING, family.name(), family)?;
        let entries = doc.get_sequence(SECTION_UNIT_BRIEFING, family.name())?;
        Ok::<_, ErrorKind>(UnitBriefingName::from_sequence(entries))
    })?;

    let unit_group_name_templates = CategoryMap::try_from_fn(|family: UnitFamily| {
        require_member(&doc, SECTION_UNIT_GROUP, family.name(), family)?;
        let template = doc.get_scalar(SECTION_UNIT_GROUP, family.name())?;
        validate_unit_group_template(template, &doc.location(SECTION_UNIT_GROUP, family.name()))
    })?;

    let navigation: String = doc.get_scalar(SECTION_WAYPOINTS, KEY_WAYPOINT_NAVIGATION)?;
    let waypoint_names = WaypointNames {
        final_name: doc.get_scalar(SECTION_WAYPOINTS, KEY_WAYPOINT_FINAL)?,
        initial: doc.get_scalar(SECTION_WAYPOINTS, KEY_WAYPOINT_INITIAL)?,
        navigation: NavigationTemplate::parse(
            &navigation,
            &doc.location(SECTION_WAYPOINTS, KEY_WAYPOINT_NAVIGATION),
        )?,
        objectives: read_non_empty_sequence(&doc, SECTION_WAYPOINTS, KEY_WAYPOINT_OBJECTIVES)?,
    };

    Ok(NameSettings {
        mission_name_template,
        mission_name_parts,
        unit_briefing_names,
        unit_group_name_templates,
        waypoint_names,
    })
}

fn load_objectives(files: &dyn DataFileLoader) -> IResult<ObjectiveSettings> {
    debug!("loading common objective settings");
    let doc = SettingsDocument::open(files, OBJECTIVES_PATH)?;

    let read_level = |level: AmountN, suffix: &str| {
        let key = member_key(level, suffix);
        require_member(&doc, SECTION_DISTANCE_TO_OBJECTIVE, &key, level)?;
        read_distance(&doc, SECTION_DISTANCE_TO_OBJECTIVE, &key)
    };

    Ok(ObjectiveSettings {
        spacing: CategoryMap::try_from_fn(|level| {
            read_level(level, KEY_DISTANCE_BETWEEN_OBJECTIVES)
        })?,
        takeoff_to_first: CategoryMap::try_from_fn(|level| {
            read_level(level, KEY_DISTANCE_FROM_TAKEOFF)
        })?,
    })
}

#[cfg(test)]
mod test {
    use std::borrow::Cow;
    use std::collections::HashMap;
    use std::fmt::Write as _;
    use std::thread;

    use super::*;
    use crate::categories::Amount;
    use crate::data::DataFileWithCallback;
    use crate::diagnostics::CollectingSink;

    const RADIO_PRESENT: &str = "Include/Ogg/radio0.ogg";

    fn fixture() -> HashMap<&'static str, String> {
        let common = "[Include]\nCommonOgg = radio0, radio1\n".to_string();

        let mut air_defense = String::from(
            "[EnemyCombatAirPatrols]
DistanceFromObjectives = 10,30
MinDistanceFromTakeOffLocation = -5
RelativePower.VeryLow = 20
RelativePower.Low = 150
RelativePower.Average = 50
RelativePower.High = -10
RelativePower.VeryHigh = 80

[EnemyAirDefenseRange]
Short.MinDistanceFromTakeOffLocation = 10
Short.DistanceFromObjectives = 0,15
Medium.MinDistanceFromTakeOffLocation = 20
Medium.DistanceFromObjectives = 10,40
Long.MinDistanceFromTakeOffLocation = 40
Long.DistanceFromObjectives = 20,20

[AirDefense]
",
        );
        for level in AmountN::ALL {
            let ordinal = level.ordinal();
            writeln!(air_defense, "{level}.Embedded.Chance = {}", ordinal * 20).unwrap();
            writeln!(air_defense, "{level}.Embedded.UnitCount = 0,{ordinal}").unwrap();
            for range in AirDefenseRange::ALL {
                writeln!(air_defense, "{level}.GroupsInArea.{range} = 0,{ordinal}").unwrap();
            }
        }

        let mut names = String::from(
            "[Mission]
Template = Operation $P1$ $P2$
Part1 = Red, Blue
Part2 = Dawn
Part3 = Storm
Part4 = Spear, Hammer

[UnitBriefing]
",
        );
        for family in UnitFamily::ALL {
            writeln!(names, "{family} = {family} unit, {family} units").unwrap();
        }
        names.push_str("\n[UnitGroup]\n");
        for family in UnitFamily::ALL {
            writeln!(names, "{family} = $N$ {family} Group").unwrap();
        }
        names.push_str(
            "
[Waypoints]
Final = Landing
Initial = Takeoff
Navigation = WP$00$
Objectives = Alpha, Bravo, Charlie
",
        );

        let mut objectives = String::from("[DistanceToObjective]\n");
        for level in AmountN::ALL {
            let ordinal = level.ordinal() as i32;
            writeln!(
                objectives,
                "{level}.DistanceBetweenObjectives = {}",
                ordinal * 10 - 20
            )
            .unwrap();
            writeln!(objectives, "{level}.DistanceFromTakeOffLocation = {}", ordinal * 40).unwrap();
        }

        HashMap::from([
            (COMMON_SETTINGS_PATH, common),
            (ENEMY_AIR_DEFENSE_PATH, air_defense),
            (NAMES_PATH, names),
            (OBJECTIVES_PATH, objectives),
            (RADIO_PRESENT, String::new()),
        ])
    }

    fn edit(files: &mut HashMap<&'static str, String>, path: &str, from: &str, to: &str) {
        let text = files.get_mut(path).unwrap();
        assert!(text.contains(from), "{path} does not contain {from:?}");
        *text = text.replacen(from, to, 1);
    }

    fn load(
        files: HashMap<&'static str, String>,
    ) -> (IResult<CommonSettings>, CollectingSink) {
        let loader = DataFileWithCallback::new(move |path: &str| {
            files
                .get(path)
                .map(|text| Cow::Owned(text.clone().into_bytes()))
                .ok_or_else(|| ErrorKind::MissingDocument {
                    document: path.to_string(),
                })
        });
        let sink = CollectingSink::new();
        let result = CommonSettings::load(&loader, &sink);
        (result, sink)
    }

    fn load_ok(files: HashMap<&'static str, String>) -> CommonSettings {
        let (result, sink) = load(files);
        match result {
            Ok(settings) => settings,
            Err(err) => panic!("load failed: {err} ({:?})", sink.entries()),
        }
    }

    fn load_err(files: HashMap<&'static str, String>) -> ErrorKind {
        let (result, sink) = load(files);
        let err = match result {
            Ok(_) => panic!("load unexpectedly succeeded"),
            Err(err) => err,
        };
        let errors = sink.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, err.to_string());
        err
    }

    #[test]
    fn every_indexed_field_is_total() {
        let settings = load_ok(fixture());

        assert_eq!(settings.objective_spacing().len(), AmountN::ALL.len());
        assert_eq!(settings.takeoff_to_first_objective().len(), AmountN::ALL.len());
        assert_eq!(settings.air_defense_presence().len(), AmountN::ALL.len());
        assert_eq!(settings.cap_relative_power().len(), AmountN::ALL.len());
        assert_eq!(
            settings.air_defense_min_distance_from_takeoff().len(),
            AirDefenseRange::ALL.len()
        );
        assert_eq!(
            settings.air_defense_distance_from_objectives().len(),
            AirDefenseRange::ALL.len()
        );
        assert_eq!(settings.unit_briefing_names().len(), UnitFamily::ALL.len());
        assert_eq!(settings.unit_group_name_templates().len(), UnitFamily::ALL.len());
        assert_eq!(settings.mission_name_parts().len(), MISSION_NAME_PART_COUNT);

        for (level, info) in settings.air_defense_presence().iter() {
            assert_eq!(info.all_groups_in_area().len(), AirDefenseRange::ALL.len());
            assert_eq!(info.embedded_unit_count().max() as usize, level.ordinal());
        }
        for (family, name) in settings.unit_briefing_names().iter() {
            assert_eq!(name.singular(), format!("{family} unit"));
            assert_eq!(name.plural(), format!("{family} units"));
        }
    }

    #[test]
    fn cap_relative_power_is_clamped_and_none_is_zero() {
        let settings = load_ok(fixture());
        let power = settings.cap_relative_power();

        assert_eq!(power[AmountN::None], 0.0);
        assert_eq!(power[AmountN::VeryLow], 0.2);
        assert_eq!(power[AmountN::Low], 1.0);
        assert_eq!(power[AmountN::High], 0.0);
        assert_eq!(power[AmountN::VeryHigh], 0.8);
    }

    #[test]
    fn none_power_ignores_a_configured_key() {
        let mut files = fixture();
        edit(
            &mut files,
            ENEMY_AIR_DEFENSE_PATH,
            "RelativePower.VeryLow",
            "RelativePower.None = 90\nRelativePower.VeryLow",
        );
        let settings = load_ok(files);
        assert_eq!(settings.cap_relative_power()[AmountN::None], 0.0);
    }

    #[test]
    fn negative_distances_resolve_to_zero() {
        let settings = load_ok(fixture());

        assert_eq!(settings.cap_min_distance_from_takeoff(), 0);
        let spacing = settings.objective_spacing();
        assert_eq!(spacing[AmountN::None], 0);
        assert_eq!(spacing[AmountN::VeryLow], 0);
        assert_eq!(spacing[AmountN::Low], 0);
        assert_eq!(spacing[AmountN::Average], 10);
        assert_eq!(spacing[AmountN::VeryHigh], 30);
        assert_eq!(settings.takeoff_to_first_objective()[AmountN::High], 160);
        assert_eq!(
            settings.air_defense_min_distance_from_takeoff()[AirDefenseRange::Long],
            40
        );
    }

    #[test]
    fn five_level_amount_indexes_six_level_tables() {
        let settings = load_ok(fixture());
        let level = AmountN::from(Amount::VeryHigh);
        assert_eq!(settings.takeoff_to_first_objective()[level], 200);
    }

    #[test]
    fn reversed_interval_fails_and_degenerate_interval_loads() {
        let settings = load_ok(fixture());
        let long = settings.air_defense_distance_from_objectives()[AirDefenseRange::Long];
        assert!(long.is_degenerate());
        assert_eq!(long.min(), 20.0);
        assert_eq!(settings.cap_distance_from_objectives(), Interval::new(10.0, 30.0).unwrap());

        let mut files = fixture();
        edit(
            &mut files,
            ENEMY_AIR_DEFENSE_PATH,
            "Short.DistanceFromObjectives = 0,15",
            "Short.DistanceFromObjectives = 15,0",
        );
        match load_err(files) {
            ErrorKind::InvalidInterval { location, .. } => {
                assert_eq!(location.document, ENEMY_AIR_DEFENSE_PATH);
                assert_eq!(location.section, SECTION_ENEMY_AIR_DEFENSE_RANGE);
                assert_eq!(location.key, "Short.DistanceFromObjectives");
            }
            other => panic!("expected InvalidInterval, got {other:?}"),
        }
    }

    #[test]
    fn any_missing_key_fails_the_whole_load() {
        let removals = [
            (COMMON_SETTINGS_PATH, "CommonOgg = radio0, radio1\n"),
            (ENEMY_AIR_DEFENSE_PATH, "MinDistanceFromTakeOffLocation = -5\n"),
            (NAMES_PATH, "Initial = Takeoff\n"),
            (NAMES_PATH, "Part3 = Storm\n"),
            (OBJECTIVES_PATH, "Average.DistanceFromTakeOffLocation = 120\n"),
        ];

        for (path, line) in removals {
            let mut files = fixture();
            edit(&mut files, path, line, "");
            let err = load_err(files);
            assert!(
                matches!(
                    err,
                    ErrorKind::MalformedValue { .. } | ErrorKind::MissingCategoryMember { .. }
                ),
                "removing {line:?} from {path} gave {err:?}"
            );
        }
    }

    #[test]
    fn missing_document_fails_the_load() {
        let mut files = fixture();
        files.remove(OBJECTIVES_PATH);
        assert!(matches!(
            load_err(files),
            ErrorKind::MissingDocument { document } if document == OBJECTIVES_PATH
        ));
    }

    #[test]
    fn missing_family_is_a_missing_category_member() {
        let mut files = fixture();
        edit(&mut files, NAMES_PATH, "ShipCarrier = $N$ ShipCarrier Group\n", "");
        match load_err(files) {
            ErrorKind::MissingCategoryMember {
                category,
                member,
                location,
            } => {
                assert_eq!(category, "UnitFamily");
                assert_eq!(member, "ShipCarrier");
                assert_eq!(location.section, SECTION_UNIT_GROUP);
            }
            other => panic!("expected MissingCategoryMember, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_value_is_malformed() {
        let mut files = fixture();
        edit(
            &mut files,
            ENEMY_AIR_DEFENSE_PATH,
            "RelativePower.Average = 50",
            "RelativePower.Average = lots",
        );
        match load_err(files) {
            ErrorKind::MalformedValue { location, .. } => {
                assert_eq!(location.key, "RelativePower.Average");
            }
            other => panic!("expected MalformedValue, got {other:?}"),
        }
    }

    #[test]
    fn briefing_names_are_padded_and_truncated() {
        let mut files = fixture();
        edit(
            &mut files,
            NAMES_PATH,
            "PlaneAWACS = PlaneAWACS unit, PlaneAWACS units\n",
            "PlaneAWACS =\n",
        );
        edit(
            &mut files,
            NAMES_PATH,
            "ShipFrigate = ShipFrigate unit, ShipFrigate units\n",
            "ShipFrigate = frigate\n",
        );
        edit(
            &mut files,
            NAMES_PATH,
            "VehicleMBT = VehicleMBT unit, VehicleMBT units\n",
            "VehicleMBT = tank, tanks, armor\n",
        );

        let settings = load_ok(files);
        let names = settings.unit_briefing_names();
        assert_eq!(names[UnitFamily::PlaneAWACS], UnitBriefingName::new("", ""));
        assert_eq!(names[UnitFamily::ShipFrigate], UnitBriefingName::new("frigate", ""));
        assert_eq!(names[UnitFamily::VehicleMBT], UnitBriefingName::new("tank", "tanks"));
    }

    #[test]
    fn empty_name_lists_are_rejected() {
        let mut files = fixture();
        edit(&mut files, NAMES_PATH, "Part2 = Dawn", "Part2 = ,");
        assert!(matches!(load_err(files), ErrorKind::MalformedValue { .. }));

        let mut files = fixture();
        edit(
            &mut files,
            NAMES_PATH,
            "Objectives = Alpha, Bravo, Charlie",
            "Objectives =",
        );
        assert!(matches!(load_err(files), ErrorKind::MalformedValue { .. }));
    }

    #[test]
    fn bad_templates_are_rejected() {
        let mut files = fixture();
        edit(&mut files, NAMES_PATH, "Operation $P1$ $P2$", "Operation $P7$");
        assert!(matches!(load_err(files), ErrorKind::InvalidPlaceholder { .. }));

        let mut files = fixture();
        edit(&mut files, NAMES_PATH, "Navigation = WP$00$", "Navigation = WP");
        assert!(matches!(load_err(files), ErrorKind::InvalidPlaceholder { .. }));

        let mut files = fixture();
        edit(&mut files, NAMES_PATH, "VehicleAPC = $N$ VehicleAPC Group", "VehicleAPC = ");
        assert!(matches!(load_err(files), ErrorKind::MalformedValue { .. }));
    }

    #[test]
    fn names_are_resolved() {
        let settings = load_ok(fixture());

        assert_eq!(settings.mission_name_template().referenced_parts(), vec![1, 2]);
        assert_eq!(settings.mission_name_parts()[0], vec!["Red", "Blue"]);
        assert_eq!(settings.mission_name_parts()[3], vec!["Spear", "Hammer"]);
        assert_eq!(
            settings.unit_group_name_templates()[UnitFamily::PlaneSEAD],
            "$N$ PlaneSEAD Group"
        );

        let waypoints = settings.waypoint_names();
        assert_eq!(waypoints.final_name(), "Landing");
        assert_eq!(waypoints.initial(), "Takeoff");
        assert_eq!(waypoints.navigation().as_str(), "WP$00$");
        assert_eq!(waypoints.objectives(), ["Alpha", "Bravo", "Charlie"]);
    }

    #[test]
    fn missing_asset_is_one_warning_and_does_not_block_load() {
        let (result, sink) = load(fixture());
        let settings = result.unwrap();

        assert_eq!(settings.included_audio_assets(), ["radio0", "radio1"]);
        let warnings = sink.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("Include/Ogg/radio1.ogg"));
        assert!(sink.errors().is_empty());
        assert_eq!(settings.cap_relative_power()[AmountN::Low], 1.0);
    }

    #[test]
    fn loads_are_independent() {
        let first = load_ok(fixture());
        let mut files = fixture();
        edit(&mut files, NAMES_PATH, "Final = Landing", "Final = Home");
        let second = load_ok(files);

        assert_eq!(first.waypoint_names().final_name(), "Landing");
        assert_eq!(second.waypoint_names().final_name(), "Home");
    }

    #[test]
    fn table_can_be_read_from_many_threads() {
        let settings = load_ok(fixture());
        let settings = &settings;

        thread::scope(|scope| {
            for level in AmountN::ALL {
                scope.spawn(move || {
                    let info = &settings.air_defense_presence()[*level];
                    let expected = (level.ordinal() * 20).min(100) as f64 / 100.0;
                    assert_eq!(info.embedded_chance(), expected);
                });
            }
        });
    }

    #[test]
    fn loads_from_a_virtual_filesystem() {
        use std::io::Write;

        use vfs::{MemoryFS, VfsPath};

        let root = VfsPath::new(MemoryFS::new());
        root.join("Database").unwrap().create_dir_all().unwrap();
        root.join("Include/Ogg").unwrap().create_dir_all().unwrap();
        for (path, text) in fixture() {
            let mut file = root.join(path).unwrap().create_file().unwrap();
            file.write_all(text.as_bytes()).unwrap();
        }

        let sink = CollectingSink::new();
        let settings = CommonSettings::load(&root, &sink).unwrap();
        assert_eq!(settings.waypoint_names().objectives().len(), 3);
        assert_eq!(sink.warning_count(), 1);
    }
}
