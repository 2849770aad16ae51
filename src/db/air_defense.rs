use bon::Builder;
use tracing::trace;

use crate::categories::{AirDefenseRange, AmountN};
use crate::category_map::CategoryMap;
use crate::data::settings::SettingsDocument;
use crate::db::keys::{self, SECTION_AIR_DEFENSE};
use crate::db::types::Interval;
use crate::db::{read_interval, read_percentage, require_member};
use crate::error::IResult;

/// Surface-to-air defense density for one amount level.
///
/// Records are only produced while loading a [`crate::db::CommonSettings`];
/// there is no public constructor:
///
/// ```compile_fail
/// let _ = sortiedb::db::AirDefenseInfo::builder();
/// ```
#[derive(Clone, Debug, PartialEq, Builder)]
#[builder(start_fn(vis = "pub(crate)"), builder_type(vis = "pub(crate)"))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AirDefenseInfo {
    /// Chance, in `[0.0, 1.0]`, that a ground objective carries its own defenses.
    embedded_chance: f64,
    embedded_unit_count: Interval<u32>,
    groups_in_area: CategoryMap<AirDefenseRange, Interval<u32>>,
}

impl AirDefenseInfo {
    /// Read the record for `level` from the `[AirDefense]` section.
    pub(crate) fn load(doc: &SettingsDocument, level: AmountN) -> IResult<Self> {
        trace!("reading air defense presence for {level}");

        let chance_key = keys::embedded_chance(level);
        require_member(doc, SECTION_AIR_DEFENSE, &chance_key, level)?;

        let unit_count_key = keys::embedded_unit_count(level);
        require_member(doc, SECTION_AIR_DEFENSE, &unit_count_key, level)?;

        let groups_in_area = CategoryMap::try_from_fn(|range| {
            let key = keys::groups_in_area(level, range);
            require_member(doc, SECTION_AIR_DEFENSE, &key, range)?;
            read_interval(doc, SECTION_AIR_DEFENSE, &key)
        })?;

        Ok(AirDefenseInfo::builder()
            .embedded_chance(read_percentage(doc, SECTION_AIR_DEFENSE, &chance_key)?)
            .embedded_unit_count(read_interval(doc, SECTION_AIR_DEFENSE, &unit_count_key)?)
            .groups_in_area(groups_in_area)
            .build())
    }

    pub fn embedded_chance(&self) -> f64 {
        self.embedded_chance
    }

    pub fn embedded_unit_count(&self) -> Interval<u32> {
        self.embedded_unit_count
    }

    /// Number of defense groups of each range tier placed around objectives.
    pub fn groups_in_area(&self, range: AirDefenseRange) -> Interval<u32> {
        self.groups_in_area[range]
    }

    pub fn all_groups_in_area(&self) -> &CategoryMap<AirDefenseRange, Interval<u32>> {
        &self.groups_in_area
    }
}
