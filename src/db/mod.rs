/// Composite air-defense presence records
pub mod air_defense;
/// The resolved table and its `load` operation
pub mod common;
/// Section and key names
pub mod keys;
/// Name template validation
pub mod names;
/// Value types held by the table
pub mod types;

use std::fmt::Display;

pub use air_defense::AirDefenseInfo;
pub use common::CommonSettings;
pub use names::{MISSION_NAME_PART_COUNT, MissionNameTemplate, NavigationTemplate};
pub use types::{Interval, UnitBriefingName, WaypointNames};

use crate::categories::Category;
use crate::data::settings::{FromSettingValue, SettingsDocument};
use crate::error::{ErrorKind, IResult};

/// Fails with [`ErrorKind::MissingCategoryMember`] unless `key` is configured
/// for `member`.
pub(crate) fn require_member<C: Category>(
    doc: &SettingsDocument,
    section: &str,
    key: &str,
    member: C,
) -> IResult<()> {
    if doc.contains(section, key) {
        Ok(())
    } else {
        Err(ErrorKind::MissingCategoryMember {
            category: C::CATEGORY_NAME,
            member: member.name(),
            location: doc.location(section, key),
        })
    }
}

/// A distance in whole units. Negative values resolve to 0.
pub(crate) fn read_distance(doc: &SettingsDocument, section: &str, key: &str) -> IResult<u32> {
    let raw: i32 = doc.get_scalar(section, key)?;
    Ok(raw.max(0).unsigned_abs())
}

/// A percentage clamped to `[0, 100]` and normalized to `[0.0, 1.0]`.
pub(crate) fn read_percentage(doc: &SettingsDocument, section: &str, key: &str) -> IResult<f64> {
    let raw: i64 = doc.get_scalar(section, key)?;
    Ok(raw.clamp(0, 100) as f64 / 100.0)
}

/// A `min,max` pair, rejected with [`ErrorKind::InvalidInterval`] when
/// `min > max`.
pub(crate) fn read_interval<T>(
    doc: &SettingsDocument,
    section: &str,
    key: &str,
) -> IResult<Interval<T>>
where
    T: FromSettingValue + PartialOrd + Copy + Display,
{
    let (min, max): (T, T) = doc.get_scalar(section, key)?;
    Interval::new(min, max).ok_or_else(|| ErrorKind::InvalidInterval {
        location: doc.location(section, key),
        min: min.to_string(),
        max: max.to_string(),
    })
}

/// A distance interval. Bounds are validated first, then negative bounds
/// resolve to 0.
pub(crate) fn read_distance_interval(
    doc: &SettingsDocument,
    section: &str,
    key: &str,
) -> IResult<Interval<f64>> {
    let interval: Interval<f64> = read_interval(doc, section, key)?;
    Interval::new(interval.min().max(0.0), interval.max().max(0.0)).ok_or_else(|| {
        ErrorKind::InvalidInterval {
            location: doc.location(section, key),
            min: interval.min().to_string(),
            max: interval.max().to_string(),
        }
    })
}
