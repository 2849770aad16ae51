//! Reader for the sectioned key/value settings documents.
//!
//! Documents look like this:
//!
//! ```ini
//! ; comment
//! [EnemyCombatAirPatrols]
//! DistanceFromObjectives = 10,30
//! RelativePower.Low = 50
//! ```
//!
//! The reader only converts text into typed values. Range checks and
//! cross-key validation belong to the table builder in [`crate::db`].

use std::collections::HashMap;

use itertools::Itertools;

use crate::data::DataFileLoader;
use crate::data::parser_utils::{SettingsLine, parse_settings_line};
use crate::error::{ErrorKind, IResult, Location};

const SEQUENCE_SEPARATOR: char = ',';

/// Conversion from the raw text of a setting into a typed value.
///
/// Implementations return a short human-readable reason on failure; the caller
/// attaches the document/section/key.
pub trait FromSettingValue: Sized {
    fn from_setting(raw: &str) -> Result<Self, String>;
}

macro_rules! impl_from_setting_via_parse {
    ($($t:ty),+) => {
        $(
            impl FromSettingValue for $t {
                fn from_setting(raw: &str) -> Result<Self, String> {
                    raw.trim()
                        .parse::<$t>()
                        .map_err(|e| format!("'{raw}' is not a valid {}: {e}", stringify!($t)))
                }
            }
        )+
    };
}

impl_from_setting_via_parse!(i32, i64, u32);

impl FromSettingValue for f64 {
    fn from_setting(raw: &str) -> Result<Self, String> {
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("'{raw}' is not a valid number: {e}"))?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(format!("'{raw}' is not a finite number"))
        }
    }
}

impl FromSettingValue for String {
    fn from_setting(raw: &str) -> Result<Self, String> {
        Ok(raw.to_string())
    }
}

/// A pair written as two comma-separated values, e.g. `10,30`.
impl<T: FromSettingValue> FromSettingValue for (T, T) {
    fn from_setting(raw: &str) -> Result<Self, String> {
        let (first, second) = raw
            .split(SEQUENCE_SEPARATOR)
            .collect_tuple()
            .ok_or_else(|| format!("'{raw}' is not a pair of two comma-separated values"))?;
        Ok((T::from_setting(first)?, T::from_setting(second)?))
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// A parsed settings document.
///
/// Section and key lookups are case-insensitive. When a key appears twice in
/// the same section the later value wins.
#[derive(Debug, Clone)]
pub struct SettingsDocument {
    name: String,
    sections: HashMap<String, HashMap<String, String>>,
}

impl SettingsDocument {
    /// Read and parse the document at `path` from `loader`.
    pub fn open(loader: &dyn DataFileLoader, path: &str) -> IResult<Self> {
        let data = loader.get(path)?;
        let text = String::from_utf8(data.into_owned())?;
        Self::parse(path, &text)
    }

    /// Parse document text. `name` is only used in error messages.
    pub fn parse(name: &str, text: &str) -> IResult<Self> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current: Option<String> = None;

        for (index, raw_line) in text.lines().enumerate() {
            let malformed = |detail: &str| ErrorKind::MalformedDocument {
                document: name.to_string(),
                line: index + 1,
                detail: detail.to_string(),
            };

            let mut input = raw_line.trim();
            let line = parse_settings_line(&mut input)
                .map_err(|_| malformed("expected `[Section]`, `Key = Value`, or a comment"))?;

            match line {
                SettingsLine::Blank | SettingsLine::Comment => {}
                SettingsLine::Section(section) => {
                    let section = normalize(section);
                    sections.entry(section.clone()).or_default();
                    current = Some(section);
                }
                SettingsLine::Entry { key, value } => {
                    let section = current
                        .as_ref()
                        .ok_or_else(|| malformed("key/value pair appears before any section"))?;
                    sections
                        .entry(section.clone())
                        .or_default()
                        .insert(normalize(key), strip_quotes(value).to_string());
                }
            }
        }

        Ok(Self {
            name: name.to_string(),
            sections,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self, section: &str, key: &str) -> Location {
        Location::new(self.name.as_str(), section, key)
    }

    fn raw(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(&normalize(section))
            .and_then(|entries| entries.get(&normalize(key)))
            .map(String::as_str)
    }

    fn require(&self, section: &str, key: &str) -> IResult<&str> {
        self.raw(section, key).ok_or_else(|| ErrorKind::MalformedValue {
            location: self.location(section, key),
            detail: "key is missing".to_string(),
        })
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(&normalize(section))
    }

    pub fn contains(&self, section: &str, key: &str) -> bool {
        self.raw(section, key).is_some()
    }

    /// Read a single value. Fails with [`ErrorKind::MalformedValue`] if the key
    /// is absent or its text cannot be converted.
    pub fn get_scalar<T: FromSettingValue>(&self, section: &str, key: &str) -> IResult<T> {
        let raw = self.require(section, key)?;
        T::from_setting(raw).map_err(|detail| ErrorKind::MalformedValue {
            location: self.location(section, key),
            detail,
        })
    }

    /// Read a comma-separated list. Entries are trimmed and empty entries are
    /// dropped, so an empty value yields an empty list. An absent key is an
    /// error, not an empty list.
    pub fn get_sequence<T: FromSettingValue>(&self, section: &str, key: &str) -> IResult<Vec<T>> {
        let raw = self.require(section, key)?;
        raw.split(SEQUENCE_SEPARATOR)
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                T::from_setting(entry).map_err(|detail| ErrorKind::MalformedValue {
                    location: self.location(section, key),
                    detail,
                })
            })
            .collect()
    }
}
