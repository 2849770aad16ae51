//! Structural validation of name templates.
//!
//! Templates stay opaque strings here. Expansion happens downstream; this
//! module only checks that every `$...$` sentinel is well formed.

use std::fmt;

use crate::data::parser_utils::{TemplateToken, template_tokens};
use crate::error::{ErrorKind, IResult, Location};

/// Number of random parts a mission name is assembled from (`$P1$..$P4$`).
pub const MISSION_NAME_PART_COUNT: usize = 4;

fn invalid(location: &Location, detail: impl Into<String>) -> ErrorKind {
    ErrorKind::InvalidPlaceholder {
        location: location.clone(),
        detail: detail.into(),
    }
}

/// Tokenize `text`, rejecting a `$` that is never closed.
fn tokenize<'a>(text: &'a str, location: &Location) -> IResult<Vec<TemplateToken<'a>>> {
    let mut input = text;
    let tokens = template_tokens(&mut input)
        .map_err(|_| invalid(location, format!("'{text}' could not be tokenized")))?;
    if !input.is_empty() {
        return Err(invalid(location, format!("unterminated `$` in '{text}'")));
    }
    Ok(tokens)
}

fn placeholders<'a>(tokens: &[TemplateToken<'a>]) -> impl Iterator<Item = &'a str> {
    tokens.iter().filter_map(|token| match token {
        TemplateToken::Placeholder(body) => Some(*body),
        TemplateToken::Literal(_) => None,
    })
}

/// 1-based index of the part a `P{n}` placeholder refers to.
fn mission_part_index(body: &str) -> Option<usize> {
    (1..=MISSION_NAME_PART_COUNT).find(|index| body == format!("P{index}"))
}

fn is_number_sentinel(body: &str) -> bool {
    !body.is_empty() && body.bytes().all(|b| b == b'0')
}

/// Mission name template such as `Operation $P1$ $P2$`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct MissionNameTemplate(String);

impl MissionNameTemplate {
    pub fn parse(text: &str, location: &Location) -> IResult<Self> {
        let tokens = tokenize(text, location)?;
        let mut found = false;
        for body in placeholders(&tokens) {
            if mission_part_index(body).is_none() {
                return Err(invalid(
                    location,
                    format!("`${body}$` is not one of $P1$..$P{MISSION_NAME_PART_COUNT}$"),
                ));
            }
            found = true;
        }

        if !found {
            return Err(invalid(location, "template references no name part"));
        }

        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 1-based part indices referenced by the template, in order of appearance.
    pub fn referenced_parts(&self) -> Vec<usize> {
        let mut input = self.0.as_str();
        let tokens = template_tokens(&mut input).unwrap_or_default();
        placeholders(&tokens).filter_map(mission_part_index).collect()
    }
}

impl fmt::Display for MissionNameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Navigation waypoint name such as `WP$00$`, where the run of zeros sets the
/// zero-padded width of the waypoint number.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct NavigationTemplate(String);

impl NavigationTemplate {
    pub fn parse(text: &str, location: &Location) -> IResult<Self> {
        let tokens = tokenize(text, location)?;
        let mut found = false;
        for body in placeholders(&tokens) {
            if !is_number_sentinel(body) {
                return Err(invalid(
                    location,
                    format!("`${body}$` is not a number sentinel such as $0$ or $00$"),
                ));
            }
            found = true;
        }

        if !found {
            return Err(invalid(location, "template has no waypoint number sentinel"));
        }

        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Zero-padding width of each number sentinel, in order of appearance.
    pub fn number_widths(&self) -> Vec<usize> {
        let mut input = self.0.as_str();
        let tokens = template_tokens(&mut input).unwrap_or_default();
        placeholders(&tokens).map(str::len).collect()
    }
}

impl fmt::Display for NavigationTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unit group name patterns are free-form; they only need to say something.
pub fn validate_unit_group_template(text: String, location: &Location) -> IResult<String> {
    if text.trim().is_empty() {
        return Err(ErrorKind::MalformedValue {
            location: location.clone(),
            detail: "unit group name template is empty".to_string(),
        });
    }
    Ok(text)
}
