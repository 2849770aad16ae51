//! Shared winnow-based parsing utilities used by the settings reader and the
//! name template validator.

use winnow::Parser;
use winnow::combinator::{alt, delimited, eof, preceded, repeat, separated_pair, terminated};
use winnow::error::ContextError;
use winnow::token::{one_of, rest, take_till};

/// Common result type for winnow parsers.
pub type WResult<T> = Result<T, winnow::error::ErrMode<ContextError>>;

/// One line of a settings document, already trimmed of surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsLine<'a> {
    Blank,
    Comment,
    Section(&'a str),
    Entry { key: &'a str, value: &'a str },
}

fn section_header<'a>(input: &mut &'a str) -> WResult<&'a str> {
    terminated(delimited('[', take_till(1.., ']'), ']'), eof)
        .map(str::trim)
        .parse_next(input)
}

fn entry<'a>(input: &mut &'a str) -> WResult<(&'a str, &'a str)> {
    separated_pair(take_till(1.., '='), '=', rest)
        .map(|(key, value): (&str, &str)| (key.trim(), value.trim()))
        .parse_next(input)
}

/// Classify a single trimmed line.
pub fn parse_settings_line<'a>(input: &mut &'a str) -> WResult<SettingsLine<'a>> {
    alt((
        eof.value(SettingsLine::Blank),
        preceded(one_of([';', '#']), rest).value(SettingsLine::Comment),
        section_header.map(SettingsLine::Section),
        entry.map(|(key, value)| SettingsLine::Entry { key, value }),
    ))
    .parse_next(input)
}

/// A piece of a template string: either literal text or the body of a
/// `$...$` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateToken<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

fn placeholder<'a>(input: &mut &'a str) -> WResult<&'a str> {
    delimited('$', take_till(0.., '$'), '$').parse_next(input)
}

fn literal<'a>(input: &mut &'a str) -> WResult<&'a str> {
    take_till(1.., '$').parse_next(input)
}

/// Split a template into tokens. Parsing stops at an unterminated `$`, leaving
/// it in `input`.
pub fn template_tokens<'a>(input: &mut &'a str) -> WResult<Vec<TemplateToken<'a>>> {
    repeat(
        0..,
        alt((
            placeholder.map(TemplateToken::Placeholder),
            literal.map(TemplateToken::Literal),
        )),
    )
    .parse_next(input)
}
