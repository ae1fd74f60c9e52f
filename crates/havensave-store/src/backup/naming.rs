//! Archive file names: `{YYYYMMDD}_{N}-savegames[-v{version}].zip`.

use chrono::NaiveDate;

pub const ARCHIVE_MARKER: &str = "-savegames";
pub const ARCHIVE_EXTENSION: &str = ".zip";
const VERSION_PREFIX: &str = "-v";
const DATE_FORMAT: &str = "%Y%m%d";

/// Fields encoded in an archive name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub date: NaiveDate,
    pub sequence: u32,
    pub version_tag: Option<String>,
}

pub fn archive_name(date: NaiveDate, sequence: u32, version_tag: Option<&str>) -> String {
    let version = version_tag
        .map(sanitize_version)
        .filter(|v| !v.is_empty())
        .map(|v| format!("{}{}", VERSION_PREFIX, v))
        .unwrap_or_default();
    format!(
        "{}_{}{}{}{}",
        date.format(DATE_FORMAT),
        sequence,
        ARCHIVE_MARKER,
        version,
        ARCHIVE_EXTENSION
    )
}

/// Keep a version tag file-name safe
pub fn sanitize_version(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Parse an archive file name; anything that does not match yields `None`
pub fn parse_archive_name(name: &str) -> Option<ParsedName> {
    let stem = name.strip_suffix(ARCHIVE_EXTENSION)?;
    let (date_part, rest) = stem.split_once('_')?;
    if date_part.len() != 8 || !date_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let date = NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()?;

    let marker = rest.find(ARCHIVE_MARKER)?;
    let seq_part = &rest[..marker];
    if seq_part.is_empty() || !seq_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let sequence: u32 = seq_part.parse().ok()?;
    if sequence == 0 {
        return None;
    }

    let tail = &rest[marker + ARCHIVE_MARKER.len()..];
    let version_tag = if tail.is_empty() {
        None
    } else {
        let version = tail.strip_prefix(VERSION_PREFIX)?;
        if version.is_empty() {
            return None;
        }
        Some(version.to_string())
    };

    Some(ParsedName {
        date,
        sequence,
        version_tag,
    })
}
