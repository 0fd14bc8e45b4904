//! Page paths and route segment parsing.

use compendium_model::RecordKind;

use crate::error::{CompendiumError, Result};

pub fn list_path(kind: RecordKind) -> String {
    format!("/{}", kind.segment())
}

pub fn detail_path(kind: RecordKind, id: u32) -> String {
    format!("/{}/{id}", kind.segment())
}

/// Parse the `{id}` segment of a detail route.
///
/// Anything that is not a plain non-negative integer is an invalid route,
/// which the detail view treats as not found without fetching.
pub fn parse_record_id(segment: &str) -> Result<u32> {
    let trimmed = segment.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CompendiumError::InvalidRoute(segment.to_string()));
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| CompendiumError::InvalidRoute(segment.to_string()))
}

/// Split `/monsters/12` into its kind and raw id segment.
pub fn parse_detail_path(path: &str) -> Result<(RecordKind, u32)> {
    let mut segments = path.trim_matches('/').split('/');
    let (Some(kind), Some(id), None) =
        (segments.next(), segments.next(), segments.next())
    else {
        return Err(CompendiumError::InvalidRoute(path.to_string()));
    };
    let kind = kind
        .parse::<RecordKind>()
        .ok()
        .filter(|parsed| parsed.segment() == kind)
        .ok_or_else(|| CompendiumError::InvalidRoute(path.to_string()))?;
    Ok((kind, parse_record_id(id)?))
}
