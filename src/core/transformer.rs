use crate::domain::model::{MappingEntry, RemapOutcome, ShipmentRequest};
use crate::utils::error::{Payload, RemapError, Result};

/// Header line printed ahead of the rendered request.
pub const RESULT_HEADER: &str = "Resultado final:";

/// Parses raw payload bytes; invalid UTF-8 is reported like any other
/// malformed JSON.
pub fn parse_request(raw: impl AsRef<[u8]>) -> Result<ShipmentRequest> {
    serde_json::from_slice(raw.as_ref()).map_err(|e| RemapError::parse(Payload::Request, e))
}

pub fn parse_mapping(raw: impl AsRef<[u8]>) -> Result<Vec<MappingEntry>> {
    serde_json::from_slice(raw.as_ref()).map_err(|e| RemapError::parse(Payload::Mapping, e))
}

/// Replaces the first detail line's origin with the internal code of the
/// first mapping entry whose external code matches it.
///
/// A request without detail lines is rejected before any lookup. No match
/// (or an empty mapping) leaves the request untouched.
pub fn remap_origin(request: &mut ShipmentRequest, mapping: &[MappingEntry]) -> Result<RemapOutcome> {
    let line = request
        .detail
        .first_mut()
        .ok_or_else(|| RemapError::validation("request has no detail lines"))?;

    let found = mapping
        .iter()
        .find(|entry| entry.external_code == line.origin);

    match found {
        Some(entry) => {
            let from = std::mem::replace(&mut line.origin, entry.internal_code.clone());
            tracing::debug!("Origin {} mapped to {}", from, line.origin);
            Ok(RemapOutcome::Replaced {
                from,
                to: line.origin.clone(),
            })
        }
        None => {
            tracing::debug!("No mapping entry for origin {}", line.origin);
            Ok(RemapOutcome::Unchanged {
                origin: line.origin.clone(),
            })
        }
    }
}

/// Pretty-printed output document, two-space indentation.
pub fn render(request: &ShipmentRequest) -> Result<String> {
    request.to_pretty_json()
}

/// Final stdout text: the header line, then the rendered document.
pub fn format_output(rendered: &str) -> String {
    format!("{}\n{}", RESULT_HEADER, rendered)
}
