//! Lenient decoding of provider feed documents.
//!
//! The wire format is JSON with a top-level `providers` array. Record
//! decoding is tolerant: latitude/longitude accept numbers or numeric
//! strings, and missing, unparseable, or out-of-range coordinates yield
//! `coordinate: None` with the record retained. Only documents missing `id`
//! or `name` are skipped, since they can be neither identified nor rendered.
//! Unknown fields are ignored.

use serde::Deserialize;

use vicinity_core::{Coordinate, ProviderRecord};

use crate::error::FeedError;

#[derive(Debug, Deserialize)]
struct ProvidersDocument {
    providers: Vec<serde_json::Value>,
}

/// Decodes a feed response body into provider records.
///
/// `context` names the source (URL or file path) for error messages.
///
/// # Errors
///
/// Returns [`FeedError::Deserialize`] when the body is not JSON or has no
/// `providers` array. Individual malformed records are skipped with a
/// warning, never an error.
pub fn decode_providers(body: &str, context: &str) -> Result<Vec<ProviderRecord>, FeedError> {
    let document: ProvidersDocument =
        serde_json::from_str(body).map_err(|e| FeedError::Deserialize {
            context: context.to_owned(),
            source: e,
        })?;

    Ok(document
        .providers
        .iter()
        .filter_map(|raw| {
            let record = decode_record(raw);
            if record.is_none() {
                tracing::warn!(context, "skipping provider document without id or name");
            }
            record
        })
        .collect())
}

/// Decodes one provider document, or `None` when it lacks an id or a
/// non-empty name.
fn decode_record(raw: &serde_json::Value) -> Option<ProviderRecord> {
    let id = id_field(raw)?;
    let name = raw.get("name")?.as_str()?.trim().to_string();
    if name.is_empty() {
        return None;
    }

    let coordinate = match (
        number_or_string(raw, "latitude"),
        number_or_string(raw, "longitude"),
    ) {
        (Some(latitude), Some(longitude)) => {
            let coordinate = Coordinate::new(latitude, longitude);
            coordinate.is_valid().then_some(coordinate)
        }
        _ => None,
    };

    Some(ProviderRecord {
        id,
        name,
        category: raw
            .get("category")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_string(),
        coordinate,
        address: string_field(raw, "address"),
        phone: string_field(raw, "phone"),
        rating: raw.get("rating").and_then(serde_json::Value::as_f64),
    })
}

/// Accepts string ids as-is and stringifies numeric ids.
fn id_field(value: &serde_json::Value) -> Option<String> {
    value.get("id").and_then(|v| {
        v.as_str()
            .map(str::to_string)
            .or_else(|| v.is_number().then(|| v.to_string()))
    })
}

fn string_field(value: &serde_json::Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}

fn number_or_string(value: &serde_json::Value, key: &str) -> Option<f64> {
    value.get(key).and_then(|v| {
        v.as_f64()
            .or_else(|| v.as_str().and_then(|s| s.parse().ok()))
    })
}
