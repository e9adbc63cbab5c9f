use crate::utils::error::Result;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRequest {
    pub destination: String,
    pub shipping_type: String,
    /// Missing or `null` reads as empty so the remap can reject it.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub detail: Vec<DetailLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailLine {
    pub origin: String,
    pub item: String,
    pub product_herarchy: String,
    #[serde(serialize_with = "serialize_decimal")]
    pub quantity_weight: f64,
    #[serde(serialize_with = "serialize_decimal")]
    pub volume: f64,
    pub oum: String,
}

/// One row of the location table: partner (SAP) code to internal code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    #[serde(rename = "ClaUbicacion")]
    pub internal_code: String,
    #[serde(rename = "ClaSapUbicacion")]
    pub external_code: String,
    #[serde(rename = "Descripcion")]
    pub description: String,
}

impl MappingEntry {
    pub fn new(
        internal_code: impl Into<String>,
        external_code: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            internal_code: internal_code.into(),
            external_code: external_code.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemapOutcome {
    Replaced { from: String, to: String },
    Unchanged { origin: String },
}

/// Parsed inputs for a single run.
#[derive(Debug, Clone)]
pub struct Payloads {
    pub request: ShipmentRequest,
    pub mapping: Vec<MappingEntry>,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub request: ShipmentRequest,
    pub outcome: RemapOutcome,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<DetailLine>, D::Error> {
    Ok(Option::<Vec<DetailLine>>::deserialize(deserializer)?.unwrap_or_default())
}

// Whole numbers are written as integers so `9` stays `9` instead of `9.0`.
fn serialize_decimal<S: Serializer>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.007_199_254_740_992e15 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

impl ShipmentRequest {
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
