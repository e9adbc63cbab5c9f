use crate::domain::model::MappingEntry;
use crate::utils::error::{RemapError, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingSummary {
    pub original_values: OriginalValues,
    pub formatted_values: FormattedValues,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OriginalValues {
    pub primer_valor: i64,
    pub segundo_valor: i64,
    pub suma_cla_ubicacion: i64,
    pub producto_cla_ubicacion: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedValues {
    #[serde(rename = "SumK")]
    pub sum_k: f64,
    #[serde(rename = "ProductK")]
    pub product_k: f64,
}

/// Sum and product of the first two internal location codes, plus both
/// values scaled down by 1000.
pub fn summarize(mapping: &[MappingEntry]) -> Result<MappingSummary> {
    let [first, second, ..] = mapping else {
        return Err(RemapError::validation(format!(
            "mapping must contain at least 2 entries, found {}",
            mapping.len()
        )));
    };

    let primer_valor = parse_code(first)?;
    let segundo_valor = parse_code(second)?;

    let suma = primer_valor
        .checked_add(segundo_valor)
        .ok_or_else(|| RemapError::validation("sum of location codes overflows"))?;
    let producto = primer_valor
        .checked_mul(segundo_valor)
        .ok_or_else(|| RemapError::validation("product of location codes overflows"))?;

    tracing::debug!("Summary: sum={} product={}", suma, producto);

    Ok(MappingSummary {
        original_values: OriginalValues {
            primer_valor,
            segundo_valor,
            suma_cla_ubicacion: suma,
            producto_cla_ubicacion: producto,
        },
        formatted_values: FormattedValues {
            sum_k: suma as f64 / 1000.0,
            product_k: producto as f64 / 1000.0,
        },
    })
}

fn parse_code(entry: &MappingEntry) -> Result<i64> {
    entry.internal_code.trim().parse().map_err(|_| {
        RemapError::validation(format!(
            "ClaUbicacion '{}' is not an integer",
            entry.internal_code
        ))
    })
}
