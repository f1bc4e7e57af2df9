//! Catalog core types.
//!
//! A [`Record`] is one product as the remote catalog describes it. Only the
//! four fields the table shows are kept; everything else in the source
//! document is ignored on decode.

#![forbid(unsafe_code)]

use serde::{Deserialize, Deserializer, Serialize};

pub mod columns;

/// One product entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Record {
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub brand: String,
    /// `None` when the source omitted the field or sent something non-numeric.
    #[serde(default, deserialize_with = "lenient_number")]
    pub stock: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,
}

impl Record {
    pub fn new(description: impl Into<String>, brand: impl Into<String>, stock: f64, price: f64) -> Self {
        Self {
            description: description.into(),
            brand: brand.into(),
            stock: Some(stock),
            price: Some(price),
        }
    }
}

/// The document served by the catalog endpoint: `{"products": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<Record>,
}

pub mod prelude {
    pub use super::columns::{catalog_columns, ColumnKind, ColumnSpec};
    pub use super::{render_number, Catalog, Record};
}

/// Render a number the way the source JSON wrote it: integral values carry
/// no fractional part (`549`, not `549.0`).
pub fn render_number(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

fn lenient_text<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let v = serde_json::Value::deserialize(de)?;
    Ok(match v {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_number<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = serde_json::Value::deserialize(de)?;
    let n = match v {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(n.filter(|x| !x.is_nan()))
}
