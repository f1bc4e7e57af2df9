//! Catalog columns.
//!
//! This module provides:
//! - The four product fields as a closed [`ColumnKind`]
//! - Column specs (labels, widths) for the table header
//! - Field accessors used by search (text) and sort (text or number)

#![forbid(unsafe_code)]

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::{render_number, Record};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Description,
    Brand,
    Stock,
    Price,
}

impl ColumnKind {
    /// Every searchable field, in header order.
    pub const ALL: [ColumnKind; 4] = [
        ColumnKind::Description,
        ColumnKind::Brand,
        ColumnKind::Stock,
        ColumnKind::Price,
    ];

    /// Field name as it appears in the source document.
    pub fn field_name(self) -> &'static str {
        match self {
            ColumnKind::Description => "description",
            ColumnKind::Brand => "brand",
            ColumnKind::Stock => "stock",
            ColumnKind::Price => "price",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnKind::Stock | ColumnKind::Price)
    }

    /// Numeric value of the field; `None` for text fields and absent numbers.
    pub fn number(self, r: &Record) -> Option<f64> {
        match self {
            ColumnKind::Stock => r.stock,
            ColumnKind::Price => r.price,
            _ => None,
        }
    }

    /// Field rendered as text. Absent numbers render empty.
    pub fn text(self, r: &Record) -> Cow<'_, str> {
        match self {
            ColumnKind::Description => Cow::Borrowed(r.description.as_str()),
            ColumnKind::Brand => Cow::Borrowed(r.brand.as_str()),
            ColumnKind::Stock | ColumnKind::Price => match self.number(r) {
                Some(v) => Cow::Owned(render_number(v)),
                None => Cow::Borrowed(""),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColumnSpec {
    pub kind: ColumnKind,
    pub label: &'static str,
    pub width: f32,
}

fn col(kind: ColumnKind, label: &'static str, width: f32) -> ColumnSpec {
    ColumnSpec { kind, label, width }
}

/// Header set for the product table.
pub fn catalog_columns() -> Vec<ColumnSpec> {
    vec![
        col(ColumnKind::Description, "Description", 420.0),
        col(ColumnKind::Brand, "Brand", 160.0),
        col(ColumnKind::Stock, "Stock", 80.0),
        col(ColumnKind::Price, "Price", 90.0),
    ]
}
