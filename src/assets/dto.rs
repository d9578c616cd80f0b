use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::OffsetDateTime;

use crate::assets::repo_types::Asset;

/// A numeric form field, sent either as text or as a JSON number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

lazy_static! {
    static ref INTEGER_PREFIX: Regex = Regex::new(r"^\s*[+-]?\d+").unwrap();
    static ref DECIMAL_PREFIX: Regex =
        Regex::new(r"^\s*[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap();
}

/// Reads the longest leading match of `prefix`, ignoring whatever follows it.
fn leading_number(text: &str, prefix: &Regex) -> Option<f64> {
    prefix
        .find(text)
        .and_then(|m| m.as_str().trim().parse::<f64>().ok())
}

impl FieldValue {
    fn number(&self, prefix: &Regex) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => leading_number(s, prefix),
        }
        .filter(|n| n.is_finite())
    }

    /// Whole number read from the leading digits (`"2020abc"` is 2020,
    /// `"1e3"` is 1); zero and garbage count as missing.
    pub fn as_year(&self) -> Option<i32> {
        self.number(&INTEGER_PREFIX)
            .map(|n| n.trunc())
            .filter(|n| *n != 0.0 && n.abs() <= i32::MAX as f64)
            .map(|n| n as i32)
    }

    /// Amount read from the leading decimal (`"12.5kg"` is 12.5); zero and
    /// garbage count as missing.
    pub fn as_amount(&self) -> Option<f64> {
        self.number(&DECIMAL_PREFIX).filter(|n| *n != 0.0)
    }
}

/// Raw add-asset form, before sanitizing and validation.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewAssetForm {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub custom_type: String,
    pub year_purchased: Option<FieldValue>,
    pub purchase_price: Option<FieldValue>,
    pub year_sold: Option<FieldValue>,
    pub sold_price: Option<FieldValue>,
    pub quality: String,
}

/// Search box and type dropdown.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AssetFilter {
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
}

impl AssetFilter {
    pub fn is_active(&self) -> bool {
        let set = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        set(&self.search) || set(&self.asset_type)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteParams {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    Cancelled,
}

/// Read-only projection shown in the details view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDetails {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub file_type: String,
    pub quality: String,
    pub quality_color: String,
    pub year_purchased: String,
    pub purchase_price: String,
    pub year_sold: String,
    pub sold_price: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Asset> for AssetDetails {
    fn from(a: &Asset) -> Self {
        let description = if a.description.is_empty() {
            "No description provided.".to_string()
        } else {
            a.description.clone()
        };
        Self {
            id: a.id,
            name: a.name.clone(),
            description,
            file_type: a.file_type.clone(),
            quality: a.quality.label().to_string(),
            quality_color: a.quality.color().to_string(),
            year_purchased: a.year_purchased.to_string(),
            purchase_price: format_price(a.purchase_price),
            year_sold: a
                .year_sold
                .map(|y| y.to_string())
                .unwrap_or_else(|| "Not sold yet".into()),
            sold_price: a
                .sold_price
                .map(format_price)
                .unwrap_or_else(|| "Not sold yet".into()),
            created_at: format_timestamp(a.created_at),
            updated_at: format_timestamp(a.updated_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_assets: usize,
    pub total_value: f64,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_updated: Option<OffsetDateTime>,
}

pub fn format_price(value: f64) -> String {
    format!("${value:.2}")
}

pub fn format_timestamp(ts: OffsetDateTime) -> String {
    ts.format(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second]"
    ))
    .unwrap_or_else(|_| "Not available".to_string())
}
