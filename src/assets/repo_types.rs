use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Type kinds offered by the add form; anything else arrives through `other`.
pub const PRESET_TYPES: &[&str] = &["document", "image", "video", "audio", "archive"];
pub const OTHER_TYPE: &str = "other";

/// Condition rating attached to every asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Excellent,
    Good,
    Decent,
    Poor,
}

impl Quality {
    pub fn as_str(self) -> &'static str {
        match self {
            Quality::Excellent => "excellent",
            Quality::Good => "good",
            Quality::Decent => "decent",
            Quality::Poor => "poor",
        }
    }

    /// Capitalised form shown on badges.
    pub fn label(self) -> &'static str {
        match self {
            Quality::Excellent => "Excellent",
            Quality::Good => "Good",
            Quality::Decent => "Decent",
            Quality::Poor => "Poor",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Quality::Excellent => "#10b981",
            Quality::Good => "#3b82f6",
            Quality::Decent => "#f59e0b",
            Quality::Poor => "#ef4444",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quality {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "excellent" => Ok(Quality::Excellent),
            "good" => Ok(Quality::Good),
            "decent" => Ok(Quality::Decent),
            "poor" => Ok(Quality::Poor),
            _ => Err(()),
        }
    }
}

/// Asset record as persisted under `assets_<userId>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub file_type: String,
    pub year_purchased: i32,
    #[serde(default)]
    pub purchase_price: f64,
    pub year_sold: Option<i32>,
    pub sold_price: Option<f64>,
    pub quality: Quality,
    pub user_id: i64, // owning user
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Asset {
    /// Case-insensitive substring match on name or description.
    /// `needle` must already be lower-cased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}
