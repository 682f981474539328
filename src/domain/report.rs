use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::model::{Port, MAX_OPTIONS};

/// A cost axis along which pricing options are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Seafreight,
    Misc,
    HaulageTariff,
    MultiStop,
    Overtime,
    GrandTotal,
    GrandTotalNoHaulage,
}

impl Dimension {
    pub const ALL: [Dimension; 7] = [
        Dimension::Seafreight,
        Dimension::Misc,
        Dimension::HaulageTariff,
        Dimension::MultiStop,
        Dimension::Overtime,
        Dimension::GrandTotal,
        Dimension::GrandTotalNoHaulage,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Seafreight => "seafreight_total",
            Self::Misc => "misc_total",
            Self::HaulageTariff => "haulage_tariff",
            Self::MultiStop => "multi_stop_tariff",
            Self::Overtime => "overtime_tariff",
            Self::GrandTotal => "grand_total",
            Self::GrandTotalNoHaulage => "grand_total_no_haulage",
        }
    }
}

/// Derived per-option sums. `haulage_unit_total` is only set when the option
/// has a haulage leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionTotals {
    pub seafreight_total: f64,
    pub misc_total: f64,
    pub haulage_unit_total: Option<f64>,
    pub alt_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionResult {
    pub dimension: Dimension,
    pub values: [Option<f64>; MAX_OPTIONS],
    /// Winning slot, or -1 when no option stands out.
    pub best_index: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub totals: [Option<OptionTotals>; MAX_OPTIONS],
    pub dimensions: Vec<DimensionResult>,
    pub uses_haulage: bool,
    pub overall_best: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchedBy {
    Name,
    Distance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPortRecord {
    pub port: Port,
    pub distance_km: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortResolution {
    pub city: String,
    pub matched: Option<Port>,
    pub matched_by: Option<MatchedBy>,
    pub suggestions: Vec<RankedPortRecord>,
}

/// Everything the transform stage produces for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteOutcome {
    pub generated_at: DateTime<Utc>,
    pub comparison: ComparisonReport,
    pub port: Option<PortResolution>,
}
