use chrono::{DateTime, Utc};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::resource::{Capabilities, Id, Resource};

/// An identifier the API sometimes sends as a number and sometimes as a string.
#[derive(Debug, Display, From, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    #[display(fmt = "{}", _0)]
    Number(Id),
    #[display(fmt = "{}", _0)]
    Text(String),
}

impl IdValue {
    /// Numeric form, parsing the string variant if needed.
    pub fn as_id(&self) -> Option<Id> {
        match self {
            Self::Number(id) => Some(*id),
            Self::Text(s) => s.parse().ok(),
        }
    }
}

/// Per variation and goal results of an experiment.
///
/// Read-only; fetched with [`Experiment::results`](crate::Experiment::results).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation_id: Option<IdValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<IdValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_id: Option<IdValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visitors: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversions: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_rate: Option<f64>,
    /// `winner`, `loser`, `inconclusive` or `baseline`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improvement: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_revenue: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for ExperimentResult {
    const NAME: &'static str = "result";
    const COLLECTION: &'static str = "results";
    const CAPABILITIES: Capabilities = Capabilities::NONE;

    fn id(&self) -> Option<Id> {
        None
    }
}

/// Summary statistics of an experiment, computed with the stats engine.
///
/// Read-only; fetched with [`Experiment::stats`](crate::Experiment::stats).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation_id: Option<IdValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<IdValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_id: Option<IdValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visitors: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversions: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improvement: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistical_significance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difference: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Stat {
    const NAME: &'static str = "stat";
    const COLLECTION: &'static str = "stats";
    const CAPABILITIES: Capabilities = Capabilities::NONE;

    fn id(&self) -> Option<Id> {
        None
    }
}
