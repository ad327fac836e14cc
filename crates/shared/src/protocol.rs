use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{domain::Platform, error::select_fault_message};

/// Body posted to the automation endpoint. Built once per submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    platform: Platform,
    account_id: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl OptimizeRequest {
    pub fn new(
        platform: Platform,
        account_id: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            platform,
            account_id: account_id.into(),
            start_date,
            end_date,
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdPerformer {
    pub name: String,
    pub impressions: u64,
    pub clicks: u64,
    pub ctr: f64,
    pub conversions: u64,
    pub cost_per_conversion: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub total_ads: u64,
    #[serde(rename = "avgCTR")]
    pub avg_ctr: f64,
    pub avg_conversions: f64,
    pub total_spend: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    #[serde(default)]
    pub top_performers: Vec<AdPerformer>,
    #[serde(default)]
    pub bottom_performers: Vec<AdPerformer>,
    pub metrics: PerformanceMetrics,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    #[serde(default)]
    pub top_patterns: Vec<String>,
    #[serde(default)]
    pub bottom_weaknesses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedCreative {
    pub headline: String,
    pub primary_text: String,
    pub cta: String,
    pub reasoning: String,
}

/// Report returned by the automation endpoint.
///
/// Every section is optional and may be missing even when `success` is true.
/// Unknown keys are ignored and `null` reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<Insights>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimized_creatives: Option<Vec<OptimizedCreative>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ReportResponse {
    /// Message shown when the workflow answered but reported `success: false`.
    pub fn failure_message(&self) -> String {
        let reported = [self.error.as_deref(), self.message.as_deref()]
            .into_iter()
            .flatten()
            .find(|text| !text.trim().is_empty());
        select_fault_message(reported, None)
    }
}
