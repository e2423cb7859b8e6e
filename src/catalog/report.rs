//! Asynchronous report tasks.

use super::Filtering;
use crate::validation::{Validate, ValidationErrors};
use serde::{Deserialize, Serialize};

operation!(
    /// Create an asynchronous report generation task.
    TaskCreate, TASK_CREATE, "report.task_create", Post "/report/task/create/",
    ReportTaskCreateInput => Option<ReportTask>
);

operation!(
    /// Check the status of a report generation task.
    TaskCheck, TASK_CHECK, "report.task_check", Get "/report/task/check/",
    ReportTaskCheckInput => Option<ReportTaskStatus>
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportType {
    Basic,
    Audience,
    PlayableMaterial,
    Catalog,
    ShoppingAds,
    LiveShoppingAds,
    Dpa,
    ReachFrequency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataLevel {
    AuctionCampaign,
    AuctionAdgroup,
    AuctionAd,
    Advertiser,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceType {
    #[default]
    Auction,
    Reservation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Queuing,
    Processing,
    Success,
    Failed,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTaskCreateInput {
    pub advertiser_id: String,
    pub report_type: ReportType,
    pub data_level: DataLevel,
    pub dimensions: Vec<String>,
    pub metrics: Vec<String>,
    #[serde(default)]
    pub service_type: ServiceType,
    /// `YYYY-MM-DD`.
    pub start_date: String,
    /// `YYYY-MM-DD`.
    pub end_date: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filtering: Option<Filtering>,
}

impl ReportTaskCreateInput {
    pub fn new(
        advertiser_id: impl Into<String>,
        report_type: ReportType,
        data_level: DataLevel,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            advertiser_id: advertiser_id.into(),
            report_type,
            data_level,
            dimensions: Vec::new(),
            metrics: Vec::new(),
            service_type: ServiceType::default(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            timezone: default_timezone(),
            filtering: None,
        }
    }

    pub fn dimensions<I: IntoIterator<Item = S>, S: Into<String>>(mut self, dimensions: I) -> Self {
        self.dimensions = dimensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn metrics<I: IntoIterator<Item = S>, S: Into<String>>(mut self, metrics: I) -> Self {
        self.metrics = metrics.into_iter().map(Into::into).collect();
        self
    }
}

impl Validate for ReportTaskCreateInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_non_empty("advertiser_id", &self.advertiser_id);
        errors.require_date("start_date", &self.start_date);
        errors.require_date("end_date", &self.end_date);
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTask {
    pub task_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTaskCheckInput {
    pub advertiser_id: String,
    pub task_id: String,
}

impl Validate for ReportTaskCheckInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_non_empty("advertiser_id", &self.advertiser_id);
        errors.require_non_empty("task_id", &self.task_id);
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTaskStatus {
    pub task_id: String,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

impl Validate for ReportTaskStatus {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(url) = &self.download_url {
            errors.require_url("download_url", url);
        }
        errors.into_result()
    }
}

structural!(ReportTask);
