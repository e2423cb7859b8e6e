//! Campaign management.

use super::{check_page, default_page, default_page_size, Filtering, PageInfo, Status};
use crate::validation::{Validate, ValidationErrors};
use serde::{Deserialize, Serialize};
use serde_json::Value;

operation!(
    /// Create an advertising campaign.
    Create, CREATE, "campaign.create", Post "/campaign/create/",
    CampaignCreateInput => Option<CampaignCreated>
);

operation!(
    /// Retrieve campaigns, optionally filtered.
    Get, GET, "campaign.get", Get "/campaign/get/",
    CampaignGetInput => CampaignList
);

operation!(
    /// Update campaign settings.
    Update, UPDATE, "campaign.update", Post "/campaign/update/",
    CampaignUpdateInput => Value
);

operation!(
    /// Enable, disable or delete campaigns.
    StatusUpdate, STATUS_UPDATE, "campaign.status_update", Post "/campaign/status/update/",
    CampaignStatusUpdateInput => Value
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectiveType {
    Traffic,
    Conversions,
    AppInstall,
    Reach,
    VideoViews,
    LeadGeneration,
    CatalogSales,
    Engagement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetMode {
    #[serde(rename = "BUDGET_MODE_DAY")]
    Day,
    #[serde(rename = "BUDGET_MODE_TOTAL")]
    Total,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignType {
    NormalCampaign,
    #[serde(rename = "IOS14_CAMPAIGN")]
    Ios14Campaign,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignCreateInput {
    pub advertiser_id: String,
    pub campaign_name: String,
    pub objective_type: ObjectiveType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_mode: Option<BudgetMode>,
    #[serde(default)]
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_type: Option<CampaignType>,
}

impl CampaignCreateInput {
    pub fn new(
        advertiser_id: impl Into<String>,
        campaign_name: impl Into<String>,
        objective_type: ObjectiveType,
    ) -> Self {
        Self {
            advertiser_id: advertiser_id.into(),
            campaign_name: campaign_name.into(),
            objective_type,
            budget: None,
            budget_mode: None,
            status: Status::default(),
            campaign_type: None,
        }
    }

    pub fn budget(mut self, budget: f64, mode: BudgetMode) -> Self {
        self.budget = Some(budget);
        self.budget_mode = Some(mode);
        self
    }
}

impl Validate for CampaignCreateInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_non_empty("advertiser_id", &self.advertiser_id);
        if self.campaign_name.is_empty() {
            errors.add("campaign_name", "Campaign name is required");
        }
        errors.require_positive("budget", self.budget);
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignCreated {
    pub campaign_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignGetInput {
    pub advertiser_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filtering: Option<Filtering>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl CampaignGetInput {
    pub fn new(advertiser_id: impl Into<String>) -> Self {
        Self {
            advertiser_id: advertiser_id.into(),
            campaign_ids: None,
            filtering: None,
            fields: None,
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl Validate for CampaignGetInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_non_empty("advertiser_id", &self.advertiser_id);
        check_page(&mut errors, self.page, self.page_size);
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub campaign_id: String,
    pub campaign_name: String,
    pub objective_type: ObjectiveType,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_mode: Option<String>,
    pub create_time: i64,
    pub update_time: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignList {
    #[serde(default)]
    pub list: Vec<Campaign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<PageInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignUpdateInput {
    pub advertiser_id: String,
    pub campaign_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_mode: Option<BudgetMode>,
}

impl Validate for CampaignUpdateInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_non_empty("advertiser_id", &self.advertiser_id);
        errors.require_non_empty("campaign_id", &self.campaign_id);
        errors.require_positive("budget", self.budget);
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignStatusUpdateInput {
    pub advertiser_id: String,
    pub campaign_ids: Vec<String>,
    pub status: Status,
}

impl Validate for CampaignStatusUpdateInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_non_empty("advertiser_id", &self.advertiser_id);
        errors.require_non_empty_items("campaign_ids", &self.campaign_ids);
        errors.into_result()
    }
}

structural!(CampaignCreated, CampaignList);
