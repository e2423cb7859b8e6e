//! Ad groups: placement, bidding, budget, schedule and targeting within a campaign.

use super::campaign::BudgetMode;
use super::{check_page, default_page, default_page_size, Filtering, PageInfo, Status};
use crate::validation::{Validate, ValidationErrors};
use serde::{Deserialize, Serialize};
use serde_json::Value;

operation!(
    /// Create an ad group within a campaign.
    Create, CREATE, "adgroup.create", Post "/adgroup/create/",
    AdgroupCreateInput => Option<AdgroupCreated>
);

operation!(
    /// Retrieve ad groups.
    Get, GET, "adgroup.get", Get "/adgroup/get/",
    AdgroupGetInput => AdgroupList
);

operation!(
    /// Update ad group settings.
    Update, UPDATE, "adgroup.update", Post "/adgroup/update/",
    AdgroupUpdateInput => Value
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementType {
    #[serde(rename = "PLACEMENT_TYPE_AUTOMATIC")]
    Automatic,
    #[serde(rename = "PLACEMENT_TYPE_TIKTOK")]
    Tiktok,
    #[serde(rename = "PLACEMENT_TYPE_TIKTOK_PULSE")]
    TiktokPulse,
    #[serde(rename = "PLACEMENT_TYPE_PANGLE")]
    Pangle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BidType {
    #[serde(rename = "BID_TYPE_NO_BID")]
    NoBid,
    #[serde(rename = "BID_TYPE_COST_CAP")]
    CostCap,
    #[serde(rename = "BID_TYPE_BID_CAP")]
    BidCap,
    #[serde(rename = "BID_TYPE_LOWEST_COST")]
    LowestCost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScheduleType {
    #[serde(rename = "SCHEDULE_START_END")]
    StartEnd,
    #[serde(rename = "SCHEDULE_ONGOING")]
    Ongoing,
}

/// Retargets users who took an action within `action_period` days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomAction {
    pub action_period: f64,
    pub action_scene: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_user_actions: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdgroupCreateInput {
    pub advertiser_id: String,
    pub campaign_id: String,
    pub adgroup_name: String,
    pub placement_type: PlacementType,
    pub bid_type: BidType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_mode: Option<BudgetMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_type: Option<ScheduleType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_end_time: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genders: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_keyword_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behavior_target_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_audience_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included_custom_actions: Option<Vec<CustomAction>>,
}

impl AdgroupCreateInput {
    pub fn new(
        advertiser_id: impl Into<String>,
        campaign_id: impl Into<String>,
        adgroup_name: impl Into<String>,
        placement_type: PlacementType,
        bid_type: BidType,
    ) -> Self {
        Self {
            advertiser_id: advertiser_id.into(),
            campaign_id: campaign_id.into(),
            adgroup_name: adgroup_name.into(),
            placement_type,
            bid_type,
            bid_price: None,
            budget: None,
            budget_mode: None,
            schedule_type: None,
            schedule_start_time: None,
            schedule_end_time: None,
            status: Status::default(),
            location_ids: None,
            age_groups: None,
            genders: None,
            languages: None,
            interest_keyword_ids: None,
            behavior_target_ids: None,
            excluded_audience_ids: None,
            included_custom_actions: None,
        }
    }

    pub fn budget(mut self, budget: f64, mode: BudgetMode) -> Self {
        self.budget = Some(budget);
        self.budget_mode = Some(mode);
        self
    }

    pub fn bid_price(mut self, price: f64) -> Self {
        self.bid_price = Some(price);
        self
    }
}

impl Validate for AdgroupCreateInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_non_empty("advertiser_id", &self.advertiser_id);
        errors.require_non_empty("campaign_id", &self.campaign_id);
        if self.adgroup_name.is_empty() {
            errors.add("adgroup_name", "Ad group name is required");
        }
        errors.require_positive("bid_price", self.bid_price);
        errors.require_positive("budget", self.budget);
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdgroupCreated {
    pub adgroup_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdgroupGetInput {
    pub advertiser_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adgroup_ids: Option<Vec<String>>,
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

impl AdgroupGetInput {
    pub fn new(advertiser_id: impl Into<String>) -> Self {
        Self {
            advertiser_id: advertiser_id.into(),
            adgroup_ids: None,
            campaign_ids: None,
            filtering: None,
            fields: None,
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl Validate for AdgroupGetInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_non_empty("advertiser_id", &self.advertiser_id);
        check_page(&mut errors, self.page, self.page_size);
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adgroup {
    pub adgroup_id: String,
    pub adgroup_name: String,
    pub campaign_id: String,
    pub status: Status,
    pub placement_type: PlacementType,
    pub bid_type: BidType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    pub create_time: i64,
    pub update_time: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdgroupList {
    #[serde(default)]
    pub list: Vec<Adgroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<PageInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdgroupUpdateInput {
    pub advertiser_id: String,
    pub adgroup_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adgroup_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_mode: Option<BudgetMode>,
}

impl Validate for AdgroupUpdateInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_non_empty("advertiser_id", &self.advertiser_id);
        errors.require_non_empty("adgroup_id", &self.adgroup_id);
        errors.require_positive("bid_price", self.bid_price);
        errors.require_positive("budget", self.budget);
        errors.into_result()
    }
}

structural!(AdgroupCreated, AdgroupList);
