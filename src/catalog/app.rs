//! Mobile app registration for tracking and attribution.

use super::{check_page, default_page, default_page_size, PageInfo, Status};
use crate::validation::{Validate, ValidationErrors};
use serde::{Deserialize, Serialize};
use serde_json::Value;

operation!(
    /// Create an app for tracking and attribution.
    Create, CREATE, "app.create", Post "/app/create/",
    AppCreateInput => Option<AppCreated>
);

operation!(
    /// Get information about specific apps.
    Info, INFO, "app.info", Get "/app/info/",
    AppInfoInput => AppList
);

operation!(
    /// Get a paginated list of apps.
    List, LIST, "app.list", Get "/app/list/",
    AppListInput => AppList
);

operation!(
    /// Update app information.
    Update, UPDATE, "app.update", Post "/app/update/",
    AppUpdateInput => Value
);

/// Measurement partners accepted in `partner`.
pub const PARTNERS: &[&str] = &[
    "AppsFlyer", "Adjust", "TlnkIo", "Kochava", "AppAdforce", "Singular", "Adzcore",
    "Tenjin", "Other", "DoubleClick", "ServingsSys", "FlashTalking", "AppLink", "AdBrix",
    "Huangbaoche", "Lazada", "LeadBolt", "Metaps", "Vidoadsplus", "AppMetrica", "Dentsu",
    "myTracker", "Adform", "doubleverify", "Nielsen", "Placed_powered_by_Foursquare",
    "Macromil", "Testee", "Weborama", "Kantar", "Cinarra", "TikTokLeadAd", "Shopify",
    "Square", "BigCommerce", "ECWID", "PrestaShop", "WooCommerce", "Magento",
    "TikTokCustomInstantPage", "TikTokEC1PSeller", "TikTokEC3PStore", "Salesforce",
    "OpenCart", "SHOPLINE", "Cafe24", "BASE",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RetargetingState {
    Retargeting,
    #[default]
    NonRetargeting,
}

/// Third-party tracking URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingUrl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impression_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retargeting_click_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retargeting_impression_url: Option<String>,
}

impl Validate for TrackingUrl {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let urls = [
            ("click_url", &self.click_url),
            ("impression_url", &self.impression_url),
            ("retargeting_click_url", &self.retargeting_click_url),
            ("retargeting_impression_url", &self.retargeting_impression_url),
        ];
        for (field, url) in urls {
            if let Some(url) = url {
                errors.require_url(field, url);
            }
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppCreateInput {
    pub advertiser_id: String,
    pub download_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_url: Option<TrackingUrl>,
    /// One of [`PARTNERS`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner: Option<String>,
    #[serde(default)]
    pub enable_retargeting: RetargetingState,
}

impl AppCreateInput {
    pub fn new(advertiser_id: impl Into<String>, download_url: impl Into<String>) -> Self {
        Self {
            advertiser_id: advertiser_id.into(),
            download_url: download_url.into(),
            tracking_url: None,
            partner: None,
            enable_retargeting: RetargetingState::default(),
        }
    }
}

impl Validate for AppCreateInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_non_empty("advertiser_id", &self.advertiser_id);
        errors.require_url("download_url", &self.download_url);
        errors.merge_nested("tracking_url", self.tracking_url.validate());
        if let Some(partner) = &self.partner {
            errors.require_one_of("partner", partner, PARTNERS);
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppCreated {
    pub app_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfoInput {
    pub advertiser_id: String,
    pub app_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

impl Validate for AppInfoInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_non_empty("advertiser_id", &self.advertiser_id);
        errors.require_non_empty_items("app_ids", &self.app_ids);
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppListInput {
    pub advertiser_id: String,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

impl AppListInput {
    pub fn new(advertiser_id: impl Into<String>) -> Self {
        Self {
            advertiser_id: advertiser_id.into(),
            page: default_page(),
            page_size: default_page_size(),
            fields: None,
        }
    }

    pub fn page(mut self, page: u32, page_size: u32) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }
}

impl Validate for AppListInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_non_empty("advertiser_id", &self.advertiser_id);
        check_page(&mut errors, self.page, self.page_size);
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    pub app_id: String,
    pub app_name: String,
    pub download_url: String,
    pub app_type: String,
    pub status: Status,
    pub create_time: i64,
    pub update_time: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppList {
    #[serde(default)]
    pub list: Vec<App>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<PageInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppUpdateInput {
    pub advertiser_id: String,
    pub app_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_url: Option<TrackingUrl>,
}

impl Validate for AppUpdateInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_non_empty("advertiser_id", &self.advertiser_id);
        errors.require_non_empty("app_id", &self.app_id);
        if let Some(url) = &self.download_url {
            errors.require_url("download_url", url);
        }
        errors.merge_nested("tracking_url", self.tracking_url.validate());
        errors.into_result()
    }
}

structural!(AppCreated, AppList);
