//! Ads and their creatives.

use super::{check_page, default_page, default_page_size, Filtering, PageInfo, Status};
use crate::validation::{Validate, ValidationErrors};
use serde::{Deserialize, Serialize};
use serde_json::Value;

operation!(
    /// Create an ad with creative content.
    Create, CREATE, "ad.create", Post "/ad/create/",
    AdCreateInput => Option<AdCreated>
);

operation!(
    /// Retrieve ads.
    Get, GET, "ad.get", Get "/ad/get/",
    AdGetInput => AdList
);

operation!(
    /// Update ad creative content.
    Update, UPDATE, "ad.update", Post "/ad/update/",
    AdUpdateInput => Value
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdFormat {
    SingleImage,
    SingleVideo,
    Carousel,
    SparkAd,
    PangleSingleImage,
    PangleSingleVideo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickableText {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disclaimer {
    pub disclaimer_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disclaimer_clickable_texts: Option<Vec<ClickableText>>,
}

impl Validate for Disclaimer {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for (i, clickable) in self.disclaimer_clickable_texts.iter().flatten().enumerate() {
            errors.require_url(&format!("disclaimer_clickable_texts.{}.url", i), &clickable.url);
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creative {
    pub ad_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_to_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_page_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_icon_web_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_safety_postbid_partner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clickability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disclaimer_text: Option<Disclaimer>,
}

impl Validate for Creative {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(url) = &self.landing_page_url {
            errors.require_url("landing_page_url", url);
        }
        errors.merge_nested("disclaimer_text", self.disclaimer_text.validate());
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdCreateInput {
    pub advertiser_id: String,
    pub adgroup_id: String,
    pub ad_name: String,
    pub ad_format: AdFormat,
    pub creatives: Vec<Creative>,
    #[serde(default)]
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_pixel_id: Option<String>,
    /// Automated creative optimization.
    #[serde(default)]
    pub is_aco: bool,
}

impl AdCreateInput {
    pub fn new(
        advertiser_id: impl Into<String>,
        adgroup_id: impl Into<String>,
        ad_name: impl Into<String>,
        ad_format: AdFormat,
        creatives: Vec<Creative>,
    ) -> Self {
        Self {
            advertiser_id: advertiser_id.into(),
            adgroup_id: adgroup_id.into(),
            ad_name: ad_name.into(),
            ad_format,
            creatives,
            status: Status::default(),
            tracking_pixel_id: None,
            is_aco: false,
        }
    }
}

impl Validate for AdCreateInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_non_empty("advertiser_id", &self.advertiser_id);
        errors.require_non_empty("adgroup_id", &self.adgroup_id);
        if self.ad_name.is_empty() {
            errors.add("ad_name", "Ad name is required");
        }
        for (i, creative) in self.creatives.iter().enumerate() {
            errors.merge_nested(&format!("creatives.{}", i), creative.validate());
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdCreated {
    pub ad_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdGetInput {
    pub advertiser_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_ids: Option<Vec<String>>,
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

impl AdGetInput {
    pub fn new(advertiser_id: impl Into<String>) -> Self {
        Self {
            advertiser_id: advertiser_id.into(),
            ad_ids: None,
            adgroup_ids: None,
            campaign_ids: None,
            filtering: None,
            fields: None,
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl Validate for AdGetInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_non_empty("advertiser_id", &self.advertiser_id);
        check_page(&mut errors, self.page, self.page_size);
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ad {
    pub ad_id: String,
    pub ad_name: String,
    pub adgroup_id: String,
    pub campaign_id: String,
    pub status: Status,
    pub ad_format: String,
    pub create_time: i64,
    pub update_time: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impression_tracking_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_tracking_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdList {
    #[serde(default)]
    pub list: Vec<Ad>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<PageInfo>,
}

/// Creative fields that can be changed after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreativeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_to_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_page_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdUpdateInput {
    pub advertiser_id: String,
    pub ad_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creatives: Option<Vec<CreativeUpdate>>,
}

impl Validate for AdUpdateInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_non_empty("advertiser_id", &self.advertiser_id);
        errors.require_non_empty("ad_id", &self.ad_id);
        for (i, creative) in self.creatives.iter().flatten().enumerate() {
            if let Some(url) = &creative.landing_page_url {
                errors.require_url(&format!("creatives.{}.landing_page_url", i), url);
            }
        }
        errors.into_result()
    }
}

structural!(AdCreated, AdList);
