//! Website pixels for event tracking.

use super::{check_page, default_page, default_page_size, PageInfo, Status};
use crate::validation::{Validate, ValidationErrors};
use serde::{Deserialize, Serialize};
use serde_json::Value;

operation!(
    /// Create a pixel for tracking website events.
    Create, CREATE, "pixel.create", Post "/pixel/create/",
    PixelCreateInput => Option<PixelCreated>
);

operation!(
    /// Get a paginated list of pixels.
    List, LIST, "pixel.list", Get "/pixel/list/",
    PixelListInput => PixelList
);

operation!(
    /// Update pixel settings.
    Update, UPDATE, "pixel.update", Post "/pixel/update/",
    PixelUpdateInput => Value
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PixelCategory {
    OnlineStore,
    FillingForm,
    Contacts,
    LandingPage,
    CustomizeEvents,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelCreateInput {
    pub advertiser_id: String,
    pub pixel_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pixel_category: Option<PixelCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_name: Option<String>,
}

impl PixelCreateInput {
    pub fn new(advertiser_id: impl Into<String>, pixel_name: impl Into<String>) -> Self {
        Self {
            advertiser_id: advertiser_id.into(),
            pixel_name: pixel_name.into(),
            pixel_category: None,
            partner_name: None,
        }
    }

    pub fn category(mut self, category: PixelCategory) -> Self {
        self.pixel_category = Some(category);
        self
    }
}

impl Validate for PixelCreateInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_non_empty("advertiser_id", &self.advertiser_id);
        if self.pixel_name.is_empty() {
            errors.add("pixel_name", "Pixel name cannot be empty");
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelCreated {
    pub pixel_id: String,
    pub pixel_code: String,
    pub pixel_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pixel_category: Option<PixelCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_matching_fields: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelListInput {
    pub advertiser_id: String,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pixel_ids: Option<Vec<String>>,
}

impl PixelListInput {
    pub fn new(advertiser_id: impl Into<String>) -> Self {
        Self {
            advertiser_id: advertiser_id.into(),
            page: default_page(),
            page_size: default_page_size(),
            pixel_ids: None,
        }
    }

    pub fn page(mut self, page: u32, page_size: u32) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }
}

impl Validate for PixelListInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_non_empty("advertiser_id", &self.advertiser_id);
        check_page(&mut errors, self.page, self.page_size);
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pixel {
    pub pixel_id: String,
    pub pixel_name: String,
    pub pixel_code: String,
    pub pixel_category: PixelCategory,
    pub status: Status,
    pub create_time: i64,
    pub update_time: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelList {
    #[serde(default)]
    pub list: Vec<Pixel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<PageInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelUpdateInput {
    pub advertiser_id: String,
    pub pixel_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pixel_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_matching_fields: Option<Vec<String>>,
}

impl Validate for PixelUpdateInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_non_empty("advertiser_id", &self.advertiser_id);
        errors.require_non_empty("pixel_id", &self.pixel_id);
        errors.into_result()
    }
}

structural!(PixelCreated, PixelList);
