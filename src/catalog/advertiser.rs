//! Advertiser account operations.

use super::Status;
use crate::validation::{Validate, ValidationErrors};
use serde::{Deserialize, Serialize};
use serde_json::Value;

operation!(
    /// Get advertiser information.
    Info, INFO, "advertiser.info", Get "/advertiser/info/",
    AdvertiserInfoInput => AdvertiserList
);

operation!(
    /// Update advertiser information.
    Update, UPDATE, "advertiser.update", Post "/advertiser/update/",
    AdvertiserUpdateInput => Value
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvertiserInfoInput {
    pub advertiser_ids: Vec<String>,
    /// Fields to return; the API picks a default set when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

impl AdvertiserInfoInput {
    pub fn new<I, S>(advertiser_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            advertiser_ids: advertiser_ids.into_iter().map(Into::into).collect(),
            fields: None,
        }
    }
}

impl Validate for AdvertiserInfoInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_non_empty_items("advertiser_ids", &self.advertiser_ids);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvertiserList {
    #[serde(default)]
    pub list: Vec<Advertiser>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advertiser {
    pub advertiser_id: String,
    pub advertiser_name: String,
    pub status: Status,
    pub create_time: i64,
    pub update_time: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvertiserUpdateInput {
    pub advertiser_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advertiser_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advertiser_budgets: Option<Vec<AdvertiserBudget>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification_images: Option<Vec<QualificationImage>>,
}

impl AdvertiserUpdateInput {
    pub fn new(advertiser_id: impl Into<String>) -> Self {
        Self {
            advertiser_id: advertiser_id.into(),
            ..Self::default()
        }
    }
}

impl Validate for AdvertiserUpdateInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_non_empty("advertiser_id", &self.advertiser_id);
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvertiserBudget {
    pub budget: f64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationImage {
    pub image_id: String,
    pub image_url: String,
}

structural!(AdvertiserList);
