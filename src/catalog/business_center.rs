//! Business centers and their first advertiser account.

use crate::validation::{Validate, ValidationErrors};
use serde::{Deserialize, Serialize};

operation!(
    /// Create a business center together with its first advertiser account.
    Create, CREATE, "business_center.create", Post "/bc/create/",
    BusinessCenterCreateInput => Option<BusinessCenterCreated>
);

operation!(
    /// Get business center information.
    Get, GET, "business_center.get", Get "/bc/get/",
    BusinessCenterGetInput => Option<BusinessCenter>
);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvertiserInfo {
    pub advertiser_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub country: String,
    pub currency: String,
    pub industry: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Validate for AdvertiserInfo {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(email) = &self.email {
            errors.require_email("email", email);
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingInfo {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessCenterCreateInput {
    pub business_center_name: String,
    pub time_zone: String,
    pub advertiser_info: AdvertiserInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_info: Option<BillingInfo>,
}

impl Validate for BusinessCenterCreateInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.business_center_name.is_empty() {
            errors.add("business_center_name", "Business center name is required");
        }
        errors.merge_nested("advertiser_info", self.advertiser_info.validate());
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessCenterCreated {
    pub bc_id: String,
    pub advertiser_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessCenterGetInput {
    pub bc_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

impl BusinessCenterGetInput {
    pub fn new(bc_id: impl Into<String>) -> Self {
        Self {
            bc_id: bc_id.into(),
            fields: None,
        }
    }
}

impl Validate for BusinessCenterGetInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_non_empty("bc_id", &self.bc_id);
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessCenter {
    pub bc_id: String,
    pub bc_name: String,
    pub time_zone: String,
    pub status: String,
    pub create_time: i64,
    pub update_time: i64,
}

structural!(BusinessCenterCreated, BusinessCenter);
