//! Endpoint catalog: routing metadata and declared shapes for every operation.
//!
//! Each operation is described twice. [`Endpoint`] is the plain descriptor the
//! executor routes on (name, method, path, input and output [`Validator`]s),
//! listed in [`ENDPOINTS`] and found by name with [`find`]. The [`Operation`]
//! trait ties the same descriptor to the Rust types callers work with.

use crate::validation::{Validate, ValidationErrors, Validator};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// HTTP methods used by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Input travels as query parameters.
    Get,
    /// Input travels as a JSON body.
    Post,
}

impl From<HttpMethod> for http::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => http::Method::GET,
            HttpMethod::Post => http::Method::POST,
        }
    }
}

/// Routing metadata and shape validators for one operation.
#[derive(Clone, Copy)]
pub struct Endpoint {
    /// Dotted `group.operation` name, e.g. `"pixel.create"`.
    pub name: &'static str,
    pub method: HttpMethod,
    /// Path relative to the client's base URL.
    pub path: &'static str,
    pub input: Validator,
    pub output: Validator,
}

impl std::fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endpoint")
            .field("name", &self.name)
            .field("method", &self.method)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// A typed operation bound to its [`Endpoint`].
pub trait Operation {
    type Input: Serialize;
    type Output: DeserializeOwned;
    const ENDPOINT: &'static Endpoint;
}

/// Declares an endpoint descriptor and its typed operation marker.
macro_rules! operation {
    ($(#[$meta:meta])* $marker:ident, $descriptor:ident, $name:literal, $method:ident $path:literal, $input:ty => $output:ty) => {
        $(#[$meta])*
        pub const $descriptor: $crate::catalog::Endpoint = $crate::catalog::Endpoint {
            name: $name,
            method: $crate::catalog::HttpMethod::$method,
            path: $path,
            input: $crate::validation::validate_as::<$input>,
            output: $crate::validation::validate_as::<$output>,
        };

        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $marker;

        impl $crate::catalog::Operation for $marker {
            type Input = $input;
            type Output = $output;
            const ENDPOINT: &'static $crate::catalog::Endpoint = &$descriptor;
        }
    };
}

/// Implements [`Validate`] for shapes with no checks beyond their structure.
macro_rules! structural {
    ($($ty:ty),+ $(,)?) => {
        $(impl $crate::validation::Validate for $ty {
            fn validate(&self) -> Result<(), $crate::validation::ValidationErrors> {
                Ok(())
            }
        })+
    };
}

pub mod ad;
pub mod adgroup;
pub mod advertiser;
pub mod app;
pub mod business_center;
pub mod campaign;
pub mod pixel;
pub mod report;

/// Every operation the client knows about.
pub static ENDPOINTS: &[Endpoint] = &[
    advertiser::INFO,
    advertiser::UPDATE,
    app::CREATE,
    app::INFO,
    app::LIST,
    app::UPDATE,
    pixel::CREATE,
    pixel::LIST,
    pixel::UPDATE,
    campaign::CREATE,
    campaign::GET,
    campaign::UPDATE,
    campaign::STATUS_UPDATE,
    adgroup::CREATE,
    adgroup::GET,
    adgroup::UPDATE,
    ad::CREATE,
    ad::GET,
    ad::UPDATE,
    business_center::CREATE,
    business_center::GET,
    report::TASK_CREATE,
    report::TASK_CHECK,
];

/// Looks up an endpoint by its dotted name.
///
/// ```
/// use tiktok_business_api::catalog::{self, HttpMethod};
///
/// let endpoint = catalog::find("pixel.create").unwrap();
/// assert_eq!(endpoint.method, HttpMethod::Post);
/// assert_eq!(endpoint.path, "/pixel/create/");
/// assert!(catalog::find("pixel.delete").is_none());
/// ```
pub fn find(name: &str) -> Option<&'static Endpoint> {
    ENDPOINTS.iter().find(|endpoint| endpoint.name == name)
}

/// Lifecycle status shared by most resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Enable,
    Disable,
    Delete,
}

/// Pagination block returned by list operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_page: Option<u64>,
}

/// Resource filters accepted by `get` style operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filtering {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advertiser_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adgroup_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<String>>,
}

pub(crate) fn default_page() -> u32 {
    1
}

pub(crate) fn default_page_size() -> u32 {
    10
}

/// Largest page the API serves.
pub const MAX_PAGE_SIZE: u32 = 1000;

pub(crate) fn check_page(errors: &mut ValidationErrors, page: u32, page_size: u32) {
    if page == 0 {
        errors.add("page", "must be at least 1");
    }
    errors.require_range("page_size", page_size, 1, MAX_PAGE_SIZE);
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            Some(inner) => inner.validate(),
            None => Ok(()),
        }
    }
}

structural!(PageInfo, Filtering);
