//! Shape validation for operation inputs and outputs.
//!
//! Each endpoint declares its input and output shapes as Rust types. A
//! [`Validator`] turns an untyped JSON value into a checked, normalized value
//! (defaults filled in) or a list of field problems.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::fmt;

/// A single field-level problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Dotted path of the offending field, or `"$"` for the whole value.
    pub field: String,
    /// What was wrong with it.
    pub message: String,
}

/// A list of field problems found while validating a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a problem with `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Checks that a required string is not empty.
    pub fn require_non_empty(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, "must not be empty");
        }
    }

    /// Checks that every element of a required list is present and non-empty.
    pub fn require_non_empty_items(&mut self, field: &str, values: &[String]) {
        if values.iter().any(|v| v.trim().is_empty()) {
            self.add(field, "must not contain empty values");
        }
    }

    /// Checks an inclusive numeric range.
    pub fn require_range(&mut self, field: &str, value: u32, min: u32, max: u32) {
        if value < min || value > max {
            self.add(field, format!("must be between {} and {}", min, max));
        }
    }

    /// Checks that an optional number is strictly positive.
    pub fn require_positive(&mut self, field: &str, value: Option<f64>) {
        if let Some(v) = value {
            if v.is_nan() || v <= 0.0 {
                self.add(field, "must be greater than 0");
            }
        }
    }

    /// Checks that a string is an absolute URL.
    pub fn require_url(&mut self, field: &str, value: &str) {
        if url::Url::parse(value).is_err() {
            self.add(field, "must be a valid URL");
        }
    }

    /// Checks for a plausible `local@domain.tld` address.
    pub fn require_email(&mut self, field: &str, value: &str) {
        let plausible = match value.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.contains('@')
                    && !value.chars().any(char::is_whitespace)
                    && domain
                        .rsplit_once('.')
                        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
            }
            None => false,
        };
        if !plausible {
            self.add(field, "must be a valid email address");
        }
    }

    /// Checks the `YYYY-MM-DD` date format.
    pub fn require_date(&mut self, field: &str, value: &str) {
        let bytes = value.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !well_formed {
            self.add(field, "Date format must be YYYY-MM-DD");
        }
    }

    /// Checks that a string is one of the allowed values.
    pub fn require_one_of(&mut self, field: &str, value: &str, allowed: &[&str]) {
        if !allowed.contains(&value) {
            self.add(field, format!("must be one of: {}", allowed.join(", ")));
        }
    }

    fn prefixed(mut self, prefix: &str) -> Self {
        for error in &mut self.errors {
            error.field = format!("{}.{}", prefix, error.field);
        }
        self
    }

    /// Merges the problems of a nested value under `prefix`.
    pub fn merge_nested(&mut self, prefix: &str, nested: Result<(), ValidationErrors>) {
        if let Err(nested) = nested {
            self.errors.extend(nested.prefixed(prefix).errors);
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Semantic checks beyond what the type itself enforces.
///
/// Structural problems (missing fields, wrong JSON types, unknown enum
/// variants) are caught while deserializing; `validate` covers the rest.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

impl Validate for Value {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

/// Checks a JSON value against a declared shape and returns it normalized.
pub type Validator = fn(&Value) -> Result<Value, ValidationErrors>;

/// Decodes `value` as `T`, runs [`Validate`], and re-encodes it.
///
/// A `null` value that `T` cannot represent is decoded as an empty object, so
/// a missing `data` field satisfies any shape whose fields are all optional.
pub fn validate_as<T>(value: &Value) -> Result<Value, ValidationErrors>
where
    T: DeserializeOwned + Serialize + Validate,
{
    let typed = decode::<T>(value)?;
    typed.validate()?;
    serde_json::to_value(&typed).map_err(|e| {
        let mut errors = ValidationErrors::new();
        errors.add("$", e.to_string());
        errors
    })
}

pub(crate) fn decode<T: DeserializeOwned>(value: &Value) -> Result<T, ValidationErrors> {
    let decoded = match serde_json::from_value::<T>(value.clone()) {
        Err(_) if value.is_null() => serde_json::from_value::<T>(Value::Object(Default::default())),
        other => other,
    };
    decoded.map_err(|e| {
        let mut errors = ValidationErrors::new();
        errors.add("$", e.to_string());
        errors
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize)]
    struct Named {
        name: String,
        #[serde(default = "default_size")]
        size: u32,
    }

    fn default_size() -> u32 {
        10
    }

    impl Validate for Named {
        fn validate(&self) -> Result<(), ValidationErrors> {
            let mut errors = ValidationErrors::new();
            errors.require_non_empty("name", &self.name);
            errors.require_range("size", self.size, 1, 1000);
            errors.into_result()
        }
    }

    #[test]
    fn test_missing_required_field() {
        let err = validate_as::<Named>(&json!({ "size": 3 })).unwrap_err();
        assert_eq!(err.errors().len(), 1);
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_defaults_are_filled_in() {
        let value = validate_as::<Named>(&json!({ "name": "pixel" })).unwrap();
        assert_eq!(value, json!({ "name": "pixel", "size": 10 }));
    }

    #[test]
    fn test_semantic_checks_collect_every_problem() {
        let err = validate_as::<Named>(&json!({ "name": " ", "size": 0 })).unwrap_err();
        assert_eq!(err.errors().len(), 2);
        assert_eq!(err.to_string(), "name: must not be empty; size: must be between 1 and 1000");
    }

    #[test]
    fn test_date_format() {
        let mut errors = ValidationErrors::new();
        errors.require_date("start_date", "2024-01-31");
        assert!(errors.is_empty());

        errors.require_date("end_date", "2024/01/31");
        errors.require_date("end_date", "24-1-31");
        assert_eq!(errors.errors().len(), 2);
    }

    #[test]
    fn test_email_format() {
        let mut errors = ValidationErrors::new();
        errors.require_email("email", "ops@acme.example");
        assert!(errors.is_empty());

        for bad in ["ops.acme.example", "@acme.example", "ops@acme", "ops@@acme.example", "o ps@acme.example"] {
            errors.require_email("email", bad);
        }
        assert_eq!(errors.errors().len(), 5);
    }

    #[test]
    fn test_null_decodes_as_empty_object() {
        #[derive(Debug, Serialize, Deserialize, Default)]
        struct AllOptional {
            #[serde(default)]
            list: Vec<String>,
        }
        impl Validate for AllOptional {
            fn validate(&self) -> Result<(), ValidationErrors> {
                Ok(())
            }
        }

        assert_eq!(validate_as::<AllOptional>(&Value::Null).unwrap(), json!({ "list": [] }));
        assert_eq!(validate_as::<Value>(&Value::Null).unwrap(), Value::Null);
    }

    #[test]
    fn test_nested_errors_are_prefixed() {
        let mut inner = ValidationErrors::new();
        inner.add("click_url", "must be a valid URL");
        let mut outer = ValidationErrors::new();
        outer.merge_nested("tracking_url", Err(inner));
        assert_eq!(outer.errors()[0].field, "tracking_url.click_url");
    }
}
