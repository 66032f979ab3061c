//! Core error types for Infra Projects RS
//!
//! `IpError` is what the service side produces; the HTTP layer maps it to a
//! status code and a JSON error body that carries `ValidationErrors`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard Result type for service-side operations
pub type IpResult<T> = Result<T, IpError>;

/// Core error type for project-tracking operations
#[derive(Error, Debug)]
pub enum IpError {
    #[error("Not found: {entity} with id={id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IpError {
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        IpError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// A validation failure that is not tied to a single field
    pub fn invalid(message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add_base(message);
        IpError::Validation(errors)
    }

    pub fn status_code(&self) -> u16 {
        match self {
            IpError::NotFound { .. } => 404,
            IpError::Validation(_) => 422,
            IpError::Internal(_) => 500,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            IpError::NotFound { .. } => "not_found",
            IpError::Validation(_) => "validation_failed",
            IpError::Internal(_) => "internal_error",
        }
    }
}

/// Validation errors collection
///
/// Serializable so the service can put it on the wire and the client can
/// decode it back into the same shape.
#[derive(Error, Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{}", self.full_messages().join(", "))]
pub struct ValidationErrors {
    /// Field-specific errors: field_name -> messages
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, Vec<String>>,
    /// Base errors not tied to a specific field
    #[serde(default, rename = "baseErrors", skip_serializing_if = "Vec::is_empty")]
    pub base_errors: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn add_base(&mut self, message: impl Into<String>) {
        self.base_errors.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.base_errors.is_empty()
    }

    /// Check if there are errors for a specific field
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Get errors for a specific field
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, messages) in other.errors {
            self.errors.entry(field).or_default().extend(messages);
        }
        self.base_errors.extend(other.base_errors);
    }

    /// Prefix every field key, e.g. `projectName` -> `basicInfo.projectName`
    pub fn nested(self, prefix: &str) -> Self {
        let errors = self
            .errors
            .into_iter()
            .map(|(field, messages)| (format!("{}.{}", prefix, field), messages))
            .collect();
        Self {
            errors,
            base_errors: self.base_errors,
        }
    }

    /// `Ok(())` when empty, otherwise the collected errors
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn full_messages(&self) -> Vec<String> {
        let mut messages = self.base_errors.clone();
        for (field, field_messages) in &self.errors {
            for msg in field_messages {
                messages.push(format!("{} {}", field, msg));
            }
        }
        messages
    }
}

/// JSON body of every non-2xx response from the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(rename = "_type", default = "error_type_name")]
    pub type_name: String,
    /// `urn:ip:errors:<Kind>`
    pub error_identifier: String,
    pub message: String,
    #[serde(flatten)]
    pub details: ValidationErrors,
}

fn error_type_name() -> String {
    "Error".to_string()
}

impl ErrorBody {
    pub fn new(kind: &str, message: impl Into<String>) -> Self {
        Self {
            type_name: error_type_name(),
            error_identifier: format!("urn:ip:errors:{}", kind),
            message: message.into(),
            details: ValidationErrors::new(),
        }
    }

    pub fn with_details(mut self, details: ValidationErrors) -> Self {
        self.details = details;
        self
    }

    /// The trailing `<Kind>` of the identifier
    pub fn kind(&self) -> &str {
        self.error_identifier
            .rsplit(':')
            .next()
            .unwrap_or(&self.error_identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_round_trip() {
        let mut details = ValidationErrors::new();
        details.add("basicInfo.projectName", "can't be blank");
        let body = ErrorBody::new("PropertyConstraintViolation", "basicInfo.projectName can't be blank")
            .with_details(details);

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["_type"], "Error");
        assert_eq!(json["errorIdentifier"], "urn:ip:errors:PropertyConstraintViolation");
        assert_eq!(json["errors"]["basicInfo.projectName"][0], "can't be blank");

        let decoded: ErrorBody = serde_json::from_value(json).unwrap();
        assert_eq!(decoded.kind(), "PropertyConstraintViolation");
        assert_eq!(decoded, body);
    }

    #[test]
    fn test_validation_errors_collect_and_merge() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());

        errors.add("projectName", "can't be blank");
        let mut other = ValidationErrors::new();
        other.add("projectName", "is too long");
        other.add_base("project is not a draft");
        errors.merge(other);

        assert!(errors.has_error("projectName"));
        assert_eq!(errors.get("projectName").map(Vec::len), Some(2));
        assert_eq!(errors.base_errors, vec!["project is not a draft".to_string()]);
    }

    #[test]
    fn test_nested_prefixes_fields_only() {
        let mut errors = ValidationErrors::new();
        errors.add("year", "must be a four-digit year");
        errors.add_base("base stays");

        let nested = errors.nested("annualInfo");
        assert!(nested.has_error("annualInfo.year"));
        assert!(!nested.has_error("year"));
        assert_eq!(nested.base_errors.len(), 1);
    }

    #[test]
    fn test_full_messages_order() {
        let mut errors = ValidationErrors::new();
        errors.add("b", "second");
        errors.add("a", "first");
        errors.add_base("base");
        assert_eq!(errors.full_messages(), vec!["base", "a first", "b second"]);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(IpError::not_found("Project", "p1").status_code(), 404);
        assert_eq!(IpError::invalid("nope").status_code(), 422);
        assert_eq!(IpError::invalid("nope").error_code(), "validation_failed");
        assert_eq!(IpError::Internal("x".into()).status_code(), 500);
    }

    #[test]
    fn test_wire_shape_omits_empty_parts() {
        let mut errors = ValidationErrors::new();
        errors.add("projectName", "can't be blank");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "errors": { "projectName": ["can't be blank"] } })
        );

        let decoded: ValidationErrors = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, errors);
    }
}
