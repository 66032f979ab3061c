//! Base contract system

use ip_core::error::ValidationErrors;

/// Result of contract validation
pub type ValidationResult = Result<(), ValidationErrors>;

/// Base contract trait
pub trait Contract<T>: Send + Sync {
    /// Validate the input
    fn validate(&self, input: &T) -> ValidationResult;
}

/// Fold `validator` derive output into our error collection
///
/// Field keys are reported in their wire (camelCase) spelling.
pub fn collect_field_errors(result: Result<(), validator::ValidationErrors>) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if let Err(failures) = result {
        for (field, field_errors) in failures.field_errors() {
            for error in field_errors {
                errors.add(camel_case(field), describe(error));
            }
        }
    }
    errors
}

fn describe(error: &validator::ValidationError) -> String {
    if let Some(ref message) = error.message {
        return message.to_string();
    }
    let param = |name: &str| error.params.get(name).map(|v| v.to_string());
    match error.code.as_ref() {
        "length" => match param("max") {
            Some(max) => format!("is too long (maximum is {} characters)", max),
            None => "has an invalid length".to_string(),
        },
        "range" => match param("min") {
            Some(min) => format!("must be greater than or equal to {}", min),
            None => "is out of range".to_string(),
        },
        other => format!("is invalid ({})", other),
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
