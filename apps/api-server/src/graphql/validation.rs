//! Input validation for GraphQL arguments.
//!
//! Failures are reported as `<operation>.<field path>: <message>` entries.

use std::borrow::Cow;

use async_graphql::ID;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use super::error::{internal_error, validation_error};

/// Paging arguments of `getPosts`.
#[derive(Debug, Validate)]
pub struct PageArgs {
    #[validate(range(min = 0))]
    pub page_number: i32,
    #[validate(range(min = 1, max = 100))]
    pub page_size: i32,
}

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

// Bounds may be serialized as integers or floats depending on the field type.
fn param(error: &ValidationError, name: &str) -> Option<i64> {
    let value = error.params.get(name)?;
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
}

fn describe(field: &str, error: &ValidationError) -> Cow<'static, str> {
    if let Some(message) = &error.message {
        return message.clone();
    }

    match error.code.as_ref() {
        "not_blank" => format!("{field} is required").into(),
        "length" => format!(
            "size must be between {} and {}",
            param(error, "min").unwrap_or(0),
            param(error, "max").unwrap_or(i64::MAX),
        )
        .into(),
        "range" => {
            let value = param(error, "value");
            match (param(error, "min"), param(error, "max")) {
                (Some(min), _) if value.is_some_and(|v| v < min) => {
                    format!("must be greater than or equal to {min}").into()
                }
                (_, Some(max)) => format!("must be less than or equal to {max}").into(),
                (Some(min), None) => format!("must be greater than or equal to {min}").into(),
                (None, None) => "is out of range".into(),
            }
        }
        code => format!("is invalid ({code})").into(),
    }
}

/// Flatten validator output into path-prefixed messages, fields in name order.
pub fn messages(prefix: &str, errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    let mut out = Vec::new();
    for (field, kind) in fields {
        let path = format!("{prefix}.{}", to_camel_case(field));
        match kind {
            ValidationErrorsKind::Field(list) => {
                out.extend(list.iter().map(|e| format!("{path}: {}", describe(field, e))));
            }
            ValidationErrorsKind::Struct(nested) => out.extend(messages(&path, nested)),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    out.extend(messages(&format!("{path}[{index}]"), nested));
                }
            }
        }
    }
    out
}

fn to_camel_case(field: &str) -> String {
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

/// Validate `value`, reporting failures under `prefix`.
pub fn check(prefix: &str, value: &impl Validate) -> async_graphql::Result<()> {
    value
        .validate()
        .map_err(|errors| validation_error(&messages(prefix, &errors)))
}

/// Parse a required post id argument.
///
/// A missing or empty id is a validation error; a non-numeric one is not.
pub fn require_id(operation: &str, id: Option<ID>) -> async_graphql::Result<i64> {
    let raw = match id {
        Some(id) if !id.trim().is_empty() => id,
        _ => return Err(validation_error(&[format!("{operation}.id: id is required")])),
    };

    raw.parse::<i64>()
        .map_err(|e| internal_error(format!("unparseable post id {:?}: {e}", raw.as_str())))
}
