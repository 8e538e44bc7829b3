use super::FormValues;
use crate::domain::{FieldDescriptor, FieldKind};
use chrono::NaiveDate;
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Input-level checks a form control enforces before it may be submitted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill out {label}.")]
    Required { field: String, label: String },
    #[error("{label} must be a number.")]
    InvalidNumber { field: String, label: String },
    #[error("{label} must be a date (YYYY-MM-DD).")]
    InvalidDate { field: String, label: String },
    #[error("{label} must be one of the listed options.")]
    UnknownOption { field: String, label: String },
}

impl ValidationError {
    pub fn field(&self) -> &str {
        match self {
            Self::Required { field, .. }
            | Self::InvalidNumber { field, .. }
            | Self::InvalidDate { field, .. }
            | Self::UnknownOption { field, .. } => field,
        }
    }
}

/// Checks `values` against `fields` in template order and reports the first
/// field that would block submission.
pub fn validate(fields: &[FieldDescriptor], values: &FormValues) -> Result<(), ValidationError> {
    fields.iter().try_for_each(|field| {
        let value = values.get(&field.name).map_or("", String::as_str);
        validate_field(field, value)
    })
}

fn validate_field(field: &FieldDescriptor, value: &str) -> Result<(), ValidationError> {
    let field_name = field.name.clone();
    let label = field.label.clone();

    if value.is_empty() {
        return if field.required {
            Err(ValidationError::Required {
                field: field_name,
                label,
            })
        } else {
            Ok(())
        };
    }

    match &field.kind {
        FieldKind::Text | FieldKind::Password => Ok(()),
        FieldKind::Number => {
            let trimmed = value.trim();
            match trimmed.parse::<f64>() {
                Ok(number) if number.is_finite() && !trimmed.starts_with('+') => Ok(()),
                _ => Err(ValidationError::InvalidNumber {
                    field: field_name,
                    label,
                }),
            }
        }
        FieldKind::Date => NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(|_| ())
            .map_err(|_| ValidationError::InvalidDate {
                field: field_name,
                label,
            }),
        FieldKind::Dropdown(options) => {
            if options.iter().any(|option| option == value) {
                Ok(())
            } else {
                Err(ValidationError::UnknownOption {
                    field: field_name,
                    label,
                })
            }
        }
    }
}
