//! Form binding for editable records.
//!
//! HTML inputs always hand back strings. A [`Draft`] knows which of its
//! fields are numeric and coerces them, and which text fields are required
//! so a submission can be blocked before any request is made.

use std::str::FromStr;

use super::Record;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("{label} must be a number")]
    InvalidNumber { field: String, label: &'static str },

    #[error("{0} is required")]
    Required(&'static str),
}

/// A record that can be edited through a form modal.
pub trait Draft: Record + Default {
    /// Applies a raw input value to the named field.
    ///
    /// Numeric fields are coerced: a blank value becomes zero (or `None` for
    /// optional numbers), anything unparsable is rejected and the draft is
    /// left untouched.
    fn set_field(&mut self, field: &str, value: &str) -> Result<(), FieldError>;

    /// Label of the first required field that is still blank.
    fn missing_required(&self) -> Option<&'static str>;

    fn validate(&self) -> Result<(), FieldError> {
        match self.missing_required() {
            Some(label) => Err(FieldError::Required(label)),
            None => Ok(()),
        }
    }
}

pub(crate) fn parse_number<T>(field: &str, label: &'static str, value: &str) -> Result<T, FieldError>
where
    T: FromStr + Default,
{
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(T::default());
    }
    trimmed.parse::<T>().map_err(|_| FieldError::InvalidNumber {
        field: field.to_string(),
        label,
    })
}

pub(crate) fn parse_optional_number<T>(
    field: &str,
    label: &'static str,
    value: &str,
) -> Result<Option<T>, FieldError>
where
    T: FromStr + Default,
{
    if value.trim().is_empty() {
        Ok(None)
    } else {
        parse_number(field, label, value).map(Some)
    }
}

pub(crate) fn optional_text(value: &str) -> Option<String> {
    if value.is_empty() { None } else { Some(value.to_string()) }
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
