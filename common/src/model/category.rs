use serde::{Deserialize, Serialize};

use super::draft::{self, Draft, FieldError};
use super::record_id;
use super::{Record, RecordId, ResourceKind};

/// A product category.
///
/// Older API revisions sent an item count (`total`) where newer ones send a
/// free-text `description`; both are optional and either may be absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, skip_serializing_if = "RecordId::is_unsaved")]
    pub id: RecordId,
    /// Document-style `_id` from older backends. Some send it next to `id`;
    /// [`Record::id`] prefers `id` when both are set.
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<RecordId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl Category {
    /// Second line of a category card: the description when there is one,
    /// otherwise the legacy item count.
    pub fn subtitle(&self) -> String {
        match (&self.description, self.total) {
            (Some(description), _) if !description.is_empty() => description.clone(),
            (_, Some(total)) => format!("{} items", total),
            _ => String::new(),
        }
    }
}

impl Record for Category {
    const KIND: ResourceKind = ResourceKind::Categories;

    fn id(&self) -> &RecordId {
        record_id::preferred(&self.id, self.legacy_id.as_ref())
    }
}

impl Draft for Category {
    fn set_field(&mut self, field: &str, value: &str) -> Result<(), FieldError> {
        match field {
            "name" => self.name = value.to_string(),
            "description" => self.description = draft::optional_text(value),
            "total" => self.total = draft::parse_optional_number(field, "Total", value)?,
            other => return Err(FieldError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    fn missing_required(&self) -> Option<&'static str> {
        draft::is_blank(&self.name).then_some("Name")
    }
}
