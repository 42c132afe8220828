use serde::{Deserialize, Serialize};

use super::draft::{self, Draft, FieldError};
use super::record_id;
use super::{Record, RecordId, ResourceKind};

/// Someone who owes the shop money.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debtor {
    #[serde(default, skip_serializing_if = "RecordId::is_unsaved")]
    pub id: RecordId,
    /// Document-style `_id` from older backends. Some send it next to `id`;
    /// [`Record::id`] prefers `id` when both are set.
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<RecordId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub initial_amount_owed: f64,
    #[serde(default)]
    pub owes: f64,
    #[serde(default)]
    pub paid: f64,
    /// Captured by the form and sent to the backend, but no view reads it.
    #[serde(default = "default_owing_state")]
    pub owing_state: bool,
}

fn default_owing_state() -> bool {
    true
}

impl Default for Debtor {
    fn default() -> Self {
        Self {
            id: RecordId::default(),
            legacy_id: None,
            name: String::new(),
            description: String::new(),
            initial_amount_owed: 0.0,
            owes: 0.0,
            paid: 0.0,
            owing_state: default_owing_state(),
        }
    }
}

impl Record for Debtor {
    const KIND: ResourceKind = ResourceKind::Debtors;

    fn id(&self) -> &RecordId {
        record_id::preferred(&self.id, self.legacy_id.as_ref())
    }
}

impl Draft for Debtor {
    fn set_field(&mut self, field: &str, value: &str) -> Result<(), FieldError> {
        match field {
            "name" => self.name = value.to_string(),
            "description" => self.description = value.to_string(),
            "initialAmountOwed" => {
                self.initial_amount_owed = draft::parse_number(field, "Owing Amount", value)?
            }
            "owes" => self.owes = draft::parse_number(field, "Owes", value)?,
            "paid" => self.paid = draft::parse_number(field, "Paid", value)?,
            "owingState" => self.owing_state = matches!(value, "true" | "on" | "1"),
            other => return Err(FieldError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    fn missing_required(&self) -> Option<&'static str> {
        if draft::is_blank(&self.name) {
            Some("Name")
        } else if draft::is_blank(&self.description) {
            Some("Description")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_names_are_camel_case() {
        let mut debtor = Debtor::default();
        debtor.set_field("name", "Ann").unwrap();
        debtor.set_field("description", "Fabric").unwrap();
        debtor.set_field("initialAmountOwed", "250").unwrap();

        assert_eq!(
            serde_json::to_value(&debtor).unwrap(),
            json!({
                "name": "Ann",
                "description": "Fabric",
                "initialAmountOwed": 250.0,
                "owes": 0.0,
                "paid": 0.0,
                "owingState": true
            })
        );
    }

    #[test]
    fn records_without_id_still_parse() {
        let debtor: Debtor =
            serde_json::from_value(json!({"name": "Bo", "owes": 10, "paid": 2})).unwrap();
        assert!(debtor.id().is_unsaved());
        assert!(debtor.owing_state);
        assert_eq!(debtor.owes, 10.0);
    }

    #[test]
    fn name_and_description_are_required() {
        let mut debtor = Debtor::default();
        assert_eq!(debtor.missing_required(), Some("Name"));
        debtor.set_field("name", "Ann").unwrap();
        assert_eq!(debtor.missing_required(), Some("Description"));
        debtor.set_field("description", "  ").unwrap();
        assert_eq!(debtor.missing_required(), Some("Description"));
        debtor.set_field("description", "Fabric").unwrap();
        assert_eq!(debtor.missing_required(), None);
    }
}
