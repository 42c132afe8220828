use serde::{Deserialize, Serialize};

use super::draft::{self, Draft, FieldError};
use super::record_id;
use super::{Record, RecordId, ResourceKind};

/// A stocked product. `category_id` points at [`super::Category::id`]; the
/// client does not check that the category exists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "RecordId::is_unsaved")]
    pub id: RecordId,
    /// Document-style `_id` from older backends. Some send it next to `id`;
    /// [`Record::id`] prefers `id` when both are set.
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<RecordId>,
    #[serde(default)]
    pub sku: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_stock_threshold: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Product {
    /// Empty draft pre-assigned to a category, used when the products view
    /// is scoped to one.
    pub fn new_in_category(category_id: Option<RecordId>) -> Self {
        Self {
            category_id,
            ..Self::default()
        }
    }

    /// New products created from a category-scoped view always land in that
    /// category, whatever the form's select says.
    pub fn assign_scope(&mut self, category: Option<&RecordId>) {
        if let Some(category) = category {
            if self.id().is_unsaved() {
                self.category_id = Some(category.clone());
            }
        }
    }

    pub fn is_low_stock(&self) -> bool {
        self.low_stock_threshold
            .is_some_and(|threshold| self.quantity <= threshold)
    }
}

impl Record for Product {
    const KIND: ResourceKind = ResourceKind::Products;

    fn id(&self) -> &RecordId {
        record_id::preferred(&self.id, self.legacy_id.as_ref())
    }
}

impl Draft for Product {
    fn set_field(&mut self, field: &str, value: &str) -> Result<(), FieldError> {
        match field {
            "sku" => self.sku = value.to_string(),
            "name" => self.name = value.to_string(),
            "description" => self.description = draft::optional_text(value),
            "quantity" => self.quantity = draft::parse_number(field, "Quantity", value)?,
            "price" => self.price = draft::parse_optional_number(field, "Price", value)?,
            "low_stock_threshold" => {
                self.low_stock_threshold =
                    draft::parse_optional_number(field, "Low Stock Threshold", value)?
            }
            "category_id" => {
                self.category_id = if draft::is_blank(value) {
                    None
                } else {
                    value.parse().ok()
                }
            }
            other => return Err(FieldError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    fn missing_required(&self) -> Option<&'static str> {
        if draft::is_blank(&self.sku) {
            Some("SKU")
        } else if draft::is_blank(&self.name) {
            Some("Name")
        } else {
            None
        }
    }
}
