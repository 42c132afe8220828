//! Row and card models for the list views. One entry per fetched record,
//! in the order the backend returned them.

use crate::model::{Category, Debtor, Product, Record, RecordId};

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCard {
    pub id: RecordId,
    pub title: String,
    pub subtitle: String,
}

pub fn category_cards(categories: &[Category]) -> Vec<CategoryCard> {
    categories
        .iter()
        .map(|category| CategoryCard {
            id: category.id().clone(),
            title: category.name.clone(),
            subtitle: category.subtitle(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub sku: String,
    pub name: String,
    pub description: String,
    pub quantity: i64,
    pub price: Option<f64>,
    pub low_stock_threshold: Option<i64>,
    pub category: String,
    pub low_stock: bool,
}

pub fn product_rows(products: &[Product], categories: &[Category]) -> Vec<ProductRow> {
    products
        .iter()
        .map(|product| ProductRow {
            sku: product.sku.clone(),
            name: product.name.clone(),
            description: product
                .description
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| "No description".to_string()),
            quantity: product.quantity,
            price: product.price,
            low_stock_threshold: product.low_stock_threshold,
            category: product
                .category_id
                .as_ref()
                .and_then(|id| categories.iter().find(|c| c.id() == id))
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
            low_stock: product.is_low_stock(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct DebtorRow {
    pub name: String,
    pub description: String,
    pub owes: f64,
    pub initial_amount_owed: f64,
    pub paid: f64,
}

pub fn debtor_rows(debtors: &[Debtor]) -> Vec<DebtorRow> {
    debtors
        .iter()
        .map(|debtor| DebtorRow {
            name: debtor.name.clone(),
            description: debtor.description.clone(),
            owes: debtor.owes,
            initial_amount_owed: debtor.initial_amount_owed,
            paid: debtor.paid,
        })
        .collect()
}

/// Name shown in the products header when the view is scoped to a
/// category. `None` when unscoped.
pub fn scoped_category_name(scope: Option<&RecordId>, categories: &[Category]) -> Option<String> {
    let id = scope?;
    Some(
        categories
            .iter()
            .find(|c| c.id() == id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "Unknown Category".to_string()),
    )
}

pub fn products_heading(category_name: Option<&str>) -> String {
    match category_name {
        Some(name) => format!("Products in {}", name),
        None => "Products".to_string(),
    }
}

pub fn empty_products_message(category_name: Option<&str>) -> String {
    match category_name {
        Some(name) => format!("No products found in {}.", name),
        None => "No products found.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<Category> {
        vec![Category {
            id: 1.into(),
            legacy_id: None,
            name: "Shirts".into(),
            description: Some("Tops".into()),
            total: None,
        }]
    }

    #[test]
    fn product_rows_resolve_category_names() {
        let products = vec![
            Product {
                id: 1.into(),
                name: "Tee".into(),
                category_id: Some(1.into()),
                ..Product::default()
            },
            Product {
                id: 2.into(),
                name: "Mystery".into(),
                category_id: Some(99.into()),
                ..Product::default()
            },
        ];
        let rows = product_rows(&products, &categories());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, "Shirts");
        assert_eq!(rows[0].description, "No description");
        assert_eq!(rows[1].category, "Unknown");
    }

    #[test]
    fn heading_reflects_scope() {
        let cats = categories();
        let name = scoped_category_name(Some(&RecordId::from(1)), &cats);
        assert_eq!(products_heading(name.as_deref()), "Products in Shirts");
        assert_eq!(
            scoped_category_name(Some(&RecordId::from(5)), &cats).as_deref(),
            Some("Unknown Category")
        );
        assert_eq!(scoped_category_name(None, &cats), None);
        assert_eq!(empty_products_message(None), "No products found.");
    }
}
