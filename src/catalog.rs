use std::collections::HashMap;

use crate::model::{Category, CategoryId, Product, ProductId, User, UserId};
use crate::tables::Tables;

/// Shown in place of a category or user that could not be resolved.
pub const MISSING_PLACEHOLDER: &str = "-";

/// A product together with its resolved category and the category's owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedProduct {
    pub product: Product,
    pub category: Option<Category>,
    /// Always `None` when `category` is `None`.
    pub user: Option<User>,
}

impl EnrichedProduct {
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn name(&self) -> &str {
        &self.product.name
    }

    pub fn category_title(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.title.as_str())
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }

    pub fn category_label(&self) -> String {
        self.category
            .as_ref()
            .map(Category::label)
            .unwrap_or_else(|| MISSING_PLACEHOLDER.to_owned())
    }
}

/// The static tables plus the joined product list derived from them.
#[derive(Debug)]
pub struct Catalog {
    tables: Tables,
    products: Vec<EnrichedProduct>,
}

impl Catalog {
    pub fn new(tables: Tables) -> Catalog {
        let products = enrich_products(&tables);
        Catalog { tables, products }
    }

    pub fn users(&self) -> &[User] {
        self.tables.users()
    }

    pub fn categories(&self) -> &[Category] {
        self.tables.categories()
    }

    /// Enriched products, in the order of the products table.
    pub fn products(&self) -> &[EnrichedProduct] {
        &self.products
    }
}

/// Joins every product to its category and that category's owner. Unresolvable links become `None`.
pub fn enrich_products(tables: &Tables) -> Vec<EnrichedProduct> {
    let categories_by_id: HashMap<CategoryId, &Category> =
        tables.categories().iter().map(|c| (c.id, c)).collect();
    let users_by_id: HashMap<UserId, &User> = tables.users().iter().map(|u| (u.id, u)).collect();

    tables
        .products()
        .iter()
        .map(|product| {
            let category = categories_by_id.get(&product.category_id).copied();
            let user = category.and_then(|category| {
                let user = users_by_id.get(&category.owner_id).copied();
                if user.is_none() {
                    log::warn!(
                        "Category {} references unknown owner {}",
                        category.id,
                        category.owner_id
                    );
                }
                user
            });

            if category.is_none() {
                log::warn!(
                    "Product [{}] {} references unknown category {}",
                    product.id,
                    product.name,
                    product.category_id
                );
            }

            EnrichedProduct {
                product: product.clone(),
                category: category.cloned(),
                user: user.cloned(),
            }
        })
        .collect()
}
