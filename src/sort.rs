use std::cmp::Ordering;

use crate::catalog::EnrichedProduct;

/// A column of the product table that can be sorted by.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    clap::ValueEnum,
)]
#[strum(ascii_case_insensitive)]
pub enum SortColumn {
    #[strum(to_string = "ID")]
    Id,
    Product,
    Category,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum SortDirection {
    #[strum(serialize = "^")]
    Asc,
    #[strum(serialize = "v")]
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn asc(column: SortColumn) -> SortOrder {
        SortOrder {
            column,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(column: SortColumn) -> SortOrder {
        SortOrder {
            column,
            direction: SortDirection::Desc,
        }
    }

    /// The order after the header of `column` is clicked: ascending, then descending, then unsorted.
    pub fn cycle(current: Option<SortOrder>, column: SortColumn) -> Option<SortOrder> {
        match current {
            Some(order) if order.column == column => match order.direction {
                SortDirection::Asc => Some(SortOrder::desc(column)),
                SortDirection::Desc => None,
            },
            _ => Some(SortOrder::asc(column)),
        }
    }

    pub fn compare(&self, a: &EnrichedProduct, b: &EnrichedProduct) -> Ordering {
        let ordering = match self.column {
            SortColumn::Id => a.id().cmp(&b.id()),
            SortColumn::Product => a.name().cmp(b.name()),
            SortColumn::Category => a
                .category_title()
                .unwrap_or_default()
                .cmp(b.category_title().unwrap_or_default()),
            SortColumn::User => a
                .user_name()
                .unwrap_or_default()
                .cmp(b.user_name().unwrap_or_default()),
        };

        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Stable sort; products with equal keys keep their relative order in both directions.
pub fn sort_products(products: &mut [&EnrichedProduct], order: Option<SortOrder>) {
    if let Some(order) = order {
        products.sort_by(|a, b| order.compare(a, b));
    }
}
