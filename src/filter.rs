use crate::catalog::EnrichedProduct;

/// The user's current filter selections. Empty fields mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Exact owner name to match.
    pub selected_user_name: String,
    /// Kept verbatim as typed; trimmed only when evaluated.
    pub search_query: String,
    /// Category titles to match, in the order they were selected. Never holds duplicates.
    pub selected_category_titles: Vec<String>,
}

impl FilterCriteria {
    pub fn is_default(&self) -> bool {
        self.selected_user_name.is_empty()
            && self.effective_query().is_empty()
            && self.selected_category_titles.is_empty()
    }

    pub fn effective_query(&self) -> &str {
        self.search_query.trim()
    }

    pub fn has_category(&self, title: &str) -> bool {
        self.selected_category_titles.iter().any(|t| t == title)
    }
}

/// Applies the owner, search and category filters in that order, keeping the input order.
pub fn filter_products<'a>(
    products: &'a [EnrichedProduct],
    criteria: &FilterCriteria,
) -> Vec<&'a EnrichedProduct> {
    let mut filtered = products.iter().collect::<Vec<_>>();

    if !criteria.selected_user_name.is_empty() {
        filtered.retain(|p| p.user_name() == Some(criteria.selected_user_name.as_str()));
    }

    let query = criteria.effective_query();
    if !query.is_empty() {
        let query = query.to_lowercase();
        filtered.retain(|p| p.name().to_lowercase().contains(&query));
    }

    if !criteria.selected_category_titles.is_empty() {
        filtered.retain(|p| p.category_title().is_some_and(|t| criteria.has_category(t)));
    }

    filtered
}
