use crate::filter::FilterCriteria;
use crate::sort::{SortColumn, SortOrder};

/// Everything the user has selected in the filter panel and the table header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    criteria: FilterCriteria,
    sort: Option<SortOrder>,
}

impl FilterState {
    pub fn new() -> FilterState {
        FilterState::default()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> Option<SortOrder> {
        self.sort
    }

    /// An empty name clears the owner filter.
    pub fn select_user(&mut self, name: &str) {
        self.criteria.selected_user_name = name.to_owned();
    }

    pub fn set_search_query(&mut self, text: &str) {
        self.criteria.search_query = text.to_owned();
    }

    pub fn toggle_category(&mut self, title: &str) {
        let titles = &mut self.criteria.selected_category_titles;
        match titles.iter().position(|t| t == title) {
            Some(index) => {
                titles.remove(index);
            }
            None => titles.push(title.to_owned()),
        }
    }

    pub fn clear_categories(&mut self) {
        self.criteria.selected_category_titles.clear();
    }

    /// Clears the three filters. The sort order is not a filter and stays as it is.
    pub fn reset_all(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort = SortOrder::cycle(self.sort, column);
    }

    pub fn is_user_selected(&self, name: &str) -> bool {
        self.criteria.selected_user_name == name
    }

    pub fn is_category_selected(&self, title: &str) -> bool {
        self.criteria.has_category(title)
    }

    /// Whether the clear-search control should be offered.
    pub fn has_query(&self) -> bool {
        !self.criteria.search_query.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn starts_without_filters() {
        let state = FilterState::new();
        assert!(state.criteria().is_default());
        assert!(state.is_user_selected(""));
        assert!(!state.has_query());
        assert_eq!(state.sort(), None);
    }

    #[test]
    fn select_user_and_clear() {
        let mut state = FilterState::new();
        state.select_user("Roma");
        assert!(state.is_user_selected("Roma"));
        assert!(!state.is_user_selected(""));

        state.select_user("");
        assert!(state.is_user_selected(""));
    }

    #[test]
    fn query_is_stored_verbatim() {
        let mut state = FilterState::new();
        state.set_search_query("  ap ");
        assert_eq!(state.criteria().search_query, "  ap ");
        assert!(state.has_query());
        assert_eq!(state.criteria().effective_query(), "ap");
    }

    #[test]
    fn toggle_category_twice_restores_membership() {
        let mut state = FilterState::new();
        state.toggle_category("Drinks");

        let before = state.criteria().selected_category_titles.clone();
        state.toggle_category("Fruits");
        assert!(state.is_category_selected("Fruits"));
        state.toggle_category("Fruits");
        assert_eq!(state.criteria().selected_category_titles, before);

        state.toggle_category("Drinks");
        assert!(state.criteria().selected_category_titles.is_empty());
    }

    #[test]
    fn toggle_keeps_selection_order() {
        let mut state = FilterState::new();
        state.toggle_category("Fruits");
        state.toggle_category("Drinks");
        state.toggle_category("Clothes");
        state.toggle_category("Drinks");
        assert_eq!(
            state.criteria().selected_category_titles,
            vec!["Fruits".to_owned(), "Clothes".to_owned()]
        );

        state.clear_categories();
        assert!(state.criteria().selected_category_titles.is_empty());
    }

    #[test]
    fn reset_all_clears_filters_but_not_sort() {
        let mut state = FilterState::new();
        state.select_user("Anna");
        state.set_search_query("milk");
        state.toggle_category("Drinks");
        state.toggle_sort(SortColumn::Product);

        state.reset_all();
        assert_eq!(state.criteria(), &FilterCriteria::default());
        assert_eq!(state.sort(), Some(SortOrder::asc(SortColumn::Product)));
    }
}
