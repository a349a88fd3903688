use crate::catalog::{Catalog, EnrichedProduct};
use crate::filter::filter_products;
use crate::sort::{sort_products, SortColumn, SortOrder};
use crate::state::FilterState;

/// A single user interaction with the filter panel or the table header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectUser(String),
    SetSearchQuery(String),
    ToggleCategory(String),
    ClearCategories,
    ResetAll,
    ToggleSort(SortColumn),
}

/// The products currently visible, already filtered and sorted.
#[derive(Debug)]
pub struct Listing<'c> {
    rows: Vec<&'c EnrichedProduct>,
}

impl<'c> Listing<'c> {
    pub fn compute(catalog: &'c Catalog, state: &FilterState) -> Listing<'c> {
        let mut rows = filter_products(catalog.products(), state.criteria());
        sort_products(&mut rows, state.sort());
        Listing { rows }
    }

    pub fn rows(&self) -> &[&'c EnrichedProduct] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Nothing matches the current selection. Rendered as a dedicated message, not an empty table.
    pub fn is_no_match(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A whole selection given up front, as on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preset {
    pub user: Option<String>,
    pub query: Option<String>,
    /// Repeated titles are selected once.
    pub categories: Vec<String>,
    pub sort: Option<SortOrder>,
}

pub type Listener<'l> = Box<dyn FnMut(&Listing<'_>, &FilterState) + 'l>;

/// Owns the filter state for one catalog and tells listeners about every change.
pub struct Session<'c, 'l> {
    catalog: &'c Catalog,
    state: FilterState,
    listeners: Vec<Listener<'l>>,
}

impl<'c, 'l> Session<'c, 'l> {
    pub fn new(catalog: &'c Catalog) -> Session<'c, 'l> {
        Session {
            catalog,
            state: FilterState::new(),
            listeners: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Listeners are called in registration order after each action.
    pub fn subscribe(&mut self, listener: impl FnMut(&Listing<'_>, &FilterState) + 'l) {
        self.listeners.push(Box::new(listener));
    }

    pub fn listing(&self) -> Listing<'c> {
        Listing::compute(self.catalog, &self.state)
    }

    /// Applies the action, recomputes the listing and notifies every listener before returning it.
    pub fn apply(&mut self, action: Action) -> Listing<'c> {
        log::debug!("Applying {action:?}");
        match action {
            Action::SelectUser(name) => self.state.select_user(&name),
            Action::SetSearchQuery(text) => self.state.set_search_query(&text),
            Action::ToggleCategory(title) => self.state.toggle_category(&title),
            Action::ClearCategories => self.state.clear_categories(),
            Action::ResetAll => self.state.reset_all(),
            Action::ToggleSort(column) => self.state.toggle_sort(column),
        }

        let listing = self.listing();
        log::debug!("{} of {} products visible", listing.len(), self.catalog.products().len());
        for listener in self.listeners.iter_mut() {
            listener(&listing, &self.state);
        }
        listing
    }

    /// Applies every part of the preset as the matching actions.
    pub fn apply_preset(&mut self, preset: Preset) -> Listing<'c> {
        let Preset {
            user,
            query,
            categories,
            sort,
        } = preset;

        if let Some(user) = user {
            self.apply(Action::SelectUser(user));
        }
        if let Some(query) = query {
            self.apply(Action::SetSearchQuery(query));
        }
        for title in categories {
            if !self.state.is_category_selected(&title) {
                self.apply(Action::ToggleCategory(title));
            }
        }
        if let Some(order) = sort {
            while self.state.sort() != Some(order) {
                self.apply(Action::ToggleSort(order.column));
            }
        }

        self.listing()
    }
}
