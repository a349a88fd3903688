use strum::IntoEnumIterator;

use crate::catalog::{Catalog, EnrichedProduct, MISSING_PLACEHOLDER};
use crate::session::Listing;
use crate::sort::SortColumn;
use crate::state::FilterState;

pub const NO_MATCH_MESSAGE: &str = "No products matching selected criteria";

const ANSI_RED: &str = "\x1b[31m";
const ANSI_BLUE: &str = "\x1b[34m";
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
}

impl Style {
    fn paint(&self, text: &str, code: &str) -> String {
        if self.color {
            format!("{code}{text}{ANSI_RESET}")
        } else {
            text.to_owned()
        }
    }
}

fn marked(label: &str, active: bool) -> String {
    if active {
        format!("[{label}]")
    } else {
        label.to_owned()
    }
}

/// The filter panel: user tabs, search box and category buttons, with the active choices bracketed.
pub fn render_panel(catalog: &Catalog, state: &FilterState) -> String {
    let mut out = String::new();

    let users = std::iter::once(marked("All", state.is_user_selected("")))
        .chain(
            catalog
                .users()
                .iter()
                .map(|u| marked(&u.name, state.is_user_selected(&u.name))),
        )
        .collect::<Vec<_>>();
    out.push_str(&format!("Users:      {}\n", users.join(" ")));

    let query = &state.criteria().search_query;
    if state.has_query() {
        out.push_str(&format!("Search:     \"{query}\" (clear)\n"));
    } else {
        out.push_str("Search:     -\n");
    }

    let no_category_selected = state.criteria().selected_category_titles.is_empty();
    let categories = std::iter::once(marked("All", no_category_selected))
        .chain(
            catalog
                .categories()
                .iter()
                .map(|c| marked(&c.title, state.is_category_selected(&c.title))),
        )
        .collect::<Vec<_>>();
    out.push_str(&format!("Categories: {}\n", categories.join(" ")));

    out
}

fn cells(product: &EnrichedProduct) -> [String; 4] {
    [
        product.id().to_string(),
        product.name().to_owned(),
        product.category_label(),
        product
            .user_name()
            .unwrap_or(MISSING_PLACEHOLDER)
            .to_owned(),
    ]
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

/// The product table, or the no-match message when nothing is visible.
pub fn render_table(listing: &Listing<'_>, state: &FilterState, style: Style) -> String {
    if listing.is_no_match() {
        return format!("{NO_MATCH_MESSAGE}\n");
    }

    let headers = SortColumn::iter()
        .map(|column| match state.sort() {
            Some(order) if order.column == column => format!("{column} {}", order.direction),
            _ => column.to_string(),
        })
        .collect::<Vec<_>>();
    let rows = listing.rows().iter().map(|p| cells(p)).collect::<Vec<_>>();

    let mut widths = headers.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
    for row in rows.iter() {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| pad(h, *w))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(&style.paint(header_line.trim_end(), ANSI_BOLD));
    out.push('\n');
    let separator = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");
    out.push_str(&separator);
    out.push('\n');

    for (product, row) in listing.rows().iter().zip(rows.iter()) {
        let user_cell = match &product.user {
            Some(user) if user.is_female() => style.paint(&pad(&row[3], widths[3]), ANSI_RED),
            Some(_) => style.paint(&pad(&row[3], widths[3]), ANSI_BLUE),
            None => pad(&row[3], widths[3]),
        };
        let line = format!(
            "{} | {} | {} | {}",
            pad(&row[0], widths[0]),
            pad(&row[1], widths[1]),
            pad(&row[2], widths[2]),
            user_cell,
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tables::Tables;

    fn catalog() -> Catalog {
        Catalog::new(
            Tables::from_json_str(
                r#"{
                    "users": [
                        {"id": 1, "name": "Roma", "sex": "m"},
                        {"id": 2, "name": "Anna", "sex": "f"}
                    ],
                    "categories": [
                        {"id": 1, "title": "Fruits", "icon": "F", "ownerId": 1},
                        {"id": 2, "title": "Drinks", "icon": "D", "ownerId": 2}
                    ],
                    "products": [
                        {"id": 1, "name": "Apple", "categoryId": 1},
                        {"id": 2, "name": "Milk", "categoryId": 2},
                        {"id": 3, "name": "Lost", "categoryId": 9}
                    ]
                }"#,
            )
            .unwrap(),
        )
    }

    #[test]
    fn table_with_placeholders() {
        let catalog = catalog();
        let state = FilterState::new();
        let listing = Listing::compute(&catalog, &state);

        let table = render_table(&listing, &state, Style::default());
        assert_eq!(
            table,
            "ID | Product | Category   | User\n\
             ---+---------+------------+-----\n\
             1  | Apple   | F - Fruits | Roma\n\
             2  | Milk    | D - Drinks | Anna\n\
             3  | Lost    | -          | -\n"
        );
    }

    #[test]
    fn no_match_replaces_table() {
        let catalog = catalog();
        let mut state = FilterState::new();
        state.set_search_query("pizza");
        let listing = Listing::compute(&catalog, &state);

        assert_eq!(
            render_table(&listing, &state, Style::default()),
            format!("{NO_MATCH_MESSAGE}\n")
        );
    }

    #[test]
    fn header_marks_sort_direction() {
        let catalog = catalog();
        let mut state = FilterState::new();
        state.toggle_sort(SortColumn::Product);
        state.toggle_sort(SortColumn::Product);
        let listing = Listing::compute(&catalog, &state);

        let table = render_table(&listing, &state, Style::default());
        let header = table.lines().next().unwrap();
        assert!(header.contains("Product v"));
        assert!(table.lines().nth(2).unwrap().contains("Milk"));
    }

    #[test]
    fn colors_users_by_sex() {
        let catalog = catalog();
        let state = FilterState::new();
        let listing = Listing::compute(&catalog, &state);

        let table = render_table(&listing, &state, Style { color: true });
        assert!(table.contains(&format!("{ANSI_RED}Anna{ANSI_RESET}")));
        assert!(table.contains(&format!("{ANSI_BLUE}Roma{ANSI_RESET}")));
    }

    #[test]
    fn panel_marks_selection() {
        let catalog = catalog();
        let mut state = FilterState::new();
        assert_eq!(
            render_panel(&catalog, &state),
            "Users:      [All] Roma Anna\n\
             Search:     -\n\
             Categories: [All] Fruits Drinks\n"
        );

        state.select_user("Anna");
        state.set_search_query("mi");
        state.toggle_category("Drinks");
        assert_eq!(
            render_panel(&catalog, &state),
            "Users:      All Roma [Anna]\n\
             Search:     \"mi\" (clear)\n\
             Categories: All Fruits [Drinks]\n"
        );
    }
}
