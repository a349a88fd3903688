use std::io::Cursor;

use catfilter::catalog::Catalog;
use catfilter::render::{Style, NO_MATCH_MESSAGE};
use catfilter::repl::{self, ReplOptions};
use catfilter::tables::Tables;

fn run_commands(commands: &str, show_panel: bool) -> String {
    let catalog = Catalog::new(Tables::bundled().unwrap());
    let options = ReplOptions {
        style: Style::default(),
        show_panel,
        prompt: false,
    };

    let mut output = Vec::new();
    repl::run(&catalog, Cursor::new(commands), &mut output, &options).unwrap();
    String::from_utf8(output).unwrap()
}

/// Splits the output at each table header, so each chunk starts with the rest of a header line.
fn tables(output: &str) -> Vec<&str> {
    output.split("ID | ").skip(1).collect()
}

#[test]
fn starts_with_the_full_catalog() {
    let output = run_commands("", false);
    for name in ["Milk", "Bread", "Laptop", "Pineapple"] {
        assert!(output.contains(name), "{name} missing from {output}");
    }
}

#[test]
fn user_filter_then_unknown_user() {
    let output = run_commands("user Anna\nuser Nobody\n", false);
    let chunks = tables(&output);

    // Anna owns Grocery and Fruits
    let anna = chunks[1];
    assert_eq!(chunks.len(), 2);
    assert!(anna.contains("Bread"));
    assert!(anna.contains("Bananas"));
    assert!(!anna.contains("Milk"));
    assert!(!anna.contains("Laptop"));

    assert!(output.trim_end().ends_with(NO_MATCH_MESSAGE));
}

#[test]
fn search_matches_case_insensitively() {
    let output = run_commands("search APPLE\n", false);
    let last = *tables(&output).last().unwrap();
    assert!(last.contains("Apples"));
    assert!(last.contains("Pineapple"));
    assert!(!last.contains("Milk"));
}

#[test]
fn reset_after_no_match_shows_everything_again() {
    let output = run_commands("search zzz\ncategory Drinks\nreset\n", false);
    assert_eq!(output.matches(NO_MATCH_MESSAGE).count(), 2);
    let last = *tables(&output).last().unwrap();
    assert_eq!(last.lines().count(), 1 + 1 + 12);
}

#[test]
fn bad_command_keeps_session_going() {
    let output = run_commands("jump\nuser Roma\nquit\nuser Anna\n", false);
    assert!(output.contains("Error: Unrecognized command jump"));
    assert!(output.contains("Available commands:"));

    let last = *tables(&output).last().unwrap();
    assert!(last.contains("Laptop"));
    assert!(!last.contains("Bread"));
}

#[test]
fn panel_follows_selection() {
    let output = run_commands("category Fruits\nsearch an\n", true);
    assert!(output.contains("Categories: All Grocery Drinks [Fruits] Electronics Clothes"));
    assert!(output.contains("Search:     \"an\" (clear)"));
    assert!(output.contains("Bananas"));
}

#[test]
fn sort_command_reorders_rows() {
    let output = run_commands("category Electronics\nsort product\nsort product\n", false);
    let last = *tables(&output).last().unwrap();
    let phone = last.find("Phone").unwrap();
    let laptop = last.find("Laptop").unwrap();
    assert!(phone < laptop);
    assert!(last.starts_with("Product v"));
}

#[test]
fn undecodable_line_keeps_session_going() {
    let catalog = Catalog::new(Tables::bundled().unwrap());
    let options = ReplOptions {
        style: Style::default(),
        show_panel: false,
        prompt: false,
    };

    let mut output = Vec::new();
    repl::run(
        &catalog,
        Cursor::new(&b"user \xff\xfe\nuser Anna\n"[..]),
        &mut output,
        &options,
    )
    .unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("Error: Command is not valid UTF-8"));
    assert!(output.contains("Available commands:"));
    let last = *tables(&output).last().unwrap();
    assert!(last.contains("Bread"));
    assert!(!last.contains("Milk"));
}
