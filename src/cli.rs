use std::path::PathBuf;

use catfilter::config::ColorChoice;
use catfilter::sort::SortColumn;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Optionally specify the path to the config file to use.
    /// If not set, then the `CATFILTER_CONFIG_FILE` environment variable will be used, if present.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Read the catalog from this file instead of the configured data source.
    /// The extension picks the format: `.json`, or `.sqlite` / `.sqlite3` / `.db`.
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the products matching the given filters and exit.
    Show(ShowArgs),
    /// Read filter commands from standard input, re-printing the products after each one.
    Interactive,
}

#[derive(clap::Args)]
pub struct ShowArgs {
    /// Exact name of the owning user
    #[arg(short, long)]
    pub user: Option<String>,

    /// Case-insensitive part of the product name
    #[arg(short, long)]
    pub query: Option<String>,

    /// Category title; may be repeated to match any of several categories
    #[arg(long = "category", value_name = "TITLE")]
    pub categories: Vec<String>,

    #[arg(short, long, value_enum)]
    pub sort: Option<SortColumn>,

    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Also print the filter panel
    #[arg(short, long)]
    pub panel: bool,
}
