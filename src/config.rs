use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Where the three catalog tables are read from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// The sample catalog compiled into the binary.
    #[default]
    Bundled,
    Json(String),
    Sqlite(String),
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ColorChoice {
    /// Color only when writing to a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn use_color(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data_source: DataSource,

    #[serde(default)]
    pub color: ColorChoice,

    /// Print the filter panel after every command in interactive mode.
    #[serde(default)]
    pub show_panel: bool,
}

impl AppConfig {
    pub fn try_read(file_path: &str) -> anyhow::Result<AppConfig> {
        let json = &std::fs::read_to_string(file_path)
            .with_context(|| format!("Reading config file {file_path:?}"))?;
        serde_json::from_str::<AppConfig>(json)
            .with_context(|| format!("Parsing JSON config file {file_path:?}"))
    }
}
