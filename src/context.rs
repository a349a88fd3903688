use std::path::Path;

use crate::catalog::Catalog;
use crate::config::{AppConfig, DataSource};
use crate::tables::Tables;

pub struct AppContext {
    pub config: AppConfig,
    pub catalog: Catalog,
}

impl AppContext {
    /// Reads the config (defaults when `config_path` is `None`) and loads the catalog once.
    /// `data_override` replaces the configured data source.
    pub fn load(config_path: Option<&str>, data_override: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match config_path {
            Some(file_path) => {
                log::info!("Loading config file {file_path}");
                AppConfig::try_read(file_path)?
            }
            None => AppConfig::default(),
        };

        if let Some(path) = data_override {
            config.data_source = DataSource::from_path(path)?;
        }

        let tables = Tables::load(&config.data_source)?;
        Ok(AppContext {
            config,
            catalog: Catalog::new(tables),
        })
    }
}
