use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

const DEFAULT_USER_AGENT: &str = concat!("storylib/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub library_path: PathBuf,
    pub content_dir: PathBuf,
    /// Working tree the library lives in; git runs here.
    pub repo_dir: PathBuf,
    pub commit: bool,
    pub push: bool,
    pub user_agent: String,
    pub max_retries: u32,
    pub backoff_ms: u64,
}

impl Settings {
    /// Defaults, then `storylib.toml` if present, then `STORYLIB_*` env vars.
    pub fn load() -> Result<Self> {
        Self::builder()?
            .add_source(File::with_name("storylib").required(false))
            .add_source(Environment::with_prefix("STORYLIB"))
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        Ok(Config::builder()
            .set_default("library_path", "./library.json")?
            .set_default("content_dir", "./content")?
            .set_default("repo_dir", ".")?
            .set_default("commit", true)?
            .set_default("push", true)?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .set_default("max_retries", 3)?
            .set_default("backoff_ms", 2000)?)
    }
}
