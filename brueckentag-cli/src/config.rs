use anyhow::{Context, Result};
use brueckentag_core::PlannerSettings;
use brueckentag_holidays::Region;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::state::{ensure_brueckentag_home, read_text, write_text};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsSection,
    #[serde(default)]
    pub planner: PlannerSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsSection {
    pub region: Region,
    pub budget: i32,
    /// Planning year; the current year when unset.
    pub year: Option<i32>,
}

impl Default for DefaultsSection {
    fn default() -> Self {
        Self {
            region: Region::default(),
            budget: 30,
            year: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_brueckentag_home()?.join("config.toml"))
}

pub fn parse_config(s: &str) -> Result<Config> {
    toml::from_str(s).context("parse config.toml")
}

pub fn render_config(cfg: &Config) -> Result<String> {
    toml::to_string_pretty(cfg).context("serialize config")
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    parse_config(&read_text(&p)?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    write_text(&p, &render_config(cfg)?)
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

pub fn show_config() -> Result<()> {
    let p = config_path()?;
    let source = if p.exists() { "file" } else { "defaults" };
    println!("# {} ({})", p.display(), source);
    print!("{}", render_config(&load_config()?)?);
    Ok(())
}
