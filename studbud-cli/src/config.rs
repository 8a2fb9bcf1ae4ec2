use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::state::ensure_studbud_home;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// IANA timezone for "today" and calendar export.
    pub timezone: String,
    pub tasks: TasksSection,
    pub calendar: CalendarSection,
    /// Extra subjects: name -> topics. Checked before the builtin catalog.
    pub catalog: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TasksSection {
    pub min_minutes: u32,
    pub max_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSection {
    /// Prepended to every exported event summary.
    pub prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
            tasks: TasksSection::default(),
            calendar: CalendarSection::default(),
            catalog: BTreeMap::new(),
        }
    }
}

impl Default for TasksSection {
    fn default() -> Self {
        Self {
            min_minutes: 30,
            max_minutes: 90,
        }
    }
}

impl Default for CalendarSection {
    fn default() -> Self {
        Self {
            prefix: "Study: ".to_string(),
        }
    }
}

impl Config {
    pub fn duration_range(&self) -> Result<RangeInclusive<u32>> {
        let (min_minutes, max_minutes) = (self.tasks.min_minutes, self.tasks.max_minutes);
        if min_minutes == 0 || min_minutes > max_minutes {
            bail!("config [tasks]: need 0 < min_minutes <= max_minutes (got {min_minutes}..={max_minutes})");
        }
        Ok(min_minutes..=max_minutes)
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_studbud_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s)
}

pub fn parse_config(s: &str) -> Result<Config> {
    toml::from_str(s).context("parse config.toml")
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_defaults() {
        let cfg = parse_config(
            r#"
timezone = "Asia/Kolkata"

[catalog]
"Organic Chemistry" = ["Alkanes", "Alkenes"]
"#,
        )
        .unwrap();
        assert_eq!(cfg.timezone, "Asia/Kolkata");
        assert_eq!(cfg.tasks, TasksSection::default());
        assert_eq!(cfg.calendar.prefix, "Study: ");
        assert_eq!(cfg.catalog["Organic Chemistry"].len(), 2);
    }

    #[test]
    fn default_serializes_and_parses_back() {
        let s = toml::to_string_pretty(&Config::default()).unwrap();
        assert_eq!(parse_config(&s).unwrap(), Config::default());
    }

    #[test]
    fn duration_range_validated() {
        let mut cfg = Config::default();
        assert_eq!(cfg.duration_range().unwrap(), 30..=90);
        cfg.tasks.min_minutes = 100;
        assert!(cfg.duration_range().is_err());
        cfg.tasks.min_minutes = 0;
        cfg.tasks.max_minutes = 10;
        assert!(cfg.duration_range().is_err());
    }
}
